//! Black Hole Bounce native entry point
//!
//! Runs a headless autopilot session: the ship flies a fixed script of
//! throttle and turns, starting again after each crash, while every frame is
//! tessellated into a vertex buffer. Pass a settings JSON path as the first
//! argument to override preferences or tuning. `RUST_LOG=debug` shows the
//! simulation's spawn and collapse log.

use black_hole_bounce::consts::{TICKS_PER_SECOND, WINDOW_TITLE};
use black_hole_bounce::platform::Key;
use black_hole_bounce::platform::headless::{HeadlessPlatform, RecordingAudio, ScriptedInput};
use black_hole_bounce::renderer::MeshCanvas;
use black_hole_bounce::{Game, Settings};

/// One minute of play per session
const SESSION_FRAMES: u64 = 60 * TICKS_PER_SECOND as u64;
const SESSIONS: u64 = 3;

/// Throttle up, weave left and right, ease off; press Space at the start
/// of each session
fn autopilot() -> ScriptedInput {
    let mut script = ScriptedInput::default();
    for session in 0..SESSIONS {
        let t = session * SESSION_FRAMES;
        script = script
            .tap(Key::Confirm, t)
            .hold(Key::Up, t + 1, 30)
            .hold(Key::Left, t + 60, 45)
            .hold(Key::Right, t + 180, 90)
            .hold(Key::Down, t + 300, 20)
            .hold(Key::Left, t + 420, 60);
    }
    script
}

fn main() {
    env_logger::init();
    log::info!("{} (headless) starting...", WINDOW_TITLE);

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    let mut game = Game::new(settings);
    let mut platform = HeadlessPlatform::new(autopilot(), SESSIONS * SESSION_FRAMES);
    let mut audio = RecordingAudio::default();
    let mut canvas = MeshCanvas::new();

    let frames = game.run(&mut platform, &mut audio, &mut canvas);

    log::info!(
        "Ran {} frames: mode {:?}, score {}, last frame {} vertices ({} bytes)",
        frames,
        game.mode(),
        game.score(),
        canvas.vertices().len(),
        canvas.as_bytes().len()
    );
}

//! Frame driver
//!
//! Glues the simulation to the host collaborators. One frame is exactly one
//! simulation tick:
//! music liveness -> input -> tick -> engine hum -> event sounds -> draw.

use rand::Rng;

use crate::audio::{AudioDevice, AudioManager};
use crate::platform::{Input, Window};
use crate::renderer::{Canvas, Renderer, Sprite};
use crate::settings::Settings;
use crate::sim::{GameMode, GameState, tick};

pub struct Game {
    pub state: GameState,
    renderer: Renderer,
    audio: AudioManager,
    settings: Settings,
}

impl Game {
    /// Build a game on the title screen, seeded from settings or entropy
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(seed, settings.tuning.clone()),
            renderer: Renderer::new(seed, &settings),
            audio: AudioManager::from_settings(&settings),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn mode(&self) -> GameMode {
        self.state.mode
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    /// Take sprite metrics from the host's loaded textures
    ///
    /// Asteroid hit circles and trails sit at the drawn sprite's center; the
    /// ship's exhaust sits half a sprite height behind the hull.
    pub fn fit_sprites(&mut self, canvas: &impl Canvas) {
        let tuning = &mut self.state.tuning;
        tuning.asteroid_sprite_size = canvas.sprite_size(Sprite::Asteroid);
        tuning.ship_sprite_height = canvas.sprite_size(Sprite::Ship).y;
    }

    /// Run one frame
    pub fn frame(
        &mut self,
        input: &impl Input,
        device: &mut impl AudioDevice,
        canvas: &mut impl Canvas,
    ) {
        self.audio.keep_music_alive(device);

        let tick_input = input.sample();
        tick(&mut self.state, &tick_input);

        self.audio.sync_engine(device, &self.state);
        let events = self.state.drain_events();
        self.audio.handle_events(device, &events);

        self.renderer.render(&self.state, canvas);
    }

    /// Run frames until the window asks to close; returns the frame count
    pub fn run<P: Input + Window>(
        &mut self,
        platform: &mut P,
        device: &mut impl AudioDevice,
        canvas: &mut impl Canvas,
    ) -> u64 {
        self.fit_sprites(canvas);
        let mut frames = 0;
        while !platform.should_close() {
            self.frame(&*platform, device, canvas);
            platform.end_frame();
            frames += 1;
        }
        log::info!(
            "Window closed after {} frames ({:?}, score {})",
            frames,
            self.state.mode,
            self.state.score
        );
        frames
    }
}

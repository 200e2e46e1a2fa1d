//! Platform abstraction layer
//!
//! The host windowing library provides:
//! - Keyboard state (held and just-pressed keys)
//! - Window lifecycle and frame pacing
//!
//! Audio lives in `crate::audio`, drawing in `crate::renderer`.

pub mod headless;

use crate::sim::TickInput;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    /// Space: start / play again
    Confirm,
}

/// Keyboard queries
pub trait Input {
    /// Key is held down this frame
    fn is_key_down(&self, key: Key) -> bool;
    /// Key went down this frame
    fn is_key_pressed(&self, key: Key) -> bool;

    /// Sample everything one tick needs
    fn sample(&self) -> TickInput {
        TickInput {
            turn_left: self.is_key_down(Key::Left),
            turn_right: self.is_key_down(Key::Right),
            throttle_up: self.is_key_down(Key::Up),
            throttle_down: self.is_key_down(Key::Down),
            confirm: self.is_key_pressed(Key::Confirm),
        }
    }
}

/// Window lifecycle
pub trait Window {
    /// The user asked to close the window
    fn should_close(&self) -> bool;
    /// Present the frame and wait for the next one (60 Hz pacing is the host's job)
    fn end_frame(&mut self);
}

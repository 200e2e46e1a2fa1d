//! Black Hole Bounce - an arcade survival game around decaying black holes
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, gravity, collisions, game modes)
//! - `renderer`: Back-to-front drawing onto a host-provided canvas
//! - `audio`: Music, engine and explosion sound contracts
//! - `platform`: Input/window collaborator traits and headless implementations
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences

pub mod app;
pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use app::Game;
pub use error::ConfigError;
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical ticks per second (one simulation step per rendered frame)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Play-field dimensions (the whole window)
    pub const SCREEN_WIDTH: f32 = 1540.0;
    pub const SCREEN_HEIGHT: f32 = 840.0;

    /// Window title
    pub const WINDOW_TITLE: &str = "Black Hole Bounce";
}

/// Axis-aligned play-field rectangle anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const SCREEN: Bounds = Bounds {
        width: consts::SCREEN_WIDTH,
        height: consts::SCREEN_HEIGHT,
    };

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True if `pos` lies inside the rectangle grown by `margin` on every side
    pub fn contains(&self, pos: Vec2, margin: f32) -> bool {
        pos.x >= -margin
            && pos.x <= self.width + margin
            && pos.y >= -margin
            && pos.y <= self.height + margin
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::SCREEN
    }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Angle of the vector pointing from `from` to `to`
#[inline]
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

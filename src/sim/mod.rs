//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, no wall-clock time
//! - Seeded RNG only, owned by `GameState`
//! - Stable iteration order (insertion order, oldest first)
//! - No rendering, audio or platform dependencies

pub mod asteroid;
pub mod black_hole;
pub mod collision;
pub mod explosion;
pub mod ship;
pub mod star;
pub mod state;
pub mod tick;
pub mod trail;

pub use asteroid::{Asteroid, AsteroidOutcome, Edge};
pub use black_hole::BlackHole;
pub use collision::{Circle, circles_intersect};
pub use explosion::{ExplosionCluster, Particle, SparkColor};
pub use ship::{Ship, ShipOutcome};
pub use star::{Star, WarningLevel};
pub use state::{GameEvent, GameMode, GameState, SpawnRange, Spin};
pub use tick::{TickInput, tick};
pub use trail::{Trail, TrailPoint};

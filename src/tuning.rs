//! Data-driven game balance
//!
//! Every gameplay constant lives here so a settings file can override any
//! subset of them. Defaults reproduce the shipped game feel.

use std::f32::consts::PI;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Bounds;
use crate::error::ConfigError;

/// Longest tick count the simulation's signed countdowns can hold
const MAX_TICKS: u32 = i32::MAX as u32;

/// Gameplay tuning values, all per-tick quantities at 60 ticks/s
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Black holes ===
    /// Radius a freshly detonated star's black hole starts with
    pub black_hole_radius: f32,
    /// Pull strength at creation
    pub black_hole_force: f32,
    /// Divisor applied to the inverse-square pull
    pub fudge_factor: f32,
    /// Pull strength gained every tick
    pub force_adder: f32,
    /// Radius lost every tick; a hole at or below this radius collapses
    pub decay_rate: f32,
    /// Lethal radius as a fraction of the visible radius
    pub lethal_fraction: f32,
    /// Upper bound of the random per-tick spin
    pub black_hole_max_spin: f32,
    /// Closest distance used in the force law (guards the singularity)
    pub min_force_distance: f32,

    // === Stars ===
    pub star_radius: f32,
    /// Detonation countdown is drawn from `[min, max)`
    pub star_detonation_min: u32,
    pub star_detonation_max: u32,
    pub star_spin: f32,
    /// Stars never spawn closer than this to a screen edge
    pub star_edge_inset: f32,
    pub initial_star_count: u32,

    // === Asteroids ===
    pub asteroid_radius: f32,
    pub asteroid_velocity_scale: f32,
    /// Asteroids survive this far past the screen edge
    pub asteroid_oob_margin: f32,
    /// Distance from the corners along an edge where asteroids never spawn
    pub asteroid_spawn_inset: f32,
    /// How far outside the edge an asteroid appears
    pub asteroid_spawn_offset: f32,
    pub asteroid_spawn_min: u32,
    pub asteroid_spawn_max: u32,
    /// Both bounds of the spawn range shrink by this much after every spawn
    pub asteroid_spawn_shrink: u32,
    pub asteroid_spawn_min_floor: u32,
    pub asteroid_spawn_max_floor: u32,
    /// Asteroid sprite dimensions (collision circle sits at its center)
    pub asteroid_sprite_size: Vec2,

    // === Ship ===
    pub ship_radius: f32,
    pub ship_turn_step: f32,
    pub engine_step: f32,
    pub max_engine_speed: f32,
    /// Per-axis cap on gravity-driven drift
    pub max_drift_speed: f32,
    /// Ship sprite height, used to place the exhaust behind the hull
    pub ship_sprite_height: f32,
    /// Full width of the random exhaust jitter
    pub exhaust_jitter: f32,

    // === Trails ===
    pub trail_decrement: f32,
    pub asteroid_trail_size: f32,

    // === Explosions ===
    pub particle_max_speed: f32,
    pub particle_decay: f32,
    /// Full width of the random offset around the explosion center
    pub particle_jitter: f32,
    pub explosion_small: u32,
    pub explosion_medium: u32,
    pub explosion_large: u32,

    // === Session ===
    pub star_multiplier_period: u32,
    pub star_multiplier_cap: u32,
    pub restart_delay_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            black_hole_radius: 45.0,
            black_hole_force: 2500.0,
            fudge_factor: 3.5,
            force_adder: 20.0,
            decay_rate: 0.25,
            lethal_fraction: 0.4,
            black_hole_max_spin: PI / 15.0,
            min_force_distance: 1.0,

            star_radius: 5.0,
            star_detonation_min: 300,
            star_detonation_max: 600,
            star_spin: PI / 120.0,
            star_edge_inset: 20.0,
            initial_star_count: 5,

            asteroid_radius: 10.0,
            asteroid_velocity_scale: 20.0,
            asteroid_oob_margin: 50.0,
            asteroid_spawn_inset: 40.0,
            asteroid_spawn_offset: 20.0,
            asteroid_spawn_min: 180,
            asteroid_spawn_max: 300,
            asteroid_spawn_shrink: 10,
            asteroid_spawn_min_floor: 20,
            asteroid_spawn_max_floor: 40,
            asteroid_sprite_size: Vec2::new(24.0, 24.0),

            ship_radius: 5.0,
            ship_turn_step: PI / 60.0,
            engine_step: 0.1,
            max_engine_speed: 50.0,
            max_drift_speed: 5.0,
            ship_sprite_height: 32.0,
            exhaust_jitter: 8.0,

            trail_decrement: 0.1,
            asteroid_trail_size: 3.0,

            particle_max_speed: 5.0,
            particle_decay: 0.1,
            particle_jitter: 5.0,
            explosion_small: 15,
            explosion_medium: 25,
            explosion_large: 50,

            star_multiplier_period: 1800,
            star_multiplier_cap: 5,
            restart_delay_ticks: 120,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing keys keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Reject values that would stall or break the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("decay_rate", self.decay_rate),
            ("fudge_factor", self.fudge_factor),
            ("min_force_distance", self.min_force_distance),
            ("trail_decrement", self.trail_decrement),
            ("particle_decay", self.particle_decay),
            ("black_hole_radius", self.black_hole_radius),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::invalid(name, value, "must be positive"));
            }
        }

        if !(self.lethal_fraction > 0.0 && self.lethal_fraction < 1.0) {
            return Err(ConfigError::invalid(
                "lethal_fraction",
                self.lethal_fraction,
                "must lie strictly between 0 and 1",
            ));
        }
        if self.asteroid_spawn_min == 0 || self.asteroid_spawn_min >= self.asteroid_spawn_max {
            return Err(ConfigError::invalid(
                "asteroid_spawn_min",
                self.asteroid_spawn_min,
                "must be non-zero and below asteroid_spawn_max",
            ));
        }
        if self.asteroid_spawn_min_floor == 0
            || self.asteroid_spawn_min_floor >= self.asteroid_spawn_max_floor
        {
            return Err(ConfigError::invalid(
                "asteroid_spawn_min_floor",
                self.asteroid_spawn_min_floor,
                "must be non-zero and below asteroid_spawn_max_floor",
            ));
        }
        if self.star_detonation_min == 0 || self.star_detonation_min >= self.star_detonation_max {
            return Err(ConfigError::invalid(
                "star_detonation_min",
                self.star_detonation_min,
                "must be non-zero and below star_detonation_max",
            ));
        }
        let ticks = [
            ("star_detonation_max", self.star_detonation_max),
            ("asteroid_spawn_max", self.asteroid_spawn_max),
            ("asteroid_spawn_max_floor", self.asteroid_spawn_max_floor),
            ("star_multiplier_period", self.star_multiplier_period),
            ("restart_delay_ticks", self.restart_delay_ticks),
        ];
        for (name, value) in ticks {
            if value > MAX_TICKS {
                return Err(ConfigError::invalid(
                    name,
                    value,
                    "must fit in a signed 32-bit tick count",
                ));
            }
        }

        // Spawn positions are drawn from [inset, side - inset) on the play field
        let shortest_side = Bounds::SCREEN.width.min(Bounds::SCREEN.height);
        let insets = [
            ("star_edge_inset", self.star_edge_inset),
            ("asteroid_spawn_inset", self.asteroid_spawn_inset),
        ];
        for (name, value) in insets {
            if !(value >= 0.0 && 2.0 * value < shortest_side) {
                return Err(ConfigError::invalid(
                    name,
                    value,
                    "must be non-negative and under half the shortest screen side",
                ));
            }
        }

        if self.star_multiplier_cap == 0 {
            return Err(ConfigError::invalid(
                "star_multiplier_cap",
                self.star_multiplier_cap,
                "must be at least 1",
            ));
        }
        if self.restart_delay_ticks == 0 {
            return Err(ConfigError::invalid(
                "restart_delay_ticks",
                self.restart_delay_ticks,
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Lethal radius for a black hole of the given visible radius
    pub fn lethal_radius(&self, radius: f32) -> f32 {
        self.lethal_fraction * radius
    }
}

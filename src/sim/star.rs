//! Stars: spinning time bombs that collapse into black holes

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::Spin;
use crate::Bounds;
use crate::tuning::Tuning;

/// How close a star is to detonating, for tinting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WarningLevel {
    /// More than two thirds of the fuse left
    Calm,
    /// Between one and two thirds left
    Warm,
    /// Less than a third left
    Critical,
}

/// Remaining-fuse thresholds, checked in order
const WARNING_THRESHOLDS: [(f32, WarningLevel); 2] =
    [(0.33, WarningLevel::Critical), (0.67, WarningLevel::Warm)];

#[derive(Debug, Clone)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    pub angle: f32,
    pub spin: Spin,
    /// Fuse length this star was created with
    pub detonation_period: i32,
    /// Ticks left until detonation
    pub detonation_counter: i32,
}

impl Star {
    pub fn new(pos: Vec2, detonation_period: i32, tuning: &Tuning, rng: &mut impl Rng) -> Self {
        Self {
            pos,
            radius: tuning.star_radius,
            angle: rng.random::<f32>() * TAU,
            spin: Spin::random(rng),
            detonation_period,
            detonation_counter: detonation_period,
        }
    }

    /// A star at a random position away from the edges with a random fuse
    pub fn random(bounds: Bounds, tuning: &Tuning, rng: &mut impl Rng) -> Self {
        let inset = tuning.star_edge_inset;
        let pos = Vec2::new(
            rng.random_range(inset..bounds.width - inset),
            rng.random_range(inset..bounds.height - inset),
        );
        let period = rng.random_range(tuning.star_detonation_min..tuning.star_detonation_max);
        let period = i32::try_from(period).unwrap_or(i32::MAX);
        Self::new(pos, period, tuning, rng)
    }

    pub fn advance(&mut self, tuning: &Tuning) {
        self.angle += self.spin.sign() * tuning.star_spin;
        self.detonation_counter -= 1;
    }

    pub fn has_detonated(&self) -> bool {
        self.detonation_counter <= 0
    }

    pub fn warning_level(&self) -> WarningLevel {
        let remaining = self.detonation_counter as f32;
        let period = self.detonation_period as f32;
        WARNING_THRESHOLDS
            .iter()
            .find(|(fraction, _)| remaining < period * fraction)
            .map(|&(_, level)| level)
            .unwrap_or(WarningLevel::Calm)
    }
}

//! Black holes: decaying gravity wells
//!
//! A black hole shrinks every tick while its pull grows. Anything crossing
//! its lethal core is destroyed; everything else is pulled in with an
//! inverse-square force.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::collision::Circle;
use super::state::Spin;
use crate::tuning::Tuning;
use crate::{angle_to, polar_to_cartesian};

#[derive(Debug, Clone)]
pub struct BlackHole {
    pub pos: Vec2,
    pub initial_radius: f32,
    /// Visible radius, shrinks by the decay rate each tick
    pub radius: f32,
    /// Radius of the lethal core, always `lethal_fraction * radius`
    pub lethal_radius: f32,
    pub pull: f32,
    /// Sprite rotation (radians)
    pub angle: f32,
    pub spin: Spin,
    pub spin_speed: f32,
}

impl BlackHole {
    /// Create a black hole with a random orientation and spin
    pub fn new(pos: Vec2, radius: f32, tuning: &Tuning, rng: &mut impl Rng) -> Self {
        Self {
            pos,
            initial_radius: radius,
            radius,
            lethal_radius: tuning.lethal_radius(radius),
            pull: tuning.black_hole_force,
            angle: rng.random::<f32>() * TAU,
            spin: Spin::random(rng),
            spin_speed: rng.random::<f32>() * tuning.black_hole_max_spin,
        }
    }

    /// Decay one tick
    ///
    /// The lethal core shrinks linearly by `lethal_fraction * decay_rate`,
    /// which keeps it a fixed fraction of the visible radius.
    pub fn advance(&mut self, tuning: &Tuning) {
        self.radius -= tuning.decay_rate;
        let lethal_decay = tuning.lethal_fraction * tuning.decay_rate;
        self.lethal_radius = (self.lethal_radius - lethal_decay).max(0.0);
        self.pull += tuning.force_adder;
        self.angle += self.spin.sign() * self.spin_speed;
    }

    /// Gravitational pull exerted on `point`
    ///
    /// Magnitude is `pull / (fudge_factor * d^2)`, directed from `point`
    /// toward the center. `d` is clamped to `min_force_distance`.
    pub fn force_on(&self, point: Vec2, tuning: &Tuning) -> Vec2 {
        let theta = angle_to(point, self.pos);
        let distance = point.distance(self.pos).max(tuning.min_force_distance);
        let magnitude = self.pull / (tuning.fudge_factor * distance * distance);
        polar_to_cartesian(magnitude, theta)
    }

    pub fn lethal_circle(&self) -> Circle {
        Circle::new(self.pos, self.lethal_radius)
    }

    /// A hole at or below one tick of decay is spent
    pub fn has_collapsed(&self, tuning: &Tuning) -> bool {
        self.radius <= tuning.decay_rate
    }

    /// Current size relative to birth size (sprite scale)
    pub fn scale(&self) -> f32 {
        self.radius / self.initial_radius
    }
}

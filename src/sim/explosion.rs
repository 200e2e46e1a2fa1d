//! Explosions: decorative radial bursts of sparks
//!
//! Sparks fly straight out from the blast and slow down until they stop;
//! a cluster is finished once its last spark has stopped.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::polar_to_cartesian;
use crate::tuning::Tuning;

/// Spark palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparkColor {
    Red,
    Orange,
    Yellow,
    Gold,
}

impl SparkColor {
    pub const PALETTE: [SparkColor; 4] = [
        SparkColor::Red,
        SparkColor::Orange,
        SparkColor::Yellow,
        SparkColor::Gold,
    ];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::PALETTE[rng.random_range(0..Self::PALETTE.len())]
    }
}

/// A single spark
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    /// Heading (radians), fixed for the spark's lifetime
    pub angle: f32,
    pub speed: f32,
    pub color: SparkColor,
}

impl Particle {
    pub fn advance(&mut self, decay: f32) {
        self.pos += polar_to_cartesian(self.speed, self.angle);
        self.speed -= decay;
    }

    pub fn is_spent(&self) -> bool {
        self.speed <= 0.0
    }
}

/// A burst of sparks around a blast center
#[derive(Debug, Clone)]
pub struct ExplosionCluster {
    pub center: Vec2,
    pub particles: Vec<Particle>,
}

impl ExplosionCluster {
    /// Scatter `count` sparks in random directions around `center`
    pub fn new(center: Vec2, count: u32, tuning: &Tuning, rng: &mut impl Rng) -> Self {
        let jitter = tuning.particle_jitter;
        let particles = (0..count)
            .map(|_| {
                let offset = Vec2::new(
                    rng.random::<f32>() * jitter - jitter / 2.0,
                    rng.random::<f32>() * jitter - jitter / 2.0,
                );
                Particle {
                    pos: center + offset,
                    angle: rng.random::<f32>() * TAU,
                    speed: rng.random::<f32>() * tuning.particle_max_speed,
                    color: SparkColor::random(rng),
                }
            })
            .collect();

        Self { center, particles }
    }

    /// Move every spark and drop the ones that have stopped
    pub fn advance(&mut self, tuning: &Tuning) {
        for particle in &mut self.particles {
            particle.advance(tuning.particle_decay);
        }
        self.particles.retain(|p| !p.is_spent());
    }

    pub fn is_finished(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_cluster_spawns_requested_sparks() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let center = Vec2::new(700.0, 400.0);
        let cluster = ExplosionCluster::new(center, 50, &tuning, &mut rng);

        assert_eq!(cluster.particles.len(), 50);
        for p in &cluster.particles {
            assert!((p.pos - center).abs().max_element() <= tuning.particle_jitter / 2.0);
            assert!((0.0..TAU).contains(&p.angle));
            assert!((0.0..tuning.particle_max_speed).contains(&p.speed));
        }
    }

    #[test]
    fn test_particle_moves_along_heading_and_slows() {
        let mut p = Particle {
            pos: Vec2::ZERO,
            angle: 0.0,
            speed: 2.0,
            color: SparkColor::Gold,
        };
        p.advance(0.1);
        assert!((p.pos - Vec2::new(2.0, 0.0)).length() < 1e-6);
        assert!((p.speed - 1.9).abs() < 1e-6);
    }

    #[test]
    fn test_cluster_burns_out() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(9);
        let mut cluster = ExplosionCluster::new(Vec2::ZERO, 15, &tuning, &mut rng);

        // max speed 5 at 0.1 per tick: gone after about 50 ticks
        for _ in 0..60 {
            cluster.advance(&tuning);
        }
        assert!(cluster.is_finished());
    }

    #[test]
    fn test_empty_cluster_is_finished() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(9);
        let cluster = ExplosionCluster::new(Vec2::ZERO, 0, &tuning, &mut rng);
        assert!(cluster.is_finished());
    }
}

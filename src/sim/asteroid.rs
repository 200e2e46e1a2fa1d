//! Asteroids: ballistic hazards pulled around by every black hole

use glam::Vec2;
use rand::Rng;

use super::black_hole::BlackHole;
use super::collision::Circle;
use super::trail::Trail;
use crate::Bounds;
use crate::tuning::Tuning;

/// Screen edge an asteroid enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// What happened to an asteroid during one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AsteroidOutcome {
    /// Still in flight
    Flying,
    /// Drifted past the out-of-bounds margin
    OutOfBounds,
    /// Crushed by a black hole's lethal core at this position
    Consumed { at: Vec2 },
}

/// An asteroid
///
/// `pos` is the sprite's top-left corner; physics acts on it directly while
/// the ship hit test and vapor trail use the sprite center.
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub pos: Vec2,
    pub radius: f32,
    pub vel: Vec2,
    pub trail: Trail,
    pub alive: bool,
}

impl Asteroid {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            radius,
            vel,
            trail: Trail::new(),
            alive: true,
        }
    }

    /// Spawn just outside a random edge, heading inward with a random sideways drift
    pub fn spawn_at_edge(bounds: Bounds, tuning: &Tuning, rng: &mut impl Rng) -> (Self, Edge) {
        let edge = Edge::random(rng);
        let sideways = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let scale = rng.random::<f32>() * tuning.asteroid_velocity_scale;
        let inset = tuning.asteroid_spawn_inset;
        let offset = tuning.asteroid_spawn_offset;

        let (pos, vel) = match edge {
            Edge::Top => (
                Vec2::new(rng.random_range(inset..bounds.width - inset), -offset),
                Vec2::new(
                    rng.random::<f32>() * sideways * scale,
                    rng.random::<f32>() * scale,
                ),
            ),
            Edge::Right => (
                Vec2::new(bounds.width + offset, rng.random_range(inset..bounds.height - inset)),
                Vec2::new(
                    rng.random::<f32>() * -scale,
                    rng.random::<f32>() * sideways * scale,
                ),
            ),
            Edge::Bottom => (
                Vec2::new(rng.random_range(inset..bounds.width - inset), bounds.height + offset),
                Vec2::new(
                    rng.random::<f32>() * sideways * scale,
                    rng.random::<f32>() * -scale,
                ),
            ),
            Edge::Left => (
                Vec2::new(-offset, rng.random_range(inset..bounds.height - inset)),
                Vec2::new(
                    rng.random::<f32>() * scale,
                    rng.random::<f32>() * sideways * scale,
                ),
            ),
        };

        (Self::new(pos, vel, tuning.asteroid_radius), edge)
    }

    /// Advance one tick under the pull of `black_holes`
    ///
    /// Leaving the field or touching a lethal core ends the tick early and
    /// marks the asteroid dead.
    pub fn advance(
        &mut self,
        black_holes: &[BlackHole],
        bounds: Bounds,
        tuning: &Tuning,
    ) -> AsteroidOutcome {
        if !bounds.contains(self.pos, tuning.asteroid_oob_margin) {
            self.alive = false;
            return AsteroidOutcome::OutOfBounds;
        }

        let body = Circle::new(self.pos, self.radius);
        for hole in black_holes {
            if body.intersects(&hole.lethal_circle()) {
                self.alive = false;
                return AsteroidOutcome::Consumed { at: self.pos };
            }
            self.vel += hole.force_on(self.pos, tuning);
        }

        self.pos += self.vel;

        let center = self.sprite_center(tuning);
        self.trail
            .age_and_push(tuning.trail_decrement, center, tuning.asteroid_trail_size);

        AsteroidOutcome::Flying
    }

    pub fn sprite_center(&self, tuning: &Tuning) -> Vec2 {
        self.pos + tuning.asteroid_sprite_size / 2.0
    }

    /// Hit circle the ship tests against
    pub fn collision_circle(&self, tuning: &Tuning) -> Circle {
        Circle::new(self.sprite_center(tuning), self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn hole(pos: Vec2) -> BlackHole {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        BlackHole::new(pos, tuning.black_hole_radius, &tuning, &mut rng)
    }

    #[test]
    fn test_linear_motion_without_black_holes() {
        let tuning = Tuning::default();
        let start = Vec2::new(200.0, 300.0);
        let vel = Vec2::new(1.5, -0.5);
        let mut asteroid = Asteroid::new(start, vel, tuning.asteroid_radius);

        for _ in 0..40 {
            let outcome = asteroid.advance(&[], Bounds::SCREEN, &tuning);
            assert_eq!(outcome, AsteroidOutcome::Flying);
        }
        let expected = start + vel * 40.0;
        assert!((asteroid.pos - expected).length() < 1e-3);
        assert_eq!(asteroid.vel, vel);
    }

    #[test]
    fn test_single_black_hole_pull() {
        let tuning = Tuning::default();
        let mut asteroid = Asteroid::new(Vec2::new(500.0, 600.0), Vec2::ZERO, 10.0);
        let holes = [hole(Vec2::new(500.0, 500.0))];

        asteroid.advance(&holes, Bounds::SCREEN, &tuning);

        let expected = 2500.0 / (3.5 * 100.0f32 * 100.0);
        assert!((asteroid.vel.length() - expected).abs() < 1e-5);
        assert!((expected - 0.0714).abs() < 1e-4);
        assert!(asteroid.vel.x.abs() < 1e-6);
        assert!(asteroid.vel.y < 0.0);
        assert!(asteroid.alive);
    }

    #[test]
    fn test_forces_sum_linearly() {
        let tuning = Tuning::default();
        let holes = [hole(Vec2::new(400.0, 400.0)), hole(Vec2::new(700.0, 400.0))];
        let start = Vec2::new(550.0, 300.0);
        let expected: Vec2 = holes.iter().map(|h| h.force_on(start, &tuning)).sum();

        let mut asteroid = Asteroid::new(start, Vec2::ZERO, 10.0);
        asteroid.advance(&holes, Bounds::SCREEN, &tuning);
        assert!((asteroid.vel - expected).length() < 1e-6);
    }

    #[test]
    fn test_consumed_by_lethal_core() {
        let tuning = Tuning::default();
        let holes = [hole(Vec2::new(500.0, 500.0))];
        let mut asteroid = Asteroid::new(Vec2::new(520.0, 500.0), Vec2::new(3.0, 0.0), 10.0);

        let outcome = asteroid.advance(&holes, Bounds::SCREEN, &tuning);
        assert_eq!(
            outcome,
            AsteroidOutcome::Consumed {
                at: Vec2::new(520.0, 500.0)
            }
        );
        assert!(!asteroid.alive);
        // no physics after being consumed
        assert_eq!(asteroid.pos, Vec2::new(520.0, 500.0));
        assert!(asteroid.trail.is_empty());
    }

    #[test]
    fn test_out_of_bounds_margin() {
        let tuning = Tuning::default();
        let mut inside = Asteroid::new(Vec2::new(-40.0, 100.0), Vec2::ZERO, 10.0);
        assert_eq!(
            inside.advance(&[], Bounds::SCREEN, &tuning),
            AsteroidOutcome::Flying
        );

        let mut outside = Asteroid::new(Vec2::new(-60.0, 100.0), Vec2::ZERO, 10.0);
        assert_eq!(
            outside.advance(&[], Bounds::SCREEN, &tuning),
            AsteroidOutcome::OutOfBounds
        );
        assert!(!outside.alive);
    }

    #[test]
    fn test_trail_follows_sprite_center() {
        let tuning = Tuning::default();
        let mut asteroid = Asteroid::new(Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0), 10.0);
        asteroid.advance(&[], Bounds::SCREEN, &tuning);
        let puff = asteroid.trail.points()[0];
        assert_eq!(puff.pos, Vec2::new(101.0, 100.0) + tuning.asteroid_sprite_size / 2.0);
        assert_eq!(puff.size, tuning.asteroid_trail_size);
    }

    #[test]
    fn test_edge_spawns_head_inward() {
        let tuning = Tuning::default();
        let bounds = Bounds::SCREEN;
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            let (asteroid, edge) = Asteroid::spawn_at_edge(bounds, &tuning, &mut rng);
            assert!(bounds.contains(asteroid.pos, tuning.asteroid_oob_margin));
            match edge {
                Edge::Top => {
                    assert!(asteroid.pos.y < 0.0);
                    assert!(asteroid.vel.y >= 0.0);
                }
                Edge::Right => {
                    assert!(asteroid.pos.x > bounds.width);
                    assert!(asteroid.vel.x <= 0.0);
                }
                Edge::Bottom => {
                    assert!(asteroid.pos.y > bounds.height);
                    assert!(asteroid.vel.y <= 0.0);
                }
                Edge::Left => {
                    assert!(asteroid.pos.x < 0.0);
                    assert!(asteroid.vel.x >= 0.0);
                }
            }
            assert!(asteroid.vel.abs().max_element() <= tuning.asteroid_velocity_scale);
        }
    }
}

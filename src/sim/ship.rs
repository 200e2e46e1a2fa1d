//! The player's ship
//!
//! Thrust comes from the engine along the facing direction; black holes add
//! a drift velocity on top of it. Leaving the screen, touching an asteroid
//! or touching a lethal core is fatal.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use rand::Rng;

use super::asteroid::Asteroid;
use super::black_hole::BlackHole;
use super::collision::Circle;
use super::trail::Trail;
use crate::tuning::Tuning;
use crate::{Bounds, polar_to_cartesian};

/// What happened to the ship during one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShipOutcome {
    /// Already dead, nothing simulated
    Wreck,
    /// Alive and moved
    Flying,
    /// Left the screen
    OutOfBounds,
    /// Rammed the asteroid at `index` (sprite position `at`)
    HitAsteroid { index: usize, at: Vec2 },
    /// Fell into the lethal core of the black hole at `index`
    Swallowed { index: usize },
}

impl ShipOutcome {
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ShipOutcome::OutOfBounds | ShipOutcome::HitAsteroid { .. } | ShipOutcome::Swallowed { .. }
        )
    }
}

#[derive(Debug, Clone)]
pub struct Ship {
    pub pos: Vec2,
    pub radius: f32,
    /// Facing (radians, 0 = +x)
    pub angle: f32,
    /// Gravity-driven drift, clamped per axis
    pub vel: Vec2,
    /// Thrust along the facing direction
    pub engine_speed: f32,
    pub trail: Trail,
    pub dead: bool,
}

impl Ship {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            radius: tuning.ship_radius,
            angle: 0.0,
            vel: Vec2::ZERO,
            engine_speed: 0.0,
            trail: Trail::new(),
            dead: false,
        }
    }

    pub fn turn_left(&mut self, tuning: &Tuning) {
        self.angle -= tuning.ship_turn_step;
    }

    pub fn turn_right(&mut self, tuning: &Tuning) {
        self.angle += tuning.ship_turn_step;
    }

    /// Unclamped until the next `advance`
    pub fn increase_speed(&mut self, tuning: &Tuning) {
        self.engine_speed += tuning.engine_step;
    }

    /// Unclamped until the next `advance`
    pub fn decrease_speed(&mut self, tuning: &Tuning) {
        self.engine_speed -= tuning.engine_step;
    }

    pub fn hull(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    /// Engine displacement for this tick
    pub fn thrust(&self) -> Vec2 {
        polar_to_cartesian(self.engine_speed, self.angle)
    }

    /// Advance one tick
    ///
    /// Checks run in order: screen bounds, asteroids, black holes. The first
    /// fatal hit ends the tick.
    pub fn advance(
        &mut self,
        asteroids: &[Asteroid],
        black_holes: &[BlackHole],
        bounds: Bounds,
        tuning: &Tuning,
        rng: &mut impl Rng,
    ) -> ShipOutcome {
        if self.dead {
            return ShipOutcome::Wreck;
        }

        self.engine_speed = self.engine_speed.clamp(0.0, tuning.max_engine_speed);

        let outcome = self.check_collisions(asteroids, black_holes, bounds, tuning);
        if outcome.is_fatal() {
            self.dead = true;
            return outcome;
        }

        for hole in black_holes {
            self.vel += hole.force_on(self.pos, tuning);
        }

        self.pos += self.thrust() + self.vel;
        let cap = tuning.max_drift_speed;
        self.vel = self.vel.clamp(Vec2::splat(-cap), Vec2::splat(cap));

        let exhaust = self.exhaust_point(tuning, rng);
        self.trail
            .age_and_push(tuning.trail_decrement, exhaust, self.engine_speed / 2.0);

        ShipOutcome::Flying
    }

    fn check_collisions(
        &self,
        asteroids: &[Asteroid],
        black_holes: &[BlackHole],
        bounds: Bounds,
        tuning: &Tuning,
    ) -> ShipOutcome {
        if !bounds.contains(self.pos, 0.0) {
            return ShipOutcome::OutOfBounds;
        }

        let hull = self.hull();
        for (index, asteroid) in asteroids.iter().enumerate() {
            if asteroid.alive && hull.intersects(&asteroid.collision_circle(tuning)) {
                return ShipOutcome::HitAsteroid {
                    index,
                    at: asteroid.pos,
                };
            }
        }

        for (index, hole) in black_holes.iter().enumerate() {
            if hull.intersects(&hole.lethal_circle()) {
                return ShipOutcome::Swallowed { index };
            }
        }

        ShipOutcome::Flying
    }

    /// Point half a hull length behind the ship, jittered along the hull axis
    fn exhaust_point(&self, tuning: &Tuning, rng: &mut impl Rng) -> Vec2 {
        let jitter = (rng.random::<f32>() - 0.5) * tuning.exhaust_jitter;
        let reach = (tuning.ship_sprite_height + jitter) / 2.0;
        let theta = FRAC_PI_2 - self.angle;
        Vec2::new(
            self.pos.x - reach * theta.sin(),
            self.pos.y - reach * theta.cos(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup() -> (Ship, Tuning, Pcg32) {
        let tuning = Tuning::default();
        let ship = Ship::new(Bounds::SCREEN.center(), &tuning);
        (ship, tuning, Pcg32::seed_from_u64(21))
    }

    fn hole(pos: Vec2, tuning: &Tuning) -> BlackHole {
        let mut rng = Pcg32::seed_from_u64(2);
        BlackHole::new(pos, tuning.black_hole_radius, tuning, &mut rng)
    }

    #[test]
    fn test_sixty_throttle_steps() {
        let (mut ship, tuning, mut rng) = setup();
        ship.angle = 0.7;
        let start = ship.pos;
        for _ in 0..60 {
            ship.increase_speed(&tuning);
        }
        let outcome = ship.advance(&[], &[], Bounds::SCREEN, &tuning, &mut rng);

        assert_eq!(outcome, ShipOutcome::Flying);
        assert!((ship.engine_speed - 6.0).abs() < 1e-4);
        let expected = start + Vec2::new(0.7f32.cos() * 6.0, 0.7f32.sin() * 6.0);
        assert!((ship.pos - expected).length() < 1e-3);
    }

    #[test]
    fn test_engine_speed_floor() {
        let (mut ship, tuning, mut rng) = setup();
        for _ in 0..5 {
            ship.decrease_speed(&tuning);
        }
        ship.advance(&[], &[], Bounds::SCREEN, &tuning, &mut rng);
        assert_eq!(ship.engine_speed, 0.0);
        assert_eq!(ship.pos, Bounds::SCREEN.center());
    }

    #[test]
    fn test_out_of_bounds_is_fatal_without_margin() {
        let (mut ship, tuning, mut rng) = setup();
        ship.pos = Vec2::new(-0.5, 100.0);
        let outcome = ship.advance(&[], &[], Bounds::SCREEN, &tuning, &mut rng);
        assert_eq!(outcome, ShipOutcome::OutOfBounds);
        assert!(ship.dead);
    }

    #[test]
    fn test_dead_ship_is_frozen() {
        let (mut ship, tuning, mut rng) = setup();
        ship.dead = true;
        ship.engine_speed = 10.0;
        let pos = ship.pos;
        let outcome = ship.advance(&[], &[], Bounds::SCREEN, &tuning, &mut rng);
        assert_eq!(outcome, ShipOutcome::Wreck);
        assert_eq!(ship.pos, pos);
        assert!(ship.trail.is_empty());
    }

    #[test]
    fn test_asteroid_collision_uses_sprite_center() {
        let (mut ship, tuning, mut rng) = setup();
        let half = tuning.asteroid_sprite_size / 2.0;
        let asteroids = [
            Asteroid::new(Vec2::new(50.0, 50.0), Vec2::ZERO, 10.0),
            Asteroid::new(ship.pos - half + Vec2::new(12.0, 0.0), Vec2::ZERO, 10.0),
        ];
        let outcome = ship.advance(&asteroids, &[], Bounds::SCREEN, &tuning, &mut rng);
        assert_eq!(
            outcome,
            ShipOutcome::HitAsteroid {
                index: 1,
                at: asteroids[1].pos
            }
        );
        assert!(ship.dead);
    }

    #[test]
    fn test_dead_asteroids_are_ignored() {
        let (mut ship, tuning, mut rng) = setup();
        let half = tuning.asteroid_sprite_size / 2.0;
        let mut wreck = Asteroid::new(ship.pos - half, Vec2::ZERO, 10.0);
        wreck.alive = false;
        let outcome = ship.advance(&[wreck], &[], Bounds::SCREEN, &tuning, &mut rng);
        assert_eq!(outcome, ShipOutcome::Flying);
    }

    #[test]
    fn test_swallowed_by_lethal_core() {
        let (mut ship, tuning, mut rng) = setup();
        let holes = [hole(ship.pos + Vec2::new(20.0, 0.0), &tuning)];
        let outcome = ship.advance(&[], &holes, Bounds::SCREEN, &tuning, &mut rng);
        assert_eq!(outcome, ShipOutcome::Swallowed { index: 0 });
        assert!(ship.dead);
    }

    #[test]
    fn test_gravity_drift_and_cap() {
        let (mut ship, tuning, mut rng) = setup();
        let holes = [hole(ship.pos + Vec2::new(100.0, 0.0), &tuning)];
        ship.advance(&[], &holes, Bounds::SCREEN, &tuning, &mut rng);
        assert!(ship.vel.x > 0.0);
        assert!(ship.vel.y.abs() < 1e-6);

        ship.vel = Vec2::new(40.0, -40.0);
        ship.pos = Bounds::SCREEN.center();
        ship.advance(&[], &[], Bounds::SCREEN, &tuning, &mut rng);
        // unclamped drift moves the ship before the cap applies
        assert!((ship.pos - (Bounds::SCREEN.center() + Vec2::new(40.0, -40.0))).length() < 1e-3);
        assert_eq!(ship.vel, Vec2::new(5.0, -5.0));
    }

    #[test]
    fn test_exhaust_trails_behind() {
        let (mut ship, tuning, mut rng) = setup();
        ship.engine_speed = 4.0;
        ship.advance(&[], &[], Bounds::SCREEN, &tuning, &mut rng);
        let puff = ship.trail.points()[0];
        // facing +x, exhaust sits to the left of the hull
        assert!(puff.pos.x < ship.pos.x);
        assert!((puff.pos.y - ship.pos.y).abs() < 1e-3);
        assert_eq!(puff.size, 2.0);
    }

    proptest! {
        #[test]
        fn prop_engine_speed_clamped_after_advance(steps in 0usize..2000, down in proptest::bool::ANY) {
            let (mut ship, tuning, mut rng) = setup();
            for _ in 0..steps {
                if down {
                    ship.decrease_speed(&tuning);
                } else {
                    ship.increase_speed(&tuning);
                }
            }
            ship.advance(&[], &[], Bounds::SCREEN, &tuning, &mut rng);
            prop_assert!(ship.engine_speed >= 0.0);
            prop_assert!(ship.engine_speed <= tuning.max_engine_speed);
        }
    }
}

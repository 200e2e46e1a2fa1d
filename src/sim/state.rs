//! Game state and core simulation types
//!
//! `GameState` is the single simulation context: it owns every entity
//! collection, the session counters and the seeded RNG. It is built once
//! and reset in place for each new session.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::asteroid::Asteroid;
use super::black_hole::BlackHole;
use super::explosion::ExplosionCluster;
use super::ship::Ship;
use super::star::Star;
use crate::Bounds;
use crate::tuning::Tuning;

/// Current mode of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Title screen, waiting for confirm
    Start,
    /// Active gameplay
    Play,
    /// Final score screen, waiting for confirm
    Restart,
}

/// Fixed rotation direction chosen at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

impl Spin {
    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.random_bool(0.5) {
            Spin::Clockwise
        } else {
            Spin::CounterClockwise
        }
    }

    /// Sign applied to angle increments (screen y points down)
    pub fn sign(&self) -> f32 {
        match self {
            Spin::Clockwise => 1.0,
            Spin::CounterClockwise => -1.0,
        }
    }
}

/// Half-open range of ticks the next asteroid countdown is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnRange {
    pub min: u32,
    pub max: u32,
}

impl SpawnRange {
    pub fn initial(tuning: &Tuning) -> Self {
        Self {
            min: tuning.asteroid_spawn_min,
            max: tuning.asteroid_spawn_max,
        }
    }

    /// Narrow the range after a spawn, never below the floors
    pub fn shrink(&mut self, tuning: &Tuning) {
        let step = tuning.asteroid_spawn_shrink;
        self.min = self.min.saturating_sub(step).max(tuning.asteroid_spawn_min_floor);
        self.max = self.max.saturating_sub(step).max(tuning.asteroid_spawn_max_floor);
    }

    pub fn sample(&self, rng: &mut impl Rng) -> i32 {
        let ticks = if self.min >= self.max {
            self.min
        } else {
            rng.random_range(self.min..self.max)
        };
        i32::try_from(ticks).unwrap_or(i32::MAX)
    }
}

/// Something noteworthy that happened during a tick
///
/// Drained by the frame driver to trigger sounds and logging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    ModeChanged { from: GameMode, to: GameMode },
    ExplosionSpawned { at: Vec2, particles: u32 },
    ShipDestroyed { at: Vec2 },
    BlackHoleCollapsed { at: Vec2, stars_spawned: u32 },
    StarDetonated { at: Vec2 },
    AsteroidSpawned { at: Vec2 },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub bounds: Bounds,
    pub mode: GameMode,
    /// Ticks survived this session
    pub score: u64,
    /// Ticks simulated in `Play` this session
    pub time_ticks: u64,

    pub ship: Ship,
    /// Live entities, oldest first
    pub black_holes: Vec<BlackHole>,
    pub stars: Vec<Star>,
    pub asteroids: Vec<Asteroid>,
    pub explosions: Vec<ExplosionCluster>,

    pub asteroid_countdown: i32,
    pub asteroid_range: SpawnRange,
    pub star_multiplier: u32,
    pub star_multiplier_countdown: i32,
    /// Ticks left before the death screen, counts down once the ship dies
    pub restart_countdown: i32,
    /// Set once the ship's death explosion has been spawned
    pub final_explosion_spawned: bool,

    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a state on the title screen
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self::with_rng(seed, Pcg32::seed_from_u64(seed), tuning)
    }

    /// Create a state around an existing RNG stream
    pub fn with_rng(seed: u64, rng: Pcg32, tuning: Tuning) -> Self {
        let bounds = Bounds::SCREEN;
        Self {
            seed,
            rng,
            ship: Ship::new(bounds.center(), &tuning),
            bounds,
            mode: GameMode::Start,
            score: 0,
            time_ticks: 0,
            black_holes: Vec::new(),
            stars: Vec::new(),
            asteroids: Vec::new(),
            explosions: Vec::new(),
            asteroid_countdown: tuning.asteroid_spawn_min as i32,
            asteroid_range: SpawnRange::initial(&tuning),
            star_multiplier: 1,
            star_multiplier_countdown: tuning.star_multiplier_period as i32,
            restart_countdown: tuning.restart_delay_ticks as i32,
            final_explosion_spawned: false,
            events: Vec::new(),
            tuning,
        }
    }

    /// Reset everything for a fresh session (the RNG stream continues)
    pub fn reset(&mut self) {
        let tuning = &self.tuning;
        self.ship = Ship::new(self.bounds.center(), tuning);
        self.black_holes.clear();
        self.asteroids.clear();
        self.explosions.clear();
        self.final_explosion_spawned = false;
        self.restart_countdown = tuning.restart_delay_ticks as i32;
        self.asteroid_range = SpawnRange::initial(tuning);
        self.asteroid_countdown = self.asteroid_range.sample(&mut self.rng);
        self.star_multiplier = 1;
        self.star_multiplier_countdown = tuning.star_multiplier_period as i32;
        self.score = 0;
        self.time_ticks = 0;

        self.stars.clear();
        for _ in 0..self.tuning.initial_star_count {
            self.spawn_random_star();
        }
        log::info!(
            "Session reset (seed {}, {} stars)",
            self.seed,
            self.stars.len()
        );
    }

    /// Switch modes, recording the transition
    pub fn set_mode(&mut self, mode: GameMode) {
        if self.mode != mode {
            log::info!("Mode {:?} -> {:?} (score {})", self.mode, mode, self.score);
            self.events.push(GameEvent::ModeChanged {
                from: self.mode,
                to: mode,
            });
            self.mode = mode;
        }
    }

    pub fn spawn_random_star(&mut self) {
        let star = Star::random(self.bounds, &self.tuning, &mut self.rng);
        self.stars.push(star);
    }

    pub fn spawn_black_hole(&mut self, pos: Vec2) {
        let hole = BlackHole::new(pos, self.tuning.black_hole_radius, &self.tuning, &mut self.rng);
        self.black_holes.push(hole);
    }

    pub fn spawn_explosion(&mut self, at: Vec2, particles: u32) {
        let cluster = ExplosionCluster::new(at, particles, &self.tuning, &mut self.rng);
        self.explosions.push(cluster);
        self.events.push(GameEvent::ExplosionSpawned { at, particles });
    }

    /// Launch an asteroid from a random edge and schedule the next one
    pub fn spawn_asteroid(&mut self) {
        let (asteroid, edge) = Asteroid::spawn_at_edge(self.bounds, &self.tuning, &mut self.rng);
        let at = asteroid.pos;
        self.asteroids.push(asteroid);
        self.events.push(GameEvent::AsteroidSpawned { at });

        self.asteroid_range.shrink(&self.tuning);
        self.asteroid_countdown = self.asteroid_range.sample(&mut self.rng);
        log::debug!(
            "Asteroid from {:?} at {:?}, next in {} ticks (range {}..{})",
            edge,
            at,
            self.asteroid_countdown,
            self.asteroid_range.min,
            self.asteroid_range.max
        );
    }

    /// Take all events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_waits_on_title() {
        let state = GameState::new(1, Tuning::default());
        assert_eq!(state.mode, GameMode::Start);
        assert!(state.stars.is_empty());
        assert_eq!(state.ship.pos, Vec2::new(770.0, 420.0));
    }

    #[test]
    fn test_reset_populates_session() {
        let mut state = GameState::new(2, Tuning::default());
        state.reset();
        assert_eq!(state.stars.len(), 5);
        assert!(state.black_holes.is_empty());
        assert!(state.asteroids.is_empty());
        assert_eq!(state.star_multiplier, 1);
        assert_eq!(state.restart_countdown, 120);
        assert!((180..300).contains(&state.asteroid_countdown));
    }

    #[test]
    fn test_spawn_range_shrinks_to_floors() {
        let tuning = Tuning::default();
        let mut range = SpawnRange::initial(&tuning);
        range.shrink(&tuning);
        assert_eq!(range, SpawnRange { min: 170, max: 290 });
        for _ in 0..100 {
            range.shrink(&tuning);
        }
        assert_eq!(range, SpawnRange { min: 20, max: 40 });
    }

    #[test]
    fn test_spawn_asteroid_schedules_next() {
        let mut state = GameState::new(3, Tuning::default());
        state.spawn_asteroid();
        assert_eq!(state.asteroids.len(), 1);
        assert!((170..290).contains(&state.asteroid_countdown));
        assert!(matches!(
            state.drain_events().as_slice(),
            [GameEvent::AsteroidSpawned { .. }]
        ));
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_set_mode_records_once() {
        let mut state = GameState::new(4, Tuning::default());
        state.set_mode(GameMode::Play);
        state.set_mode(GameMode::Play);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::ModeChanged {
                from: GameMode::Start,
                to: GameMode::Play
            }]
        );
    }
}

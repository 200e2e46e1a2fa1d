//! Per-frame simulation tick
//!
//! One call advances the game by exactly one frame. The update order inside
//! `Play` is fixed; changing it changes how the game feels.

use super::asteroid::AsteroidOutcome;
use super::ship::ShipOutcome;
use super::state::{GameEvent, GameMode, GameState};

/// Input sampled for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held keys
    pub turn_left: bool,
    pub turn_right: bool,
    pub throttle_up: bool,
    pub throttle_down: bool,
    /// Edge-triggered confirm (start / play again)
    pub confirm: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    handle_input(state, input);

    if state.mode == GameMode::Play {
        update_play(state);
    }
}

fn handle_input(state: &mut GameState, input: &TickInput) {
    match state.mode {
        GameMode::Play => {
            // A wreck does not answer the controls
            if state.ship.dead {
                return;
            }
            let tuning = &state.tuning;
            let ship = &mut state.ship;
            if input.turn_right {
                ship.turn_right(tuning);
            }
            if input.turn_left {
                ship.turn_left(tuning);
            }
            if input.throttle_up {
                ship.increase_speed(tuning);
            }
            if input.throttle_down {
                ship.decrease_speed(tuning);
            }
        }
        GameMode::Start | GameMode::Restart => {
            if input.confirm {
                state.reset();
                state.set_mode(GameMode::Play);
            }
        }
    }
}

fn update_play(state: &mut GameState) {
    state.time_ticks += 1;

    // Death bookkeeping: one big explosion, then count down to the score screen
    if state.ship.dead {
        if !state.final_explosion_spawned {
            let at = state.ship.pos;
            state.spawn_explosion(at, state.tuning.explosion_large);
            state.final_explosion_spawned = true;
        }
        // Only a dead ship counts down, so a live ship never reaches Restart
        // whatever restart_delay_ticks is (validated to be at least 1)
        state.restart_countdown -= 1;
    }
    if state.restart_countdown <= 0 {
        state.set_mode(GameMode::Restart);
    }

    if !state.ship.dead {
        state.score += 1;
    }

    state.asteroid_countdown -= 1;
    if state.asteroid_countdown <= 0 {
        state.spawn_asteroid();
    }

    state.star_multiplier_countdown -= 1;
    if state.star_multiplier_countdown <= 0 {
        state.star_multiplier = (state.star_multiplier + 1).min(state.tuning.star_multiplier_cap);
        state.star_multiplier_countdown = state.tuning.star_multiplier_period as i32;
        log::debug!("Star multiplier now {}", state.star_multiplier);
    }

    advance_ship(state);
    advance_black_holes(state);
    advance_stars(state);
    advance_asteroids(state);
    advance_explosions(state);
}

fn advance_ship(state: &mut GameState) {
    let outcome = state.ship.advance(
        &state.asteroids,
        &state.black_holes,
        state.bounds,
        &state.tuning,
        &mut state.rng,
    );

    if !outcome.is_fatal() {
        return;
    }

    log::debug!("Ship destroyed: {:?}", outcome);
    state.events.push(GameEvent::ShipDestroyed { at: state.ship.pos });
    if let ShipOutcome::HitAsteroid { index, at } = outcome {
        state.asteroids[index].alive = false;
        state.spawn_explosion(at, state.tuning.explosion_medium);
    }
}

/// Decay every hole; each one that collapses pays out `star_multiplier` stars
fn advance_black_holes(state: &mut GameState) {
    let holes = std::mem::take(&mut state.black_holes);
    let mut survivors = Vec::with_capacity(holes.len());

    for mut hole in holes {
        hole.advance(&state.tuning);
        if !hole.has_collapsed(&state.tuning) {
            survivors.push(hole);
            continue;
        }

        let reward = state.star_multiplier;
        for _ in 0..reward {
            state.spawn_random_star();
        }
        log::debug!("Black hole at {:?} collapsed, {} new stars", hole.pos, reward);
        state.events.push(GameEvent::BlackHoleCollapsed {
            at: hole.pos,
            stars_spawned: reward,
        });
    }

    state.black_holes = survivors;
}

/// Burn every fuse; detonated stars become black holes at their position
fn advance_stars(state: &mut GameState) {
    let stars = std::mem::take(&mut state.stars);
    let mut survivors = Vec::with_capacity(stars.len());

    for mut star in stars {
        star.advance(&state.tuning);
        if !star.has_detonated() {
            survivors.push(star);
            continue;
        }

        log::debug!("Star at {:?} detonated", star.pos);
        state.spawn_black_hole(star.pos);
        state.events.push(GameEvent::StarDetonated { at: star.pos });
    }

    state.stars = survivors;
}

fn advance_asteroids(state: &mut GameState) {
    let mut consumed = Vec::new();

    for asteroid in state.asteroids.iter_mut().filter(|a| a.alive) {
        let outcome = asteroid.advance(&state.black_holes, state.bounds, &state.tuning);
        if let AsteroidOutcome::Consumed { at } = outcome {
            consumed.push(at);
        }
    }

    state.asteroids.retain(|a| a.alive);
    for at in consumed {
        state.spawn_explosion(at, state.tuning.explosion_small);
    }
}

fn advance_explosions(state: &mut GameState) {
    for cluster in &mut state.explosions {
        cluster.advance(&state.tuning);
    }
    state.explosions.retain(|c| !c.is_finished());
}

//! Superboss encounter controller
//!
//! Inactive until the score reaches the next threshold (1000, then 5000, 10000,
//! 15000, ...). While active it owns the hazard schedule: aimed lasers or radial
//! bursts depending on its kind, plus a red star every 300 frames.

use glam::Vec2;

use super::collision::overlaps;
use super::combat::damage_player;
use super::motion::{ease_toward, orbit_target, pursue};
use super::random::RandomSource;
use super::state::{GameEvent, GameState, Laser, Star, Superboss, SuperbossKind};
use crate::consts::*;
use crate::polar_to_cartesian;

/// Threshold that follows `current` once a superboss has been triggered
pub fn next_threshold(current: u64) -> u64 {
    if current == SUPERBOSS_FIRST_THRESHOLD {
        SUPERBOSS_THRESHOLD_STEP
    } else {
        current + SUPERBOSS_THRESHOLD_STEP
    }
}

/// Activate the superboss if the score has crossed the threshold
pub fn check_activation(state: &mut GameState, rng: &mut dyn RandomSource) {
    if state.superboss.active || state.score < state.next_superboss_threshold {
        return;
    }
    activate(state, rng);
    state.next_superboss_threshold = next_threshold(state.next_superboss_threshold);
}

/// Reset the superboss to full health above the top edge and clear the field
pub fn activate(state: &mut GameState, rng: &mut dyn RandomSource) {
    let kind = if rng.next_unit() < 0.5 {
        SuperbossKind::Chase
    } else {
        SuperbossKind::Orbit
    };

    let boss = &mut state.superboss;
    boss.active = true;
    boss.hp = SUPERBOSS_HP;
    boss.max_hp = SUPERBOSS_HP;
    boss.kind = kind;
    boss.body.pos = Superboss::entry_position();

    state.monsters.clear();
    state.elites.clear();
    state.red_stars.clear();
    state.superboss_encounters += 1;

    log::info!(
        "Superboss #{} ({:?}) activated at score {}",
        state.superboss_encounters,
        kind,
        state.score
    );
    state.emit(GameEvent::SuperbossSpawned { kind });
}

/// Subtract `amount` hp; defeats the superboss when hp drops to zero or below
pub fn damage_superboss(state: &mut GameState, amount: i32) {
    if !state.superboss.active {
        return;
    }
    state.superboss.hp -= amount;
    if state.superboss.hp <= 0 {
        defeat(state);
    }
}

fn defeat(state: &mut GameState) {
    state.superboss.active = false;
    state.score += SUPERBOSS_SCORE;
    state.red_stars.clear();
    log::info!(
        "Superboss defeated, score {} (next at {})",
        state.score,
        state.next_superboss_threshold
    );
    state.emit(GameEvent::SuperbossDefeated);
}

/// Move, attack and spawn hazards for the current frame
pub fn update_superboss(state: &mut GameState, now_ms: f64, rng: &mut dyn RandomSource) {
    if !state.superboss.active {
        return;
    }

    let frame = state.frames;
    match state.superboss.kind {
        SuperbossKind::Chase => {
            let target = state.player.body.pos;
            let angle = pursue(&mut state.superboss.body, target, SUPERBOSS_SPEED);
            if frame % CHASE_FIRE_INTERVAL == 0 {
                let muzzle = state.superboss.body.center() - Vec2::splat(LASER_MUZZLE_OFFSET);
                let vel = polar_to_cartesian(LASER_SPEED, angle);
                state.lasers.push(Laser::new(muzzle, CHASE_LASER_SIZE, vel));
                state.emit(GameEvent::LaserFired);
            }
        }
        SuperbossKind::Orbit => {
            let target = orbit_target(frame, state.superboss.body.size);
            ease_toward(&mut state.superboss.body, target);
            if frame % BURST_INTERVAL == 0 {
                fire_radial_burst(state);
            }
        }
    }

    if frame % RED_STAR_INTERVAL == 0 {
        let pos = Vec2::new(
            rng.next_unit() * (PLAYFIELD_WIDTH - STAR_SIZE),
            rng.next_unit() * (PLAYFIELD_HEIGHT - STAR_SIZE),
        );
        state.red_stars.push(Star::new(pos));
    }

    if overlaps(&state.player.body, &state.superboss.body) {
        damage_player(state, now_ms);
    }
}

/// Evenly spaced ring of lasers from the superboss center
fn fire_radial_burst(state: &mut GameState) {
    let muzzle = state.superboss.body.center() - Vec2::splat(LASER_MUZZLE_OFFSET);
    let speed = LASER_SPEED * BURST_SPEED_FACTOR;
    for i in 0..BURST_COUNT {
        let angle = i as f32 / BURST_COUNT as f32 * std::f32::consts::TAU;
        let vel = polar_to_cartesian(speed, angle);
        state.lasers.push(Laser::new(muzzle, BURST_LASER_SIZE, vel));
    }
    state.emit(GameEvent::RadialBurst);
}

//! Fixed-order simulation tick
//!
//! One call advances the run by exactly one frame. The host supplies input, the
//! current wall-clock reading and the random source; nothing else leaks in.

use super::combat::{
    resolve_enemy_contact, resolve_golden_stars, resolve_laser_hits, resolve_projectiles,
    resolve_red_stars,
};
use super::motion::{advance_linear, move_player, pursue};
use super::random::RandomSource;
use super::spawn::update_spawns;
use super::state::{GameEvent, GamePhase, GameState, Projectile};
use super::superboss::{check_activation, update_superboss};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held direction keys
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire pressed this tick (edge-triggered)
    pub fire: bool,
    /// Pause toggle pressed this tick (edge-triggered)
    pub pause: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64, rng: &mut dyn RandomSource) {
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::GameOver => {}
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    if input.fire {
        state.projectiles.push(Projectile::fired_from(&state.player));
        state.emit(GameEvent::Shot);
    }

    state.player.refresh_invincibility(now_ms);
    state.frames += 1;

    move_player(&mut state.player, input);

    for p in state.projectiles.iter_mut() {
        p.active = advance_linear(&mut p.body, p.vel);
    }
    for l in state.lasers.iter_mut() {
        l.active = advance_linear(&mut l.body, l.vel);
    }

    check_activation(state, rng);
    update_spawns(state, rng);
    update_superboss(state, now_ms, rng);
    if state.is_game_over() {
        state.prune();
        return;
    }

    let target = state.player.body.pos;
    for m in state.monsters.iter_mut() {
        pursue(&mut m.body, target, MONSTER_SPEED);
    }
    for e in state.elites.iter_mut() {
        pursue(&mut e.body, target, MONSTER_SPEED * ELITE_SPEED_FACTOR);
    }

    resolve_enemy_contact(state, now_ms);
    resolve_laser_hits(state, now_ms);
    if state.is_game_over() {
        state.prune();
        return;
    }

    resolve_red_stars(state);
    resolve_projectiles(state, rng);
    resolve_golden_stars(state);

    state.prune();
}

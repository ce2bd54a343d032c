//! Frame-cadence enemy spawning
//!
//! Basic enemies enter from a random point just past a random edge; elites enter
//! from the midpoint of a random edge, further out. Both channels stay quiet while
//! the superboss is up.

use glam::Vec2;

use super::random::RandomSource;
use super::state::{Elite, GameEvent, GameState, Monster};
use crate::consts::*;

/// One of the four playfield edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    pub fn random(rng: &mut dyn RandomSource) -> Self {
        Self::ALL[rng.pick(Self::ALL.len())]
    }
}

/// Spawn point for a basic enemy: fully off-screen, uniformly along the edge
pub fn monster_spawn_point(rng: &mut dyn RandomSource) -> Vec2 {
    match Edge::random(rng) {
        Edge::Top => Vec2::new(rng.next_unit() * PLAYFIELD_WIDTH, -MONSTER_SIZE),
        Edge::Bottom => Vec2::new(rng.next_unit() * PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
        Edge::Left => Vec2::new(-MONSTER_SIZE, rng.next_unit() * PLAYFIELD_HEIGHT),
        Edge::Right => Vec2::new(PLAYFIELD_WIDTH, rng.next_unit() * PLAYFIELD_HEIGHT),
    }
}

/// Spawn point for an elite: midpoint of the edge, pushed further out
pub fn elite_spawn_point(rng: &mut dyn RandomSource) -> Vec2 {
    let mid = crate::playfield_center();
    match Edge::random(rng) {
        Edge::Top => Vec2::new(mid.x, -ELITE_SPAWN_OFFSET),
        Edge::Bottom => Vec2::new(mid.x, PLAYFIELD_HEIGHT + ELITE_SPAWN_OFFSET),
        Edge::Left => Vec2::new(-ELITE_SPAWN_OFFSET, mid.y),
        Edge::Right => Vec2::new(PLAYFIELD_WIDTH + ELITE_SPAWN_OFFSET, mid.y),
    }
}

/// Run the spawn schedule for the current frame
pub fn update_spawns(state: &mut GameState, rng: &mut dyn RandomSource) {
    if state.superboss.active {
        return;
    }

    if state.frames % MONSTER_SPAWN_INTERVAL == 0 {
        let pos = monster_spawn_point(rng);
        state.monsters.push(Monster::new(pos));
    }

    if state.frames % ELITE_SPAWN_INTERVAL == 0 && state.elites.is_empty() {
        let pos = elite_spawn_point(rng);
        log::debug!("Elite spawned at ({}, {}) on frame {}", pos.x, pos.y, state.frames);
        state.elites.push(Elite::new(pos));
        state.emit(GameEvent::EliteSpawned);
    }
}

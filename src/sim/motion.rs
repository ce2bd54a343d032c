//! Per-class movement rules
//!
//! Enemies use pure pursuit: the heading is recomputed from scratch every tick,
//! with no inertia. Projectiles and lasers move linearly and expire off-screen.

use glam::Vec2;

use super::state::{Body, Player};
use super::tick::TickInput;
use crate::consts::*;
use crate::{bearing, polar_to_cartesian};

/// Move the player by the held direction keys, clamped to the playfield.
///
/// Vertical keys are applied before horizontal ones, so with diagonal input the
/// facing ends up on the horizontal axis. A key pressed against the wall the
/// player is already touching neither moves nor re-faces it.
pub fn move_player(player: &mut Player, input: &TickInput) {
    let max = Vec2::new(
        PLAYFIELD_WIDTH - player.body.size.x,
        PLAYFIELD_HEIGHT - player.body.size.y,
    );
    let pos = &mut player.body.pos;

    if input.up && pos.y > 0.0 {
        pos.y = (pos.y - PLAYER_SPEED).max(0.0);
        player.facing = Vec2::new(0.0, -1.0);
    }
    if input.down && pos.y < max.y {
        pos.y = (pos.y + PLAYER_SPEED).min(max.y);
        player.facing = Vec2::new(0.0, 1.0);
    }
    if input.left && pos.x > 0.0 {
        pos.x = (pos.x - PLAYER_SPEED).max(0.0);
        player.facing = Vec2::new(-1.0, 0.0);
    }
    if input.right && pos.x < max.x {
        pos.x = (pos.x + PLAYER_SPEED).min(max.x);
        player.facing = Vec2::new(1.0, 0.0);
    }
}

/// Step `body` toward `target` at `speed`, returning the heading used
pub fn pursue(body: &mut Body, target: Vec2, speed: f32) -> f32 {
    let angle = bearing(body.pos, target);
    body.pos += polar_to_cartesian(speed, angle);
    angle
}

/// Advance a body along its velocity; returns false once it has left the playfield
pub fn advance_linear(body: &mut Body, vel: Vec2) -> bool {
    body.pos += vel;
    !body.fully_outside_playfield()
}

/// Point on the orbit circle at `frame`, expressed as a top-left position for a
/// body of `size`
pub fn orbit_target(frame: u64, size: Vec2) -> Vec2 {
    let angle = frame as f32 * ORBIT_RATE;
    crate::playfield_center() + polar_to_cartesian(ORBIT_RADIUS, angle) - size / 2.0
}

/// Close `ORBIT_EASE` of the remaining gap toward `target`
pub fn ease_toward(body: &mut Body, target: Vec2) {
    body.pos += (target - body.pos) * ORBIT_EASE;
}

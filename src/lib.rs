//! Highland Siege - a top-down arcade shooter core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, AI, superboss, collisions, scoring)
//! - `platform`: Clock and key-value storage collaborators
//! - `session`: Run lifecycle (start, pause, quit, game over, records)
//! - `highscores` / `settings`: Per-mode best scores and player preferences

pub mod highscores;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use session::{GameOverReport, GameSession};
pub use settings::Settings;

use glam::Vec2;

/// Gameplay constants. Sizes and speeds are in pixels and pixels per frame.
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player
    pub const PLAYER_SIZE: f32 = 64.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const NORMAL_LIVES: u8 = 3;
    pub const HARD_LIVES: u8 = 1;
    /// Wall-clock invincibility window after taking a hit
    pub const INVINCIBILITY_MS: f64 = 2000.0;
    /// Sprite blink half-period while invincible
    pub const FLICKER_PERIOD_MS: f64 = 200.0;

    /// Player projectiles
    pub const PROJECTILE_SIZE: f32 = 16.0;
    pub const PROJECTILE_SPEED: f32 = 7.0;

    /// Basic enemies ("monsters")
    pub const MONSTER_SIZE: f32 = 64.0;
    pub const MONSTER_SPEED: f32 = 2.0;
    pub const MONSTER_SPAWN_INTERVAL: u64 = 100;

    /// Elite enemies ("bosses")
    pub const ELITE_SIZE: f32 = 120.0;
    pub const ELITE_HP: i32 = 5;
    pub const ELITE_SPEED_FACTOR: f32 = 0.7;
    pub const ELITE_SPAWN_INTERVAL: u64 = 600;
    pub const ELITE_SPAWN_OFFSET: f32 = 150.0;
    pub const REVENGE_MINIONS: usize = 5;
    pub const REVENGE_JITTER: f32 = 30.0;

    /// Superboss
    pub const SUPERBOSS_SIZE: f32 = 150.0;
    pub const SUPERBOSS_HP: i32 = 50;
    pub const SUPERBOSS_SPEED: f32 = 1.5;
    pub const SUPERBOSS_ENTRY_Y: f32 = -200.0;
    pub const SUPERBOSS_FIRST_THRESHOLD: u64 = 1000;
    pub const SUPERBOSS_THRESHOLD_STEP: u64 = 5000;
    pub const CHASE_FIRE_INTERVAL: u64 = 60;
    pub const ORBIT_RADIUS: f32 = 200.0;
    pub const ORBIT_RATE: f32 = 0.02;
    pub const ORBIT_EASE: f32 = 0.05;
    pub const BURST_INTERVAL: u64 = 100;
    pub const BURST_COUNT: usize = 8;
    pub const BURST_SPEED_FACTOR: f32 = 0.7;
    pub const RED_STAR_INTERVAL: u64 = 300;
    pub const RED_STAR_DAMAGE: i32 = 10;

    /// Superboss lasers
    pub const LASER_SPEED: f32 = 6.0;
    pub const CHASE_LASER_SIZE: (f32, f32) = (8.0, 20.0);
    pub const BURST_LASER_SIZE: (f32, f32) = (12.0, 12.0);
    /// Lasers leave from the superboss center shifted by this much
    pub const LASER_MUZZLE_OFFSET: f32 = 4.0;

    /// Golden and red stars
    pub const STAR_SIZE: f32 = 24.0;

    /// Score awards
    pub const MONSTER_SCORE: u64 = 10;
    pub const ELITE_SCORE: u64 = 100;
    pub const SUPERBOSS_SCORE: u64 = 1000;
    pub const GOLDEN_STAR_SCORE_PER_KILL: u64 = 10;
}

/// Angle (radians) of the vector pointing from `from` to `to`
#[inline]
pub fn bearing(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Center of the playfield
#[inline]
pub fn playfield_center() -> Vec2 {
    Vec2::new(consts::PLAYFIELD_WIDTH / 2.0, consts::PLAYFIELD_HEIGHT / 2.0)
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. Given the same inputs, clock readings and
//! random values, a run replays exactly:
//! - Frame-counted cadences only
//! - Injected random source only
//! - Wall-clock time only for the invincibility window
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod combat;
pub mod motion;
pub mod random;
pub mod spawn;
pub mod state;
pub mod superboss;
pub mod tick;

pub use collision::{Rect, hitbox, overlaps};
pub use combat::{damage_player, heal_player};
pub use random::{RandomSource, ScriptedRandom};
pub use state::{
    Body, Elite, EntityClass, GameEvent, GamePhase, GameState, Laser, Mode, Monster, Player,
    Projectile, Star, Superboss, SuperbossKind,
};
pub use tick::{TickInput, tick};

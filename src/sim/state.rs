//! Game state and core simulation types
//!
//! Every entity the simulation owns lives in `GameState`. Hosts read it after each
//! tick to render; nothing outside the tick mutates it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Difficulty selected before a run starts, fixed for the whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Normal,
    Hard,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Normal => "Normal",
            Mode::Hard => "Hard",
        }
    }

    /// Starting life count, which is also the healing cap
    pub fn max_lives(&self) -> u8 {
        match self {
            Mode::Normal => NORMAL_LIVES,
            Mode::Hard => HARD_LIVES,
        }
    }
}

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation advances every tick
    Playing,
    /// Everything frozen until the pause toggle fires again
    Paused,
    /// Lives ran out; the state is kept for the game-over screen
    GameOver,
}

/// Entity class tag, fixed at creation. Drives hitbox padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityClass {
    Player,
    Projectile,
    Monster,
    Elite,
    Superboss,
    Laser,
    Star,
}

impl EntityClass {
    /// Inset applied to every side of the sprite rectangle for collisions
    pub fn padding(&self) -> f32 {
        match self {
            EntityClass::Player => 15.0,
            EntityClass::Projectile => 4.0,
            EntityClass::Elite => 30.0,
            EntityClass::Superboss => 20.0,
            EntityClass::Monster | EntityClass::Laser | EntityClass::Star => 15.0,
        }
    }
}

/// Position (top-left corner), size and class shared by every spatial entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub size: Vec2,
    pub class: EntityClass,
}

impl Body {
    pub fn new(class: EntityClass, pos: Vec2, size: Vec2) -> Self {
        Self { pos, size, class }
    }

    pub fn square(class: EntityClass, pos: Vec2, side: f32) -> Self {
        Self::new(class, pos, Vec2::splat(side))
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// True once the rectangle has left the playfield completely on either axis
    pub fn fully_outside_playfield(&self) -> bool {
        self.pos.x + self.size.x < 0.0
            || self.pos.x > PLAYFIELD_WIDTH
            || self.pos.y + self.size.y < 0.0
            || self.pos.y > PLAYFIELD_HEIGHT
    }
}

/// The player's character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub lives: u8,
    /// Last non-zero movement direction; projectiles fly this way
    pub facing: Vec2,
    /// Wall-clock time (ms) at which the current invincibility ends
    pub invincible_until: Option<f64>,
}

impl Player {
    pub fn new(mode: Mode) -> Self {
        let pos = Vec2::new(
            PLAYFIELD_WIDTH / 2.0 - PLAYER_SIZE / 2.0,
            PLAYFIELD_HEIGHT / 2.0 - PLAYER_SIZE / 2.0,
        );
        Self {
            body: Body::square(EntityClass::Player, pos, PLAYER_SIZE),
            lives: mode.max_lives(),
            facing: Vec2::new(0.0, -1.0),
            invincible_until: None,
        }
    }

    #[inline]
    pub fn is_invincible(&self) -> bool {
        self.invincible_until.is_some()
    }

    /// Drop invincibility once `now_ms` has reached the expiry timestamp
    pub fn refresh_invincibility(&mut self, now_ms: f64) {
        if self.invincible_until.is_some_and(|until| now_ms >= until) {
            self.invincible_until = None;
        }
    }

    /// Whether the sprite should be drawn this frame (blinks while invincible).
    ///
    /// Reads the expiry directly so a paused run stops blinking on time.
    pub fn is_visible(&self, now_ms: f64) -> bool {
        let blinking = self.invincible_until.is_some_and(|until| now_ms < until);
        !blinking || (now_ms / FLICKER_PERIOD_MS).floor() as i64 % 2 == 0
    }
}

/// A player-fired projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
    pub vel: Vec2,
    pub active: bool,
}

impl Projectile {
    /// Spawn at the player's center, travelling along the player's facing
    pub fn fired_from(player: &Player) -> Self {
        let pos = player.body.center() - Vec2::splat(PROJECTILE_SIZE / 2.0);
        Self {
            body: Body::square(EntityClass::Projectile, pos, PROJECTILE_SIZE),
            vel: player.facing * PROJECTILE_SPEED,
            active: true,
        }
    }
}

/// A basic homing enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    pub body: Body,
    pub active: bool,
}

impl Monster {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::square(EntityClass::Monster, pos, MONSTER_SIZE),
            active: true,
        }
    }
}

/// A slower, tougher homing enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Elite {
    pub body: Body,
    pub hp: i32,
    pub max_hp: i32,
    pub active: bool,
}

impl Elite {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::square(EntityClass::Elite, pos, ELITE_SIZE),
            hp: ELITE_HP,
            max_hp: ELITE_HP,
            active: true,
        }
    }
}

/// Superboss behaviour, rolled on each activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuperbossKind {
    /// Pursues the player and fires aimed lasers
    Chase = 1,
    /// Circles the playfield center and fires radial bursts
    Orbit = 2,
}

/// The superboss singleton, toggled active/inactive but never duplicated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Superboss {
    pub body: Body,
    pub hp: i32,
    pub max_hp: i32,
    pub kind: SuperbossKind,
    pub active: bool,
}

impl Superboss {
    /// Top-center, above the playfield; where every encounter starts
    pub fn entry_position() -> Vec2 {
        Vec2::new(PLAYFIELD_WIDTH / 2.0 - SUPERBOSS_SIZE / 2.0, SUPERBOSS_ENTRY_Y)
    }
}

impl Default for Superboss {
    fn default() -> Self {
        Self {
            body: Body::square(EntityClass::Superboss, Self::entry_position(), SUPERBOSS_SIZE),
            hp: SUPERBOSS_HP,
            max_hp: SUPERBOSS_HP,
            kind: SuperbossKind::Chase,
            active: false,
        }
    }
}

/// A superboss projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Laser {
    pub body: Body,
    pub vel: Vec2,
    pub active: bool,
}

impl Laser {
    pub fn new(pos: Vec2, size: (f32, f32), vel: Vec2) -> Self {
        Self {
            body: Body::new(EntityClass::Laser, pos, Vec2::new(size.0, size.1)),
            vel,
            active: true,
        }
    }
}

/// A collectible star. Golden stars drop from elites; red stars appear during
/// superboss fights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub body: Body,
    pub active: bool,
}

impl Star {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::square(EntityClass::Star, pos, STAR_SIZE),
            active: true,
        }
    }
}

/// Gameplay moments for audio/UI collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Shot,
    MonsterKilled,
    EliteSpawned,
    EliteKilled,
    PlayerHit { lives: u8 },
    PlayerHealed { lives: u8 },
    SuperbossSpawned { kind: SuperbossKind },
    LaserFired,
    RadialBurst,
    RedStarCollected,
    SuperbossDefeated,
    GoldenStarCollected { cleared: usize },
    GameOver { final_score: u64 },
}

/// Complete game state for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub mode: Mode,
    pub phase: GamePhase,
    pub score: u64,
    /// Ticks simulated while playing (paused ticks do not count)
    pub frames: u64,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub monsters: Vec<Monster>,
    pub elites: Vec<Elite>,
    pub superboss: Superboss,
    pub lasers: Vec<Laser>,
    pub golden_stars: Vec<Star>,
    pub red_stars: Vec<Star>,
    /// Score at which the next superboss appears
    pub next_superboss_threshold: u64,
    /// Superbosses activated so far this run
    pub superboss_encounters: u32,
    /// Events raised since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            phase: GamePhase::Playing,
            score: 0,
            frames: 0,
            player: Player::new(mode),
            projectiles: Vec::new(),
            monsters: Vec::new(),
            elites: Vec::new(),
            superboss: Superboss::default(),
            lasers: Vec::new(),
            golden_stars: Vec::new(),
            red_stars: Vec::new(),
            next_superboss_threshold: SUPERBOSS_FIRST_THRESHOLD,
            superboss_encounters: 0,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand accumulated events to the host
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Remove everything deactivated during this tick
    pub fn prune(&mut self) {
        self.projectiles.retain(|p| p.active);
        self.monsters.retain(|m| m.active);
        self.elites.retain(|e| e.active);
        self.lasers.retain(|l| l.active);
        self.golden_stars.retain(|s| s.active);
        self.red_stars.retain(|s| s.active);
    }
}

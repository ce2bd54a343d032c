//! Collision-driven effects: player damage, kills, scoring, drops and healing
//!
//! Entities hit this tick are only flagged inactive here; they stay in their
//! collections until `GameState::prune` runs at the end of the tick.

use glam::Vec2;

use super::collision::overlaps;
use super::random::RandomSource;
use super::state::{Body, GameEvent, GamePhase, GameState, Monster, Star};
use super::superboss::damage_superboss;
use crate::consts::*;

/// Take one life from the player unless invincible.
///
/// Losing the last life ends the run; otherwise the player becomes invincible
/// until `now_ms + INVINCIBILITY_MS`.
pub fn damage_player(state: &mut GameState, now_ms: f64) {
    if state.is_game_over() || state.player.is_invincible() {
        return;
    }

    state.player.lives = state.player.lives.saturating_sub(1);
    let lives = state.player.lives;
    state.emit(GameEvent::PlayerHit { lives });

    if lives == 0 {
        state.phase = GamePhase::GameOver;
        log::info!("Game over ({}) with score {}", state.mode.as_str(), state.score);
        state.emit(GameEvent::GameOver {
            final_score: state.score,
        });
    } else {
        state.player.invincible_until = Some(now_ms + INVINCIBILITY_MS);
    }
}

/// Add a life, capped at the mode's starting count
pub fn heal_player(state: &mut GameState) {
    if state.player.lives < state.mode.max_lives() {
        state.player.lives += 1;
        let lives = state.player.lives;
        state.emit(GameEvent::PlayerHealed { lives });
    }
}

/// Basic and elite enemies touching the player
pub fn resolve_enemy_contact(state: &mut GameState, now_ms: f64) {
    let player = state.player.body;
    let touching = state
        .monsters
        .iter()
        .filter(|m| m.active)
        .map(|m| &m.body)
        .chain(state.elites.iter().filter(|e| e.active).map(|e| &e.body))
        .any(|body| overlaps(&player, body));
    if touching {
        damage_player(state, now_ms);
    }
}

/// Lasers that reach the player are spent even while the player is invincible
pub fn resolve_laser_hits(state: &mut GameState, now_ms: f64) {
    let player = state.player.body;
    let mut hit = false;
    for laser in state.lasers.iter_mut().filter(|l| l.active) {
        if overlaps(&player, &laser.body) {
            laser.active = false;
            hit = true;
        }
    }
    if hit {
        damage_player(state, now_ms);
    }
}

/// Red stars picked up by the player damage the superboss
pub fn resolve_red_stars(state: &mut GameState) {
    let player = state.player.body;
    let mut i = 0;
    // Defeating the superboss clears the collection mid-loop
    while i < state.red_stars.len() {
        let star = &mut state.red_stars[i];
        if star.active && overlaps(&player, &star.body) {
            star.active = false;
            state.emit(GameEvent::RedStarCollected);
            damage_superboss(state, RED_STAR_DAMAGE);
        }
        i += 1;
    }
}

/// Projectiles against basic enemies, then elites, then the superboss
pub fn resolve_projectiles(state: &mut GameState, rng: &mut dyn RandomSource) {
    for i in 0..state.projectiles.len() {
        if !state.projectiles[i].active {
            continue;
        }
        let shot = state.projectiles[i].body;

        // A projectile passing through a cluster takes out every monster it overlaps
        let mut kills = 0;
        for monster in state.monsters.iter_mut().filter(|m| m.active) {
            if overlaps(&shot, &monster.body) {
                monster.active = false;
                state.projectiles[i].active = false;
                kills += 1;
            }
        }
        for _ in 0..kills {
            state.score += MONSTER_SCORE;
            state.emit(GameEvent::MonsterKilled);
        }

        if !state.projectiles[i].active {
            continue;
        }

        let mut fallen = Vec::new();
        for elite in state.elites.iter_mut().filter(|e| e.active) {
            if overlaps(&shot, &elite.body) {
                state.projectiles[i].active = false;
                elite.hp -= 1;
                if elite.hp <= 0 {
                    elite.active = false;
                    fallen.push(elite.body);
                }
            }
        }
        for body in fallen {
            on_elite_killed(state, &body, rng);
        }

        if state.projectiles[i].active
            && state.superboss.active
            && overlaps(&shot, &state.superboss.body)
        {
            state.projectiles[i].active = false;
            damage_superboss(state, 1);
        }
    }
}

/// Score, heal, drop a golden star and release revenge minions
fn on_elite_killed(state: &mut GameState, body: &Body, rng: &mut dyn RandomSource) {
    state.score += ELITE_SCORE;
    log::debug!("Elite killed on frame {}, score {}", state.frames, state.score);
    state.emit(GameEvent::EliteKilled);
    heal_player(state);

    let center = body.center();
    state
        .golden_stars
        .push(Star::new(center - Vec2::splat(STAR_SIZE / 2.0)));

    for _ in 0..REVENGE_MINIONS {
        let jitter_x = rng.next_unit() * REVENGE_JITTER * 2.0 - REVENGE_JITTER;
        let jitter_y = rng.next_unit() * REVENGE_JITTER * 2.0 - REVENGE_JITTER;
        let pos = center - Vec2::splat(MONSTER_SIZE / 2.0) + Vec2::new(jitter_x, jitter_y);
        state.monsters.push(Monster::new(pos));
    }
}

/// Golden stars wipe every basic enemy on the field, 10 points each.
///
/// Monsters already shot this tick are still in the collection and count too.
pub fn resolve_golden_stars(state: &mut GameState) {
    let player = state.player.body;
    for i in 0..state.golden_stars.len() {
        let star = &mut state.golden_stars[i];
        if !star.active || !overlaps(&player, &star.body) {
            continue;
        }
        star.active = false;
        let cleared = state.monsters.len();
        state.monsters.clear();
        state.score += GOLDEN_STAR_SCORE_PER_KILL * cleared as u64;
        state.emit(GameEvent::GoldenStarCollected { cleared });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::ScriptedRandom;
    use crate::sim::state::{Elite, Laser, Mode, Projectile};
    use crate::sim::superboss::activate;

    fn projectile_at(pos: Vec2) -> Projectile {
        let mut p = Projectile::fired_from(&crate::sim::state::Player::new(Mode::Normal));
        p.body.pos = pos;
        p
    }

    #[test]
    fn test_damage_grants_invincibility() {
        let mut state = GameState::new(Mode::Normal);
        damage_player(&mut state, 1000.0);
        assert_eq!(state.player.lives, 2);
        assert_eq!(state.player.invincible_until, Some(3000.0));

        // Ignored while invincible; timer not restarted
        damage_player(&mut state, 1500.0);
        assert_eq!(state.player.lives, 2);
        assert_eq!(state.player.invincible_until, Some(3000.0));
    }

    #[test]
    fn test_last_life_ends_run() {
        let mut state = GameState::new(Mode::Hard);
        state.score = 420;
        damage_player(&mut state, 0.0);
        assert_eq!(state.player.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(!state.player.is_invincible());
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::GameOver { final_score: 420 })
        );

        damage_player(&mut state, 0.0);
        assert_eq!(state.player.lives, 0);
    }

    #[test]
    fn test_heal_capped_per_mode() {
        let mut state = GameState::new(Mode::Normal);
        heal_player(&mut state);
        assert_eq!(state.player.lives, 3);
        state.player.lives = 2;
        heal_player(&mut state);
        assert_eq!(state.player.lives, 3);

        let mut hard = GameState::new(Mode::Hard);
        heal_player(&mut hard);
        assert_eq!(hard.player.lives, 1);
    }

    #[test]
    fn test_projectile_kills_monster() {
        let mut state = GameState::new(Mode::Normal);
        state.monsters.push(Monster::new(Vec2::new(100.0, 100.0)));
        state.projectiles.push(projectile_at(Vec2::new(120.0, 120.0)));

        resolve_projectiles(&mut state, &mut ScriptedRandom::constant(0.5));
        assert!(!state.monsters[0].active);
        assert!(!state.projectiles[0].active);
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_elite_takes_five_hits() {
        let mut state = GameState::new(Mode::Normal);
        state.player.lives = 2;
        state.elites.push(Elite::new(Vec2::new(100.0, 100.0)));
        let inside = Vec2::new(152.0, 152.0);

        for hit in 1..=5 {
            state.projectiles.push(projectile_at(inside));
            resolve_projectiles(&mut state, &mut ScriptedRandom::constant(0.5));
            state.prune();
            assert!(state.projectiles.is_empty());
            if hit < 5 {
                assert_eq!(state.elites[0].hp, 5 - hit);
            }
        }

        assert!(state.elites.is_empty());
        assert_eq!(state.score, 100);
        assert_eq!(state.player.lives, 3);
        assert_eq!(state.golden_stars.len(), 1);
        assert_eq!(state.golden_stars[0].body.pos, Vec2::new(148.0, 148.0));
        assert_eq!(state.monsters.len(), 5);
        // Jitter of 0.5 lands every minion dead center
        for m in &state.monsters {
            assert_eq!(m.body.pos, Vec2::new(128.0, 128.0));
        }
    }

    #[test]
    fn test_projectile_damages_superboss() {
        let mut state = GameState::new(Mode::Normal);
        activate(&mut state, &mut ScriptedRandom::constant(0.1));
        state.superboss.body.pos = Vec2::new(100.0, 100.0);
        state.projectiles.push(projectile_at(Vec2::new(160.0, 160.0)));

        resolve_projectiles(&mut state, &mut ScriptedRandom::constant(0.5));
        assert_eq!(state.superboss.hp, 49);
        assert!(!state.projectiles[0].active);
    }

    #[test]
    fn test_red_star_can_finish_superboss() {
        let mut state = GameState::new(Mode::Normal);
        activate(&mut state, &mut ScriptedRandom::constant(0.1));
        state.superboss.hp = 10;
        state.red_stars.push(Star::new(state.player.body.pos + Vec2::splat(20.0)));
        state.red_stars.push(Star::new(Vec2::new(0.0, 0.0)));

        resolve_red_stars(&mut state);
        assert!(!state.superboss.active);
        assert_eq!(state.score, 1000);
        assert!(state.red_stars.is_empty());
    }

    #[test]
    fn test_golden_star_clears_monsters() {
        let mut state = GameState::new(Mode::Normal);
        for i in 0..4 {
            state.monsters.push(Monster::new(Vec2::new(i as f32 * 10.0, 0.0)));
        }
        state.monsters[0].active = false;
        state
            .golden_stars
            .push(Star::new(state.player.body.pos + Vec2::splat(20.0)));

        resolve_golden_stars(&mut state);
        assert!(state.monsters.is_empty());
        assert_eq!(state.score, 40);
        assert!(!state.golden_stars[0].active);
    }

    #[test]
    fn test_golden_star_counts_monsters_shot_same_tick() {
        let mut state = GameState::new(Mode::Normal);
        state.monsters.push(Monster::new(Vec2::new(100.0, 100.0)));
        state.monsters.push(Monster::new(Vec2::new(700.0, 20.0)));
        state.projectiles.push(projectile_at(Vec2::new(124.0, 124.0)));
        state
            .golden_stars
            .push(Star::new(state.player.body.pos + Vec2::splat(20.0)));

        resolve_projectiles(&mut state, &mut ScriptedRandom::constant(0.5));
        assert!(!state.monsters[0].active);
        assert_eq!(state.score, 10);

        resolve_golden_stars(&mut state);
        assert_eq!(state.score, 30);
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::GoldenStarCollected { cleared: 2 })
        );
    }

    #[test]
    fn test_spent_projectile_skips_superboss() {
        let mut state = GameState::new(Mode::Normal);
        activate(&mut state, &mut ScriptedRandom::constant(0.1));
        state.superboss.body.pos = Vec2::new(100.0, 100.0);
        state.elites.push(Elite::new(Vec2::new(115.0, 115.0)));
        state.projectiles.push(projectile_at(Vec2::new(167.0, 167.0)));

        resolve_projectiles(&mut state, &mut ScriptedRandom::constant(0.5));
        assert_eq!(state.elites[0].hp, ELITE_HP - 1);
        assert_eq!(state.superboss.hp, SUPERBOSS_HP);
        assert!(!state.projectiles[0].active);
    }

    #[test]
    fn test_laser_spent_on_contact() {
        let mut state = GameState::new(Mode::Normal);
        // Inside the window where the inverted laser hitbox still meets the player's
        let pos = state.player.body.pos + Vec2::new(28.0, 20.0);
        state.lasers.push(Laser::new(pos, (8.0, 20.0), Vec2::ZERO));

        resolve_laser_hits(&mut state, 0.0);
        assert!(!state.lasers[0].active);
        assert_eq!(state.player.lives, 2);
    }

    #[test]
    fn test_enemy_contact() {
        let mut state = GameState::new(Mode::Normal);
        state.elites.push(Elite::new(state.player.body.pos - Vec2::splat(30.0)));
        resolve_enemy_contact(&mut state, 0.0);
        assert_eq!(state.player.lives, 2);
    }
}

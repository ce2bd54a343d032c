//! Invariants that hold for any input sequence and seed

use highland_siege::consts::*;
use highland_siege::sim::{GameState, Mode, TickInput, tick};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn input_strategy() -> impl Strategy<Value = TickInput> {
    (any::<[bool; 5]>(), prop::bool::weighted(0.02)).prop_map(
        |([up, down, left, right, fire], pause)| TickInput {
            up,
            down,
            left,
            right,
            fire,
            pause,
        },
    )
}

fn mode_strategy() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Normal), Just(Mode::Hard)]
}

fn assert_invariants(state: &GameState) -> Result<(), TestCaseError> {
    let pos = state.player.body.pos;
    prop_assert!(pos.x >= 0.0 && pos.x <= PLAYFIELD_WIDTH - PLAYER_SIZE);
    prop_assert!(pos.y >= 0.0 && pos.y <= PLAYFIELD_HEIGHT - PLAYER_SIZE);
    prop_assert!(state.player.lives <= state.mode.max_lives());

    prop_assert!(state.projectiles.iter().all(|p| p.active));
    prop_assert!(state.monsters.iter().all(|m| m.active));
    prop_assert!(state.elites.iter().all(|e| e.active));
    prop_assert!(state.lasers.iter().all(|l| l.active));
    prop_assert!(state.golden_stars.iter().all(|s| s.active));
    prop_assert!(state.red_stars.iter().all(|s| s.active));

    prop_assert!(state.elites.len() <= 1);
    if state.superboss.active {
        prop_assert!(state.elites.is_empty());
        prop_assert!(state.monsters.is_empty());
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_tick_invariants(
        seed in any::<u64>(),
        mode in mode_strategy(),
        inputs in prop::collection::vec(input_strategy(), 1..700),
    ) {
        let mut state = GameState::new(mode);
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut last_score = 0;

        for (i, input) in inputs.iter().enumerate() {
            tick(&mut state, input, i as f64 * 16.0, &mut rng);
            assert_invariants(&state)?;
            prop_assert!(state.score >= last_score);
            last_score = state.score;
        }
    }

    #[test]
    fn test_runs_replay_exactly(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 1..300),
    ) {
        let mut a = GameState::new(Mode::Normal);
        let mut b = GameState::new(Mode::Normal);
        let mut rng_a = Pcg32::seed_from_u64(seed);
        let mut rng_b = Pcg32::seed_from_u64(seed);

        for (i, input) in inputs.iter().enumerate() {
            let now = i as f64 * 16.0;
            tick(&mut a, input, now, &mut rng_a);
            tick(&mut b, input, now, &mut rng_b);
        }
        prop_assert_eq!(a.frames, b.frames);
        prop_assert_eq!(a.score, b.score);
        prop_assert_eq!(a.player.body.pos, b.player.body.pos);
        prop_assert_eq!(a.monsters.len(), b.monsters.len());
        prop_assert_eq!(a.drain_events(), b.drain_events());
    }
}

//! Run lifecycle around the simulation
//!
//! A session is idle until `start`, drives one `GameState` per run, and on game
//! over checks the final score against the mode's record. Quitting discards the
//! run entirely.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::highscores::HighScores;
use crate::platform::KeyValueStore;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, Mode, TickInput, tick};

/// Outcome of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverReport {
    pub mode: Mode,
    pub final_score: u64,
    /// Best score for the mode after this run was recorded
    pub best: u64,
    pub new_record: bool,
}

/// Owns the current run, the RNG driving it, and persisted player data
pub struct GameSession {
    store: Box<dyn KeyValueStore>,
    high_scores: HighScores,
    settings: Settings,
    state: Option<GameState>,
    rng: Pcg32,
    report: Option<GameOverReport>,
}

impl GameSession {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        let high_scores = HighScores::load(store.as_ref());
        let settings = Settings::load(store.as_ref());
        Self {
            store,
            high_scores,
            settings,
            state: None,
            rng: Pcg32::seed_from_u64(0),
            report: None,
        }
    }

    /// Begin a fresh run, replacing any current one
    pub fn start(&mut self, mode: Mode, seed: u64) {
        self.state = Some(GameState::new(mode));
        self.rng = Pcg32::seed_from_u64(seed);
        self.report = None;

        if self.settings.preferred_mode != mode {
            self.settings.preferred_mode = mode;
            self.settings.save(self.store.as_mut());
        }
        log::info!("Run started ({}) with seed {}", mode.as_str(), seed);
    }

    /// Drop the current run and return to idle
    pub fn quit(&mut self) {
        if let Some(state) = self.state.take() {
            log::info!("Run quit at frame {} with score {}", state.frames, state.score);
        }
        self.report = None;
    }

    /// Pause or resume the current run (no-op when idle or over)
    pub fn toggle_pause(&mut self) {
        if let Some(state) = self.state.as_mut() {
            state.phase = match state.phase {
                GamePhase::Playing => GamePhase::Paused,
                GamePhase::Paused => GamePhase::Playing,
                GamePhase::GameOver => GamePhase::GameOver,
            };
        }
    }

    /// Advance the current run by one frame and return the events it raised
    pub fn update(&mut self, input: &TickInput, now_ms: f64) -> Vec<GameEvent> {
        let Some(state) = self.state.as_mut() else {
            return Vec::new();
        };
        tick(state, input, now_ms, &mut self.rng);
        let events = state.drain_events();
        let mode = state.mode;

        for event in &events {
            if let GameEvent::GameOver { final_score } = *event {
                let new_record = self
                    .high_scores
                    .record(mode, final_score, self.store.as_mut());
                self.report = Some(GameOverReport {
                    mode,
                    final_score,
                    best: self.high_scores.best(mode),
                    new_record,
                });
            }
        }
        events
    }

    /// Current run, if any
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Mutable access to the current run, for hosts that stage scenarios
    pub fn state_mut(&mut self) -> Option<&mut GameState> {
        self.state.as_mut()
    }

    pub fn is_idle(&self) -> bool {
        self.state.is_none()
    }

    /// True while a run is in progress (playing or paused)
    pub fn is_running(&self) -> bool {
        self.state.as_ref().is_some_and(|s| !s.is_game_over())
    }

    /// Set once the current run has ended
    pub fn game_over_report(&self) -> Option<GameOverReport> {
        self.report
    }

    pub fn best(&self, mode: Mode) -> u64 {
        self.high_scores.best(mode)
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace settings and persist them
    pub fn update_settings(&mut self, settings: Settings) {
        self.settings = settings;
        self.settings.save(self.store.as_mut());
    }

    /// Whether the renderer should draw the player this frame
    pub fn player_visible(&self, now_ms: f64) -> bool {
        match &self.state {
            Some(state) if self.settings.effective_flicker() => state.player.is_visible(now_ms),
            Some(_) => true,
            None => false,
        }
    }
}

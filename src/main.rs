//! Highland Siege headless runner
//!
//! Drives a seeded session with a scripted autopilot, logging gameplay events,
//! so the simulation can be exercised without a renderer.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::{Parser, ValueEnum};
    use highland_siege::GameSession;
    use highland_siege::platform::{Clock, JsonFileStore, KeyValueStore, ManualClock, MemoryStore};
    use highland_siege::sim::{GameEvent, GameState, Mode, TickInput};

    /// Host frame period (60 Hz)
    const FRAME_MS: f64 = 1000.0 / 60.0;

    #[derive(Parser, Debug)]
    #[command(name = "highland-siege")]
    #[command(about = "Headless autopilot run of the Highland Siege simulation")]
    struct Cli {
        /// Shorthand for `--mode hard`
        #[arg(long, conflicts_with = "mode")]
        hard: bool,
        /// Difficulty for the run
        #[arg(long, value_enum)]
        mode: Option<CliMode>,
        /// RNG seed for the run
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Stop after this many ticks even if the run is still going
        #[arg(long, default_value_t = 20_000)]
        ticks: u64,
        /// JSON file for best scores and settings (in-memory when omitted)
        #[arg(long)]
        store: Option<PathBuf>,
    }

    impl Cli {
        fn mode(&self) -> Mode {
            if self.hard {
                Mode::Hard
            } else {
                self.mode.map(Mode::from).unwrap_or_default()
            }
        }
    }

    #[derive(Clone, Copy, Debug, ValueEnum)]
    enum CliMode {
        Normal,
        Hard,
    }

    impl From<CliMode> for Mode {
        fn from(value: CliMode) -> Self {
            match value {
                CliMode::Normal => Mode::Normal,
                CliMode::Hard => Mode::Hard,
            }
        }
    }

    /// Circle the arena while firing along the current heading
    fn autopilot(state: &GameState) -> TickInput {
        let leg = (state.frames / 45) % 4;
        TickInput {
            up: leg == 0,
            right: leg == 1,
            down: leg == 2,
            left: leg == 3,
            fire: state.frames % 12 == 0,
            pause: false,
        }
    }

    pub fn run() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        let cli = Cli::parse();
        let mode = cli.mode();

        let store: Box<dyn KeyValueStore> = match &cli.store {
            Some(path) => Box::new(JsonFileStore::new(path.clone())),
            None => Box::new(MemoryStore::new()),
        };
        let mut session = GameSession::new(store);
        log::info!(
            "Highland Siege (headless) starting, best {}: {}",
            mode.as_str(),
            session.best(mode)
        );

        let clock = ManualClock::new(0.0);
        session.start(mode, cli.seed);

        let mut kills = 0u32;
        for _ in 0..cli.ticks {
            let Some(input) = session.state().map(autopilot) else {
                break;
            };
            for event in session.update(&input, clock.now_ms()) {
                match event {
                    GameEvent::MonsterKilled | GameEvent::EliteKilled => kills += 1,
                    GameEvent::PlayerHit { lives } => log::info!("Player hit, {lives} lives left"),
                    GameEvent::SuperbossSpawned { kind } => log::info!("Superboss: {kind:?}"),
                    _ => {}
                }
            }
            clock.advance(FRAME_MS);
            if !session.is_running() {
                break;
            }
        }

        match (session.game_over_report(), session.state()) {
            (Some(report), _) => log::info!(
                "Game over: score {} (best {}{}), {} kills",
                report.final_score,
                report.best,
                if report.new_record { ", new record" } else { "" },
                kills
            ),
            (None, Some(state)) => log::info!(
                "Stopped after {} frames: score {}, {} lives, {} kills",
                state.frames,
                state.score,
                state.player.lives,
                kills
            ),
            (None, None) => {}
        }
        session.quit();
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive `GameSession` directly
}

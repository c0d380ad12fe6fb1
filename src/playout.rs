//! Random playouts.
//!
//! Plays whole games by picking uniformly among legal actions. Used for
//! soak tests and the `simulate` command; it is not an opponent.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameConfig, GameRng, GameState, PlayerMap};
use crate::games::levels::LevelsGameBuilder;
use crate::rules::{GameResult, Outcome, RulesEngine};

/// Upper bound on actions per game. Twelve placements plus at most one
/// reselection per placement fits comfortably.
pub const DEFAULT_MAX_STEPS: u32 = 64;

/// How a single playout ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutReport {
    /// `None` if the step limit was hit or nobody could act.
    pub result: Option<GameResult>,
    /// Pieces placed.
    pub placements: u32,
    /// Placements that replaced another piece.
    pub captures: u32,
}

/// Uniform random playout policy.
#[derive(Clone, Copy, Debug)]
pub struct RandomPlayout {
    pub max_steps: u32,
}

impl Default for RandomPlayout {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl RandomPlayout {
    /// Play the current game in `state` to its end.
    pub fn play_game<E: RulesEngine>(&self, engine: &mut E, state: &mut GameState, rng: &mut GameRng) -> PlayoutReport {
        let mut report = PlayoutReport {
            result: None,
            placements: 0,
            captures: 0,
        };

        for _ in 0..self.max_steps {
            if let Some(result) = engine.is_terminal(state) {
                report.result = Some(result);
                return report;
            }

            let Some(active) = state.active_player() else {
                return report;
            };
            let actions = engine.legal_actions(state, active);
            let Some(&action) = rng.choose(&actions) else {
                // Nobody can act; the draw policy should have caught this
                return report;
            };

            match engine.apply_action(state, active, action) {
                Ok(Outcome::Placed { captured, .. }) => {
                    report.placements += 1;
                    report.captures += u32::from(captured.is_some());
                }
                Ok(Outcome::Finished { result, .. }) => {
                    report.placements += 1;
                    report.result = Some(result);
                    return report;
                }
                Ok(Outcome::Selected { .. }) => {}
                Err(err) => {
                    debug!(%err, %action, "legal action rejected");
                    return report;
                }
            }
        }

        report
    }
}

/// Totals over many playouts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutSummary {
    pub games: u32,
    pub wins: PlayerMap<u32>,
    pub draws: u32,
    pub unfinished: u32,
    pub placements: u64,
    pub captures: u64,
}

impl PlayoutSummary {
    /// Fold one playout into the totals.
    pub fn record(&mut self, report: &PlayoutReport) {
        self.games += 1;
        self.placements += u64::from(report.placements);
        self.captures += u64::from(report.captures);
        match report.result {
            Some(GameResult::Winner(player)) => self.wins[player] += 1,
            Some(GameResult::Draw) => self.draws += 1,
            None => self.unfinished += 1,
        }
    }
}

/// Play `games` consecutive random games under `config`.
///
/// Games run back to back in one session, so starter alternation and
/// auto-reset apply exactly as in interactive play.
pub fn simulate(config: GameConfig, games: u32, seed: u64) -> PlayoutSummary {
    let (mut game, mut state) = LevelsGameBuilder::new().config(config).build();
    let mut rng = GameRng::new(seed);
    let policy = RandomPlayout::default();
    let mut summary = PlayoutSummary::default();

    for _ in 0..games {
        let mut game_rng = rng.fork();
        let report = policy.play_game(&mut game, &mut state, &mut game_rng);
        summary.record(&report);

        if report.result.is_none() || state.phase.is_over() {
            game.new_game(&mut state);
        }
    }

    summary
}

//! Rules engine trait for game implementations.
//!
//! The engine is stateless with respect to the board: every method takes
//! the `GameState` it works on, so callers can clone a state and explore
//! it (playouts, tests) without touching the live game.

use serde::{Deserialize, Serialize};

use crate::board::{Cell, Line, Position};
use crate::core::action::Action;
use crate::core::config::GameConfig;
use crate::core::player::Player;
use crate::core::state::GameState;
use crate::error::Result;
use crate::pieces::Weight;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// No winner.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Announcement shown to the players.
    #[must_use]
    pub fn announcement(&self) -> String {
        match self {
            GameResult::Winner(player) => format!("{player} wins!"),
            GameResult::Draw => "Draw!".to_string(),
        }
    }
}

/// What an accepted action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A piece is now selected.
    Selected { player: Player, weight: Weight },
    /// A piece was placed and the turn passed to `next`.
    Placed {
        position: Position,
        captured: Cell,
        next: Player,
    },
    /// A piece was placed and ended the game.
    Finished {
        position: Position,
        result: GameResult,
        /// The completed line, for wins.
        line: Option<Line>,
    },
}

impl Outcome {
    /// Final result, if the action ended the game.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self {
            Outcome::Finished { result, .. } => Some(*result),
            _ => None,
        }
    }

    /// User-facing announcement for game-ending actions.
    #[must_use]
    pub fn announcement(&self) -> Option<String> {
        self.result().map(|r| r.announcement())
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty when the player may not act
/// - `apply_action`: validate first, then mutate; on `Err` the state is
///   unchanged
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Actions that make progress for `player` in `state`.
    fn legal_actions(&self, state: &GameState, player: Player) -> Vec<Action>;

    /// Apply an action for `player`.
    fn apply_action(&mut self, state: &mut GameState, player: Player, action: Action) -> Result<Outcome>;

    /// Check if the game in `state` is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    /// Replace `state` with the next game of the session.
    fn new_game(&mut self, state: &mut GameState);

    // === Convenience Methods ===

    /// Whether `action` is among `legal_actions`.
    fn is_legal(&self, state: &GameState, player: Player, action: Action) -> bool {
        self.legal_actions(state, player).contains(&action)
    }
}

//! Game configuration.
//!
//! Front-ends configure the engine at startup:
//! - who opens the first game
//! - whether the opener alternates between games
//! - when a game without a winner is called a draw
//! - whether a finished game is replaced by a fresh one automatically

use serde::{Deserialize, Serialize};

use super::Player;

/// When a game with no completed line ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawPolicy {
    /// Draw once the player to move has no legal placement left.
    ///
    /// A full board keeps going while captures remain possible.
    #[default]
    NoLegalMove,
    /// Draw as soon as all nine cells are occupied, or earlier if the
    /// player to move is stuck.
    FullBoard,
}

impl std::str::FromStr for DrawPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "no-legal-move" | "stuck" => Ok(DrawPolicy::NoLegalMove),
            "full-board" | "full" => Ok(DrawPolicy::FullBoard),
            other => Err(format!("unknown draw policy: {other}")),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Opener of the very first game.
    pub first_player: Player,

    /// Swap the opener on every new game.
    pub alternate_starter: bool,

    /// When a game without a winner ends.
    pub draw_policy: DrawPolicy,

    /// Start a fresh game immediately after a win or draw.
    ///
    /// When false the engine parks in `TurnPhase::GameOver` until
    /// `new_game` is called.
    pub auto_reset: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: Player::One,
            alternate_starter: true,
            draw_policy: DrawPolicy::default(),
            auto_reset: true,
        }
    }
}

impl GameConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the opener of the first game.
    #[must_use]
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Set the draw policy.
    #[must_use]
    pub fn with_draw_policy(mut self, policy: DrawPolicy) -> Self {
        self.draw_policy = policy;
        self
    }

    /// Keep the same opener for every game.
    #[must_use]
    pub fn fixed_starter(mut self) -> Self {
        self.alternate_starter = false;
        self
    }

    /// Stop in `GameOver` after a finished game instead of resetting.
    #[must_use]
    pub fn without_auto_reset(mut self) -> Self {
        self.auto_reset = false;
        self
    }

    /// Opener of the game that follows one opened by `previous`.
    #[must_use]
    pub fn next_starter(&self, previous: Player) -> Player {
        if self.alternate_starter {
            previous.other()
        } else {
            previous
        }
    }
}

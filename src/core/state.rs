//! Game state.
//!
//! ## TurnPhase
//!
//! Whose move it is and whether a piece has been picked, as an explicit
//! state machine:
//!
//! ```text
//! AwaitingSelection(p) --select--> PieceSelected(p, w) --place--> AwaitingSelection(p')
//!                                  PieceSelected(p, w) --select--> PieceSelected(p, w')
//!                                                      --place (win/draw)--> GameOver
//! ```
//!
//! A selection cannot outlive a turn switch: the only way to hand the
//! turn over is to build a fresh `AwaitingSelection`.
//!
//! ## GameState
//!
//! Board, both inventories, the phase, and the action history of the
//! current game. History uses an `im` persistent vector so snapshots
//! clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{Action, ActionRecord};
use super::player::{Player, PlayerMap};
use crate::board::{Board, Position};
use crate::pieces::{Inventory, Weight};
use crate::rules::GameResult;

/// Turn/selection state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// `player` must pick a piece.
    AwaitingSelection { player: Player },
    /// `player` picked `weight` and must place it.
    PieceSelected { player: Player, weight: Weight },
    /// The game ended and was not reset.
    GameOver { result: GameResult },
}

impl TurnPhase {
    /// Player expected to act, if the game is running.
    #[must_use]
    pub fn active_player(&self) -> Option<Player> {
        match *self {
            TurnPhase::AwaitingSelection { player } | TurnPhase::PieceSelected { player, .. } => {
                Some(player)
            }
            TurnPhase::GameOver { .. } => None,
        }
    }

    /// Currently selected weight.
    #[must_use]
    pub fn selected(&self) -> Option<Weight> {
        match *self {
            TurnPhase::PieceSelected { weight, .. } => Some(weight),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, TurnPhase::GameOver { .. })
    }
}

/// State of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The nine cells.
    pub board: Board,

    /// Pieces per player.
    pub inventories: PlayerMap<Inventory>,

    /// Turn/selection state.
    pub phase: TurnPhase,

    /// Opener of this game.
    pub starter: Player,

    /// Number of this game in the session (starts at 1).
    pub game_number: u32,

    /// Turn number (starts at 1, bumps on every hand-over).
    pub turn_number: u32,

    /// Action sequence within the game.
    action_sequence: u32,

    /// Accepted actions of this game.
    history: Vector<ActionRecord>,
}

impl GameState {
    /// Fresh game opened by `starter`.
    #[must_use]
    pub fn new(starter: Player, game_number: u32) -> Self {
        Self {
            board: Board::new(),
            inventories: PlayerMap::new(Inventory::new),
            phase: TurnPhase::AwaitingSelection { player: starter },
            starter,
            game_number,
            turn_number: 1,
            action_sequence: 0,
            history: Vector::new(),
        }
    }

    /// Player expected to act.
    #[must_use]
    pub fn active_player(&self) -> Option<Player> {
        self.phase.active_player()
    }

    /// Weight selected by the active player.
    #[must_use]
    pub fn selected(&self) -> Option<Weight> {
        self.phase.selected()
    }

    /// A player's inventory.
    #[must_use]
    pub fn inventory(&self, player: Player) -> &Inventory {
        &self.inventories[player]
    }

    /// Positions where `player` could put a piece of `weight`, if it is
    /// still available.
    #[must_use]
    pub fn legal_placements(&self, player: Player, weight: Weight) -> SmallVec<[Position; 9]> {
        if self.inventories[player].is_available(weight) {
            self.board.accepting(weight)
        } else {
            SmallVec::new()
        }
    }

    /// Whether `player` has any piece that fits somewhere.
    ///
    /// Only the heaviest available piece needs checking: if it fits
    /// nowhere, no lighter piece does.
    #[must_use]
    pub fn has_legal_move(&self, player: Player) -> bool {
        self.inventories[player]
            .heaviest_available()
            .is_some_and(|w| !self.board.accepting(w).is_empty())
    }

    /// Hand the turn to `player` with nothing selected.
    pub fn pass_turn(&mut self, player: Player) {
        self.phase = TurnPhase::AwaitingSelection { player };
        self.turn_number += 1;
    }

    // === Action History ===

    /// Record an accepted action.
    pub fn record_action(&mut self, player: Player, action: Action) {
        let record = ActionRecord::new(player, action, self.turn_number, self.action_sequence);
        self.action_sequence += 1;
        self.history.push_back(record);
    }

    /// Accepted actions of this game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Number of pieces placed this game.
    #[must_use]
    pub fn placements(&self) -> usize {
        self.history.iter().filter(|r| !r.action.is_selection()).count()
    }
}

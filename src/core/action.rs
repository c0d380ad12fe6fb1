//! Actions: the two events a front-end can send.
//!
//! - "Select level N" picks one of the active player's unused pieces.
//! - "Place at cell P" puts the selected piece on the board.
//!
//! `ActionRecord` keeps accepted actions for history and replay.

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::board::Position;
use crate::pieces::Weight;

/// A player input.
///
/// ## Example
///
/// ```
/// use levels_ttt::board::Position;
/// use levels_ttt::core::Action;
/// use levels_ttt::pieces::Weight;
///
/// let select = Action::SelectPiece(Weight::new(3).unwrap());
/// let place = Action::PlacePiece(Position::new(4).unwrap());
/// assert!(select.is_selection());
/// assert!(!place.is_selection());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Tentatively pick a piece of this weight.
    SelectPiece(Weight),
    /// Place the selected piece here.
    PlacePiece(Position),
}

impl Action {
    /// Whether this is a selection.
    #[must_use]
    pub fn is_selection(&self) -> bool {
        matches!(self, Action::SelectPiece(_))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::SelectPiece(weight) => write!(f, "select {weight}"),
            Action::PlacePiece(position) => write!(f, "place {position}"),
        }
    }
}

/// An accepted action with metadata for history tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: Player,

    /// The action taken.
    pub action: Action,

    /// Turn number within the game (starts at 1).
    pub turn: u32,

    /// Sequence number within the game (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: Player, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        let select = Action::SelectPiece(Weight::new(5).unwrap());
        let place = Action::PlacePiece(Position::new(7).unwrap());

        assert_eq!(select.to_string(), "select 5");
        assert_eq!(place.to_string(), "place 7");
    }

    #[test]
    fn test_action_record() {
        let action = Action::PlacePiece(Position::new(2).unwrap());
        let record = ActionRecord::new(Player::Two, action, 3, 5);

        assert_eq!(record.player, Player::Two);
        assert_eq!(record.action, action);
        assert_eq!(record.turn, 3);
        assert_eq!(record.sequence, 5);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(Player::One, Action::SelectPiece(Weight::MAX), 1, 0);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}

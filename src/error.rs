//! Rejected moves.
//!
//! Every variant is recoverable: the engine leaves its state untouched
//! and the player may try again. The `Display` text is the user-facing
//! notice.

use thiserror::Error;

use crate::core::Player;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("It is {expected}'s turn, not {actual}'s")]
    NotYourTurn { expected: Player, actual: Player },

    #[error("Select a level before marking a position")]
    NoPieceSelected,

    #[error("Invalid move: cell {position} holds a level {occupant}, which a level {weight} cannot take")]
    InvalidMove { position: u8, occupant: u8, weight: u8 },

    #[error("{player} has already used level {weight}")]
    PieceUnavailable { player: Player, weight: u8 },

    #[error("Level {0} does not exist (levels are 1 to 6)")]
    InvalidWeight(u8),

    #[error("Position {0} is not on the board (positions are 0 to 8)")]
    InvalidPosition(u8),

    #[error("The game is over; start a new game")]
    GameOver,
}

/// Convenience Result type for engine operations.
pub type Result<T> = std::result::Result<T, MoveError>;

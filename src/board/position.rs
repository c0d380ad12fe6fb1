//! Board positions.

use serde::{Deserialize, Serialize};

use crate::error::MoveError;

/// One of the nine cells, numbered row-major:
///
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    /// Number of cells on the board.
    pub const COUNT: usize = 9;

    /// Create a position, rejecting indices outside `0..9`.
    pub fn new(index: u8) -> Result<Self, MoveError> {
        if usize::from(index) < Self::COUNT {
            Ok(Self(index))
        } else {
            Err(MoveError::InvalidPosition(index))
        }
    }

    /// Row-major index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row (0..3).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 3
    }

    /// Column (0..3).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % 3
    }

    /// All positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..Self::COUNT as u8).map(Position)
    }

    pub(crate) const fn from_index(index: u8) -> Self {
        Self(index)
    }
}

impl TryFrom<u8> for Position {
    type Error = MoveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> Self {
        position.0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

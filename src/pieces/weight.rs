//! Piece weights ("levels").

use serde::{Deserialize, Serialize};

use crate::error::MoveError;

/// Weight of a piece, always in `1..=6`.
///
/// Heavier pieces capture cells held by strictly lighter ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Weight(u8);

impl Weight {
    /// Lightest piece.
    pub const MIN: Weight = Weight(1);
    /// Heaviest piece.
    pub const MAX: Weight = Weight(6);
    /// Number of distinct weights (and pieces per player).
    pub const COUNT: usize = 6;

    /// Create a weight, rejecting values outside `1..=6`.
    pub fn new(value: u8) -> Result<Self, MoveError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(MoveError::InvalidWeight(value))
        }
    }

    /// Raw value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Slot in a player's inventory (0-based).
    #[must_use]
    pub const fn slot(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Weight stored in an inventory slot. `slot` must be below `COUNT`.
    pub(crate) const fn from_slot(slot: usize) -> Self {
        Self(slot as u8 + 1)
    }

    /// All weights, lightest first.
    pub fn all() -> impl Iterator<Item = Weight> {
        (Self::MIN.0..=Self::MAX.0).map(Weight)
    }
}

impl TryFrom<u8> for Weight {
    type Error = MoveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weight> for u8 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Per-player piece inventories.
//!
//! Every player starts a game with one piece of each weight. A piece is
//! spent when it is placed and stays spent until the next game.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::weight::Weight;
use crate::core::Player;

/// Lifecycle of a single piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceState {
    /// Not yet played; may be selected.
    Available,
    /// Already placed on the board this game.
    Used,
}

/// A piece owned by one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Player,
    pub weight: Weight,
    pub state: PieceState,
}

impl Piece {
    /// Whether the piece can still be selected.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.state == PieceState::Available
    }
}

/// One player's six pieces, indexed by weight.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Inventory {
    owner: Player,
    pieces: [Piece; Weight::COUNT],
}

impl Inventory {
    /// Fresh inventory with every weight available.
    #[must_use]
    pub fn new(owner: Player) -> Self {
        Self {
            owner,
            pieces: std::array::from_fn(|slot| Piece {
                owner,
                weight: Weight::from_slot(slot),
                state: PieceState::Available,
            }),
        }
    }

    /// Owning player.
    #[must_use]
    pub fn owner(&self) -> Player {
        self.owner
    }

    /// Look up the piece of a given weight.
    #[must_use]
    pub fn piece(&self, weight: Weight) -> &Piece {
        &self.pieces[weight.slot()]
    }

    /// All pieces, lightest first.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    /// Whether the piece of this weight has not been played yet.
    #[must_use]
    pub fn is_available(&self, weight: Weight) -> bool {
        self.piece(weight).is_available()
    }

    /// Weights still available, lightest first.
    #[must_use]
    pub fn available(&self) -> SmallVec<[Weight; 6]> {
        self.pieces
            .iter()
            .filter(|p| p.is_available())
            .map(|p| p.weight)
            .collect()
    }

    /// Heaviest available weight, if any.
    #[must_use]
    pub fn heaviest_available(&self) -> Option<Weight> {
        self.pieces
            .iter()
            .rev()
            .find(|p| p.is_available())
            .map(|p| p.weight)
    }

    /// Number of pieces still available.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.pieces.iter().filter(|p| p.is_available()).count()
    }

    /// Mark a piece as used.
    ///
    /// Returns false if it was already used.
    pub fn mark_used(&mut self, weight: Weight) -> bool {
        let piece = &mut self.pieces[weight.slot()];
        if piece.is_available() {
            piece.state = PieceState::Used;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(value: u8) -> Weight {
        Weight::new(value).unwrap()
    }

    #[test]
    fn test_new_inventory_is_full() {
        let inv = Inventory::new(Player::Two);

        assert_eq!(inv.owner(), Player::Two);
        assert_eq!(inv.available_count(), 6);
        assert_eq!(inv.available().as_slice(), Weight::all().collect::<Vec<_>>().as_slice());
        assert!(inv.pieces().all(|p| p.owner == Player::Two));
        assert_eq!(inv.piece(w(4)).weight, w(4));
    }

    #[test]
    fn test_mark_used_once() {
        let mut inv = Inventory::new(Player::One);

        assert!(inv.mark_used(w(3)));
        assert!(!inv.is_available(w(3)));
        assert!(!inv.mark_used(w(3)));
        assert_eq!(inv.available_count(), 5);
        assert!(!inv.available().contains(&w(3)));
    }

    #[test]
    fn test_heaviest_available() {
        let mut inv = Inventory::new(Player::One);
        assert_eq!(inv.heaviest_available(), Some(Weight::MAX));

        inv.mark_used(w(6));
        inv.mark_used(w(5));
        assert_eq!(inv.heaviest_available(), Some(w(4)));

        for weight in Weight::all() {
            inv.mark_used(weight);
        }
        assert_eq!(inv.heaviest_available(), None);
        assert!(inv.available().is_empty());
    }
}

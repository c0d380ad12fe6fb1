//! Pieces ("levels"): weights and per-player inventories.
//!
//! Each player owns six pieces of weight 1..=6. A piece is usable once
//! per game.

pub mod inventory;
pub mod weight;

pub use inventory::{Inventory, Piece, PieceState};
pub use weight::Weight;

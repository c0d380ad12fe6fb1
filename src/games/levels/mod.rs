//! Levels tic-tac-toe.
//!
//! - Two players, each with six pieces weighted 1 to 6, each usable once
//! - On your turn: select one of your unused pieces, then place it
//! - A piece may land on an empty cell, or capture a cell held by a
//!   strictly lighter piece of either player
//! - Three cells in a row, column or diagonal win; weights don't matter
//! - After a finished game a new one starts, opened by the other player

mod game;

pub use game::{LevelsGame, LevelsGameBuilder};

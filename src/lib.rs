//! # levels-ttt
//!
//! Tic-tac-toe played with weighted "level" pieces.
//!
//! ## Rules
//!
//! 1. **Pieces**: each player owns six pieces of weight 1 to 6, each
//!    usable once per game.
//!
//! 2. **Turns**: the active player selects one of their unused pieces,
//!    then places it. Selecting again before placing swaps the piece.
//!
//! 3. **Capture**: a piece may land on an empty cell or on a cell held by
//!    a strictly lighter piece of either player.
//!
//! 4. **Winning**: three cells in a row, column or diagonal owned by one
//!    player. Weights are ignored. The finished game is replaced by a new
//!    one opened by the other player.
//!
//! ## Architecture
//!
//! - **Rules separate from state**: `LevelsGame` implements `RulesEngine`
//!   and works on a `GameState` passed in, so states can be cloned and
//!   explored freely.
//!
//! - **Explicit turn phases**: `TurnPhase` makes "a selection left over
//!   from the previous turn" unrepresentable.
//!
//! - **Validate, then mutate**: a rejected action returns a `MoveError`
//!   and leaves the state untouched.
//!
//! ## Modules
//!
//! - `core`: players, configuration, actions, state, RNG
//! - `board`: positions, cells, winning lines
//! - `pieces`: weights and inventories
//! - `rules`: `RulesEngine` trait and results
//! - `games`: the levels game
//! - `playout`: random playouts for soak testing
//! - `view`: serializable snapshots for front-ends

pub mod board;
pub mod core;
pub mod error;
pub mod games;
pub mod pieces;
pub mod playout;
pub mod rules;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, DrawPolicy, GameConfig, GameRng, GameState, Player, PlayerMap, TurnPhase,
};

pub use crate::board::{Board, Cell, Line, Mark, Position, LINES};

pub use crate::pieces::{Inventory, Piece, PieceState, Weight};

pub use crate::error::MoveError;

pub use crate::rules::{GameResult, Outcome, RulesEngine};

pub use crate::games::levels::{LevelsGame, LevelsGameBuilder};

pub use crate::playout::{simulate, PlayoutReport, PlayoutSummary, RandomPlayout};

pub use crate::view::GameView;

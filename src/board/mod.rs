//! Board system: nine cells, marks, and the eight winning lines.
//!
//! Win detection is a pure function over a `Board` snapshot so it can be
//! tested without running a game.

pub mod grid;
pub mod lines;
pub mod position;

pub use grid::{Board, Cell, Mark};
pub use lines::{lines_through, Line, LINES};
pub use position::Position;

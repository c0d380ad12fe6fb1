//! The 3x3 board and win detection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::lines::{Line, LINES};
use super::position::Position;
use crate::core::Player;
use crate::pieces::Weight;

/// A piece sitting on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mark {
    pub owner: Player,
    pub weight: Weight,
}

impl Mark {
    #[must_use]
    pub const fn new(owner: Player, weight: Weight) -> Self {
        Self { owner, weight }
    }
}

/// Contents of one cell.
pub type Cell = Option<Mark>;

/// Nine cells in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; Position::COUNT],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from raw cells (row-major).
    #[must_use]
    pub fn from_cells(cells: [Cell; Position::COUNT]) -> Self {
        Self { cells }
    }

    /// Contents of a cell.
    #[must_use]
    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.index()]
    }

    /// All cells.
    #[must_use]
    pub fn cells(&self) -> &[Cell; Position::COUNT] {
        &self.cells
    }

    /// Whether `weight` may be placed on `position`.
    ///
    /// Empty cells accept anything; occupied cells only accept a strictly
    /// heavier piece.
    #[must_use]
    pub fn accepts(&self, position: Position, weight: Weight) -> bool {
        match self.get(position) {
            None => true,
            Some(mark) => mark.weight < weight,
        }
    }

    /// Positions that accept `weight`.
    #[must_use]
    pub fn accepting(&self, weight: Weight) -> SmallVec<[Position; 9]> {
        Position::all().filter(|&p| self.accepts(p, weight)).collect()
    }

    /// Put a mark on a cell, returning whatever was there.
    ///
    /// No legality check; callers validate with [`Board::accepts`] first.
    pub fn set(&mut self, position: Position, mark: Mark) -> Cell {
        self.cells[position.index()].replace(mark)
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Owner of a line if all three cells are held by the same player.
    ///
    /// Weights are irrelevant.
    #[must_use]
    pub fn line_owner(&self, line: &Line) -> Option<Player> {
        let first = self.get(line[0])?.owner;
        line[1..]
            .iter()
            .all(|&p| self.get(p).map(|m| m.owner) == Some(first))
            .then_some(first)
    }

    /// First completed line and its owner, in `LINES` order.
    #[must_use]
    pub fn winning_line(&self) -> Option<(Player, Line)> {
        LINES
            .iter()
            .find_map(|line| self.line_owner(line).map(|owner| (owner, *line)))
    }

    /// Owner of any completed line.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winning_line().map(|(owner, _)| owner)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "------+------+------")?;
            }
            let cells: Vec<String> = (0..3)
                .map(|col| {
                    let index = row * 3 + col;
                    match self.cells[index] {
                        Some(mark) => format!(" {}:{} ", mark.owner.tag(), mark.weight),
                        None => format!("  {}   ", index),
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

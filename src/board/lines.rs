//! The eight winning lines.

use super::position::Position;

/// A line of three cells.
pub type Line = [Position; 3];

const fn line(a: u8, b: u8, c: u8) -> Line {
    [Position::from_index(a), Position::from_index(b), Position::from_index(c)]
}

/// Rows, then columns, then the two diagonals.
pub static LINES: [Line; 8] = [
    line(0, 1, 2),
    line(3, 4, 5),
    line(6, 7, 8),
    line(0, 3, 6),
    line(1, 4, 7),
    line(2, 5, 8),
    line(0, 4, 8),
    line(2, 4, 6),
];

/// Lines passing through a position.
pub fn lines_through(position: Position) -> impl Iterator<Item = &'static Line> {
    LINES.iter().filter(move |l| l.contains(&position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cell_is_covered() {
        for position in Position::all() {
            assert!(lines_through(position).count() >= 2);
        }
    }

    #[test]
    fn test_centre_and_corners() {
        let centre = Position::new(4).unwrap();
        assert_eq!(lines_through(centre).count(), 4);

        let corner = Position::new(2).unwrap();
        assert_eq!(lines_through(corner).count(), 3);

        let edge = Position::new(7).unwrap();
        assert_eq!(lines_through(edge).count(), 2);
    }

    #[test]
    fn test_lines_are_distinct() {
        for (i, a) in LINES.iter().enumerate() {
            for b in &LINES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

//! Jump representation and legal-move enumeration

use std::fmt;

use serde::{Deserialize, Serialize};

use super::grid::{BOARD_SIZE, Board, Coordinates, Tile};

/// A single jump: the peg at `from` leaps over an adjacent peg and lands on
/// the space at `to`, removing the jumped-over peg.
///
/// A jump is valid only with respect to a specific board; see
/// [`Board::move_peg`] for the precondition checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Jump {
    pub from: Coordinates,
    pub to: Coordinates,
}

impl Jump {
    pub fn new(from: Coordinates, to: Coordinates) -> Self {
        Jump { from, to }
    }

    /// The cell jumped over, when `from` and `to` are a straight two-cell
    /// jump (same row two columns apart, or same column two rows apart).
    ///
    /// Returns `None` for any other pair.
    pub fn midpoint(&self) -> Option<Coordinates> {
        let Jump { from, to } = *self;
        if from.row == to.row && from.column.abs_diff(to.column) == 2 {
            Some(Coordinates::new(from.row, from.column.min(to.column) + 1))
        } else if from.column == to.column && from.row.abs_diff(to.row) == 2 {
            Some(Coordinates::new(from.row.min(to.row) + 1, from.column))
        } else {
            None
        }
    }
}

impl fmt::Display for Jump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Enumerate every legal jump on the board, in deterministic order.
///
/// Spaces are visited in row-major order; within each space the candidate
/// source directions are inspected in a fixed order: up, left, right, down.
/// The enumeration is pure and may return an empty list (terminal position).
///
/// # Examples
///
/// ```
/// use pegsol::board::{Board, Coordinates, legal_jumps};
///
/// let board = Board::standard();
/// assert!(legal_jumps(&board).is_empty());
///
/// let opened = board.remove_peg(Coordinates::new(3, 3)).unwrap();
/// assert_eq!(legal_jumps(&opened).len(), 4);
/// ```
pub fn legal_jumps(board: &Board) -> Vec<Jump> {
    let peg = |row, column| {
        board
            .tile(Coordinates::new(row, column))
            .is_ok_and(|tile| tile == Tile::Peg)
    };

    let mut jumps = Vec::new();
    for to in board.coordinates_of(Tile::Space) {
        let Coordinates { row: r, column: c } = to;
        // up
        if r >= 2 && peg(r - 1, c) && peg(r - 2, c) {
            jumps.push(Jump::new(Coordinates::new(r - 2, c), to));
        }
        // left
        if c >= 2 && peg(r, c - 1) && peg(r, c - 2) {
            jumps.push(Jump::new(Coordinates::new(r, c - 2), to));
        }
        // right
        if c <= BOARD_SIZE - 3 && peg(r, c + 1) && peg(r, c + 2) {
            jumps.push(Jump::new(Coordinates::new(r, c + 2), to));
        }
        // down
        if r <= BOARD_SIZE - 3 && peg(r + 1, c) && peg(r + 2, c) {
            jumps.push(Jump::new(Coordinates::new(r + 2, c), to));
        }
    }
    jumps
}

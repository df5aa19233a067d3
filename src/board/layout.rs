//! Standard board layouts

use super::grid::{BOARD_SIZE, Board, Tile};
use super::grid::Tile::{Corner as C, Peg as P, Space as S};

/// The standard English starting layout: four 2x2 corner blocks and a peg on
/// every one of the 33 playable cells.
const STANDARD: [[Tile; BOARD_SIZE]; BOARD_SIZE] = [
    [C, C, P, P, P, C, C],
    [C, P, P, P, P, P, C],
    [P, P, P, P, P, P, P],
    [P, P, P, P, P, P, P],
    [P, P, P, P, P, P, P],
    [C, P, P, P, P, P, C],
    [C, C, P, P, P, C, C],
];

/// The same shape mask with every playable cell empty.
const CLEARED: [[Tile; BOARD_SIZE]; BOARD_SIZE] = [
    [C, C, S, S, S, C, C],
    [C, S, S, S, S, S, C],
    [S, S, S, S, S, S, S],
    [S, S, S, S, S, S, S],
    [S, S, S, S, S, S, S],
    [C, S, S, S, S, S, C],
    [C, C, S, S, S, C, C],
];

impl Board {
    /// The standard starting board (7x7, 33 pegs, corner blocks masked off).
    ///
    /// # Examples
    ///
    /// ```
    /// use pegsol::board::Board;
    ///
    /// let board = Board::standard();
    /// assert_eq!(board.peg_count(), 33);
    /// ```
    pub fn standard() -> Self {
        Board::from_tiles(STANDARD)
    }

    /// An empty board with the standard shape mask.
    ///
    /// Useful as a scaffold for small positions built with `set_tile`.
    pub fn cleared() -> Self {
        Board::from_tiles(CLEARED)
    }
}

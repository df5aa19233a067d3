//! Peg-solitaire board implementation

pub mod grid;
pub mod layout;
pub mod moves;

pub use grid::{BOARD_SIZE, Board, CELL_COUNT, Coordinates, Tile, parse_tile_rows};
pub use moves::{Jump, legal_jumps};

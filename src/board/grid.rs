//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::moves::Jump;
use crate::identifiers::BoardKey;

/// Side length of the board grid.
pub const BOARD_SIZE: usize = 7;

/// Number of cells in the board grid.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell on the peg-solitaire board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// An occupied playable cell
    Peg,
    /// An empty playable cell
    Space,
    /// A permanently non-playable cell (board shape mask)
    Corner,
}

impl Tile {
    pub fn to_char(self) -> char {
        match self {
            Tile::Peg => 'o',
            Tile::Space => '.',
            Tile::Corner => '#',
        }
    }

    pub fn from_char(c: char) -> Option<Tile> {
        match c {
            'o' | 'O' => Some(Tile::Peg),
            '.' | '_' => Some(Tile::Space),
            '#' => Some(Tile::Corner),
            _ => None,
        }
    }

    /// Corner tiles never participate in play.
    pub fn is_playable(self) -> bool {
        self != Tile::Corner
    }
}

/// A zero-based (row, column) pair.
///
/// Coordinates carry no inherent bounds; validity is relative to a specific
/// board's dimensions and is checked by every board access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinates {
    pub row: usize,
    pub column: usize,
}

impl Coordinates {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl FromStr for Coordinates {
    type Err = crate::Error;

    /// Parse coordinates from a `"row,column"` string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || crate::Error::ParseCoordinates {
            input: s.to_string(),
        };

        let (row, column) = s.split_once(',').ok_or_else(parse_error)?;
        let row = row.trim().parse().map_err(|_| parse_error())?;
        let column = column.trim().parse().map_err(|_| parse_error())?;
        Ok(Coordinates { row, column })
    }
}

/// Complete board state: a fixed 7x7 grid of tiles, row-major.
///
/// A board is an immutable value. Every transformation (`set_tile`,
/// `remove_peg`, `move_peg`) returns a new board and leaves the input
/// untouched, so the solver can hold one snapshot per branch of recursion
/// without a sibling branch ever observing a mutation.
///
/// This type implements `Copy` for efficiency since it's only 49 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    tiles: [[Tile; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a board directly from a tile grid.
    pub fn from_tiles(tiles: [[Tile; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { tiles }
    }

    /// Structural sanity check: exactly 7 rows, each of exactly 7 columns.
    ///
    /// This does not validate tile placement.
    pub fn rows_are_legal(rows: &[Vec<Tile>]) -> bool {
        rows.len() == BOARD_SIZE && rows.iter().all(|row| row.len() == BOARD_SIZE)
    }

    /// Build a board from parsed rows, rejecting structural invalidity.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedBoard`] if the row grid is not
    /// exactly 7x7.
    pub fn from_rows(rows: &[Vec<Tile>]) -> Result<Self, crate::Error> {
        if !Self::rows_are_legal(rows) {
            let detail = if rows.len() != BOARD_SIZE {
                format!("got {} rows", rows.len())
            } else {
                let (index, row) = rows
                    .iter()
                    .enumerate()
                    .find(|(_, row)| row.len() != BOARD_SIZE)
                    .expect("some row must have the wrong width");
                format!("row {index} has {} columns", row.len())
            };
            return Err(crate::Error::MalformedBoard {
                expected: BOARD_SIZE,
                detail,
            });
        }

        let mut tiles = [[Tile::Space; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in rows.iter().enumerate() {
            for (c, &tile) in row.iter().enumerate() {
                tiles[r][c] = tile;
            }
        }
        Ok(Board { tiles })
    }

    /// Create a board from a text representation.
    ///
    /// The text should contain 49 tile characters in row-major order
    /// (`'o'` peg, `'.'` space, `'#'` corner); whitespace and `'/'` row
    /// separators are filtered out.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 49 tile characters are present or any
    /// character is not a valid tile representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let cleaned: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if cleaned.len() < CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: cleaned.len(),
                context: s.to_string(),
            });
        }

        let mut tiles = [[Tile::Space; BOARD_SIZE]; BOARD_SIZE];
        for (i, &c) in cleaned.iter().take(CELL_COUNT).enumerate() {
            tiles[i / BOARD_SIZE][i % BOARD_SIZE] =
                Tile::from_char(c).ok_or_else(|| crate::Error::InvalidTileCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }
        Ok(Board { tiles })
    }

    fn check_bounds(&self, coordinates: Coordinates) -> Result<(), crate::Error> {
        if coordinates.row < BOARD_SIZE && coordinates.column < BOARD_SIZE {
            Ok(())
        } else {
            Err(crate::Error::OutOfBounds {
                coordinates,
                size: BOARD_SIZE,
            })
        }
    }

    /// Get the tile at the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if the coordinates fall outside
    /// the board's dimensions.
    pub fn tile(&self, coordinates: Coordinates) -> Result<Tile, crate::Error> {
        self.check_bounds(coordinates)?;
        Ok(self.tiles[coordinates.row][coordinates.column])
    }

    /// Return a new board with the single cell at `coordinates` replaced.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if the coordinates fall outside
    /// the board's dimensions.
    #[must_use = "set_tile returns a new board; the original is unchanged"]
    pub fn set_tile(&self, coordinates: Coordinates, tile: Tile) -> Result<Board, crate::Error> {
        self.check_bounds(coordinates)?;
        let mut board = *self;
        board.tiles[coordinates.row][coordinates.column] = tile;
        Ok(board)
    }

    /// Return a new board with the peg at `coordinates` removed.
    ///
    /// Removing from a cell that holds no peg is a reported, non-fatal
    /// condition: the error carries the coordinates and the caller keeps the
    /// unchanged input board.
    #[must_use = "remove_peg returns a new board; the original is unchanged"]
    pub fn remove_peg(&self, coordinates: Coordinates) -> Result<Board, crate::Error> {
        if self.tile(coordinates)? != Tile::Peg {
            return Err(crate::Error::RemoveWithoutPeg { coordinates });
        }
        self.set_tile(coordinates, Tile::Space)
    }

    /// Apply a single jump: the peg at `from` lands at `to` and the peg
    /// between them is removed.
    ///
    /// Exactly three cells change: `from` becomes a space, the jumped-over
    /// cell becomes a space, and `to` becomes a peg. The write is atomic:
    /// on any precondition failure the caller keeps the unchanged board.
    ///
    /// # Errors
    ///
    /// Returns a typed violation if `from` is not a peg, `to` is not a
    /// space, the pair is not a straight two-cell jump, or the jumped-over
    /// cell holds no peg.
    #[must_use = "move_peg returns a new board; the original is unchanged"]
    pub fn move_peg(&self, from: Coordinates, to: Coordinates) -> Result<Board, crate::Error> {
        if self.tile(from)? != Tile::Peg {
            return Err(crate::Error::JumpSourceNotPeg { from });
        }
        if self.tile(to)? != Tile::Space {
            return Err(crate::Error::JumpTargetNotSpace { to });
        }

        let over = Jump { from, to }
            .midpoint()
            .ok_or(crate::Error::JumpNotStraight { from, to })?;
        if self.tile(over)? != Tile::Peg {
            return Err(crate::Error::JumpOverEmpty { from, to, over });
        }

        self.set_tile(from, Tile::Space)?
            .set_tile(over, Tile::Space)?
            .set_tile(to, Tile::Peg)
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinates, Tile)> + '_ {
        self.tiles.iter().enumerate().flat_map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .map(move |(column, &tile)| (Coordinates { row, column }, tile))
        })
    }

    /// Collect the coordinates of every cell holding the given tile,
    /// in row-major order.
    pub fn coordinates_of(&self, tile: Tile) -> Vec<Coordinates> {
        self.cells()
            .filter(|&(_, t)| t == tile)
            .map(|(coordinates, _)| coordinates)
            .collect()
    }

    /// Count the pegs currently on the board.
    pub fn peg_count(&self) -> usize {
        self.cells().filter(|&(_, t)| t == Tile::Peg).count()
    }

    /// Count the playable (non-corner) cells.
    ///
    /// This is the upper bound on any reachable peg count and seeds the
    /// solver's best-result tracker.
    pub fn playable_count(&self) -> usize {
        self.cells().filter(|&(_, t)| t.is_playable()).count()
    }

    /// Serialize the tiles in row-major order into a content key.
    ///
    /// Two boards share an encoding iff every cell matches; rotations and
    /// reflections of a board are distinct encodings.
    pub fn encode(&self) -> String {
        self.cells().map(|(_, tile)| tile.to_char()).collect()
    }

    /// Get the canonical deduplication key for this board.
    pub fn key(&self) -> BoardKey {
        BoardKey::new(self.encode())
    }
}

/// Parse board text into tile rows without enforcing the 7x7 shape.
///
/// Rows are separated by newlines or `'/'`; blank rows are skipped. This is
/// the lenient front half of [`Board::from_rows`], letting callers inspect
/// a structurally invalid grid before deciding to reject it.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidTileCharacter`] on the first character
/// that is not a valid tile representation.
pub fn parse_tile_rows(s: &str) -> Result<Vec<Vec<Tile>>, crate::Error> {
    let mut rows = Vec::new();
    let mut position = 0;
    for line in s.split(['\n', '/']) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut row = Vec::with_capacity(BOARD_SIZE);
        for c in line.chars().filter(|c| !c.is_whitespace()) {
            row.push(Tile::from_char(c).ok_or_else(|| {
                crate::Error::InvalidTileCharacter {
                    character: c,
                    position,
                    context: s.to_string(),
                }
            })?);
            position += 1;
        }
        rows.push(row);
    }
    Ok(rows)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.tiles.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &tile in row {
                write!(f, "{}", tile.to_char())?;
            }
        }
        Ok(())
    }
}

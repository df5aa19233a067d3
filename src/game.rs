//! High-level game session management

use serde::{Deserialize, Serialize};

use crate::board::{Board, Coordinates, Jump, legal_jumps};

/// Phase of an interactive game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the opening peg removal that creates the first space
    AwaitingRemoval,
    /// Pegs move by jumping until no legal jump remains
    Jumping,
}

/// A complete game: the starting board plus the log of plays made.
///
/// The current position is reconstructed by replaying the log against the
/// initial board, so a corrupt log (for example a hand-edited serialized
/// game) surfaces a typed error instead of a panic.
///
/// # Examples
///
/// ```
/// use pegsol::{
///     board::{Coordinates, Jump},
///     game::{Game, GamePhase},
/// };
///
/// let mut game = Game::standard();
/// assert_eq!(game.phase(), GamePhase::AwaitingRemoval);
///
/// game.remove_opening_peg(Coordinates::new(3, 3)).unwrap();
/// game.play(Jump::new(Coordinates::new(3, 1), Coordinates::new(3, 3)))
///     .unwrap();
/// assert_eq!(game.pegs_remaining().unwrap(), 31);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub opening: Option<Coordinates>,
    pub jumps: Vec<Jump>,
}

impl Game {
    /// Create a new game from the given starting board.
    pub fn new(initial: Board) -> Self {
        Game {
            initial,
            opening: None,
            jumps: Vec::new(),
        }
    }

    /// Create a new game on the standard board.
    pub fn standard() -> Self {
        Self::new(Board::standard())
    }

    /// Current phase of the game.
    pub fn phase(&self) -> GamePhase {
        if self.opening.is_none() {
            GamePhase::AwaitingRemoval
        } else {
            GamePhase::Jumping
        }
    }

    /// Remove the opening peg, starting the jump phase.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OpeningAlreadyMade`] if an opening peg was
    /// already removed, or the underlying removal error if the cell holds
    /// no peg.
    pub fn remove_opening_peg(&mut self, coordinates: Coordinates) -> Result<(), crate::Error> {
        if let Some(existing) = self.opening {
            return Err(crate::Error::OpeningAlreadyMade {
                coordinates: existing,
            });
        }

        self.initial.remove_peg(coordinates)?;
        self.opening = Some(coordinates);
        Ok(())
    }

    /// Play a jump.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OpeningRequired`] before the opening removal,
    /// or the underlying jump violation if the move is illegal in the
    /// current position.
    pub fn play(&mut self, jump: Jump) -> Result<(), crate::Error> {
        if self.opening.is_none() {
            return Err(crate::Error::OpeningRequired);
        }

        self.current_board()?.move_peg(jump.from, jump.to)?;
        self.jumps.push(jump);
        Ok(())
    }

    /// Replay the log up to `end` jumps (exclusive).
    fn replay_until(&self, end: usize) -> Result<Board, crate::Error> {
        let mut board = self.initial;
        if let Some(opening) = self.opening {
            board = board
                .remove_peg(opening)
                .map_err(|source| crate::Error::CorruptGameLog {
                    step: 0,
                    source: Box::new(source),
                })?;
        }
        for (i, jump) in self.jumps.iter().take(end).enumerate() {
            board = board
                .move_peg(jump.from, jump.to)
                .map_err(|source| crate::Error::CorruptGameLog {
                    step: i + 1,
                    source: Box::new(source),
                })?;
        }
        Ok(board)
    }

    /// Get the current board state.
    ///
    /// # Errors
    ///
    /// Returns error if any play in the log is invalid when replayed.
    /// This indicates corrupted game data.
    pub fn current_board(&self) -> Result<Board, crate::Error> {
        self.replay_until(self.jumps.len())
    }

    /// Get the sequence of board states, initial position first.
    ///
    /// The sequence contains the initial board, the board after the opening
    /// removal (when made), and one board per jump played: the playback
    /// artifact a scrubber consumes.
    ///
    /// # Errors
    ///
    /// Returns error if any play in the log is invalid when replayed.
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut boards = Vec::with_capacity(self.jumps.len() + 2);
        boards.push(self.initial);
        if self.opening.is_some() {
            boards.push(self.replay_until(0)?);
        }
        for i in 1..=self.jumps.len() {
            boards.push(self.replay_until(i)?);
        }
        Ok(boards)
    }

    /// Pegs left in the current position.
    pub fn pegs_remaining(&self) -> Result<usize, crate::Error> {
        Ok(self.current_board()?.peg_count())
    }

    /// Whether the jump phase has started and no legal jump remains.
    pub fn is_over(&self) -> Result<bool, crate::Error> {
        if self.opening.is_none() {
            return Ok(false);
        }
        Ok(legal_jumps(&self.current_board()?).is_empty())
    }

    /// Whether the game ended with a single peg.
    pub fn is_won(&self) -> Result<bool, crate::Error> {
        Ok(self.is_over()? && self.pegs_remaining()? == 1)
    }

    /// Discard every play, returning to the starting board.
    pub fn reset(&mut self) {
        self.opening = None;
        self.jumps.clear();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::standard()
    }
}

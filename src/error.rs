//! Error types for the pegsol crate

use thiserror::Error;

use crate::board::Coordinates;

/// Main error type for the pegsol crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no peg to remove at {coordinates}")]
    RemoveWithoutPeg { coordinates: Coordinates },

    #[error("illegal jump: source {from} is not a peg")]
    JumpSourceNotPeg { from: Coordinates },

    #[error("illegal jump: target {to} is not a space")]
    JumpTargetNotSpace { to: Coordinates },

    #[error("illegal jump from {from} to {to}: not a straight two-cell jump")]
    JumpNotStraight { from: Coordinates, to: Coordinates },

    #[error("illegal jump from {from} to {to}: no peg at {over} to jump over")]
    JumpOverEmpty {
        from: Coordinates,
        to: Coordinates,
        over: Coordinates,
    },

    #[error("coordinates {coordinates} are outside the {size}x{size} board")]
    OutOfBounds {
        coordinates: Coordinates,
        size: usize,
    },

    #[error("malformed board: expected {expected} rows of {expected} columns, {detail}")]
    MalformedBoard { expected: usize, detail: String },

    #[error("board text too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid tile character '{character}' at cell {position} in '{context}'")]
    InvalidTileCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid coordinates '{input}' (expected 'row,column')")]
    ParseCoordinates { input: String },

    #[error("opening peg already removed at {coordinates}")]
    OpeningAlreadyMade { coordinates: Coordinates },

    #[error("no opening peg removed yet: remove a peg before jumping")]
    OpeningRequired,

    #[error("game log is corrupt at step {step}: {source}")]
    CorruptGameLog {
        step: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("board has no pegs to remove")]
    NoPegsToRemove,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

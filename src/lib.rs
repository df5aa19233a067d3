//! Peg-solitaire core: board model, move-legality engine, exhaustive
//! backtracking solver, and move-history reconstruction
//!
//! This crate provides:
//! - Immutable 7x7 board values with checked query and transform operations
//! - Deterministic legal-jump enumeration
//! - A depth-first exhaustive solver with visited-state deduplication
//! - Playback reconstruction from shared-tail move-history chains
//! - An interactive game session (opening removal, then jumps)

pub mod adapters;
pub mod board;
pub mod cli;
pub mod error;
pub mod export;
pub mod game;
pub mod identifiers;
pub mod ports;
pub mod solver;

pub use board::{BOARD_SIZE, Board, Coordinates, Jump, Tile, legal_jumps};
pub use error::{Error, Result};
pub use export::SolutionDocument;
pub use game::{Game, GamePhase};
pub use identifiers::BoardKey;
pub use ports::{NullObserver, SearchObserver};
pub use solver::{
    CancelToken, HistoryNode, MoveHistory, SearchConfig, SearchReport, Solver, history_to_boards,
    history_to_jumps,
};

//! Exhaustive backtracking solver

pub mod history;
pub mod search;

pub use history::{HistoryNode, MoveHistory, history_to_boards, history_to_jumps};
pub use search::{
    CancelToken, DEFAULT_PROGRESS_INTERVAL, SearchConfig, SearchReport, Solver,
};

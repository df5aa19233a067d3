//! Solution export for downstream tooling

use std::{fs::File, io::BufWriter, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Coordinates, Jump},
    solver::{SearchReport, history_to_boards, history_to_jumps},
};

/// A solved board in a serializable, playback-ready form.
///
/// This is the artifact handed to external consumers: the starting
/// position, the jump list, and one board snapshot per jump, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionDocument {
    /// Board the search started from
    pub initial: Board,
    /// Opening peg removal applied before the search, if any
    pub removed: Option<Coordinates>,
    /// Jumps along the best chain, oldest first
    pub jumps: Vec<Jump>,
    /// Board snapshot after each jump, oldest first
    pub boards: Vec<Board>,
    /// Pegs left on the final board of the best chain
    pub remaining_pegs: Option<usize>,
    /// Board states walked by the search
    pub walks: u64,
    /// Whether the walk limit or cancellation stopped the search early
    pub interrupted: bool,
}

impl SolutionDocument {
    /// Assemble a document from a search report.
    pub fn new(initial: Board, removed: Option<Coordinates>, report: &SearchReport) -> Self {
        let (jumps, boards) = report
            .best
            .as_ref()
            .map(|best| (history_to_jumps(best), history_to_boards(best)))
            .unwrap_or_default();

        SolutionDocument {
            initial,
            removed,
            jumps,
            boards,
            remaining_pegs: report.best_remaining,
            walks: report.walks,
            interrupted: report.interrupted,
        }
    }

    /// Render the document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String, crate::Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the document as pretty-printed JSON to a file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be created or encoding fails.
    pub fn write_json(&self, path: &Path) -> Result<(), crate::Error> {
        let file = File::create(path).map_err(|source| crate::Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}

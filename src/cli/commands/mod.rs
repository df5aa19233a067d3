//! CLI command implementations

pub mod check;
pub mod moves;
pub mod solve;

use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Args;

use crate::board::Board;

/// Shared board-input options for commands that operate on a board.
#[derive(Args, Debug)]
pub struct BoardInput {
    /// Board text: 49 tiles ('o' peg, '.' space, '#' corner), rows separated
    /// by '/' or whitespace
    #[arg(long)]
    pub board: Option<String>,

    /// Read the board text from a file
    #[arg(long, conflicts_with = "board")]
    pub board_file: Option<PathBuf>,
}

impl BoardInput {
    /// Whether the user supplied a board instead of the standard default.
    pub fn is_explicit(&self) -> bool {
        self.board.is_some() || self.board_file.is_some()
    }

    /// The raw board text, if one was supplied.
    pub fn text(&self) -> anyhow::Result<Option<String>> {
        if let Some(text) = &self.board {
            return Ok(Some(text.clone()));
        }
        if let Some(path) = &self.board_file {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading board file {}", path.display()))?;
            return Ok(Some(text));
        }
        Ok(None)
    }

    /// Parse the supplied board, defaulting to the standard board.
    pub fn load(&self) -> anyhow::Result<Board> {
        match self.text()? {
            Some(text) => Board::from_string(&text).context("parsing board text"),
            None => Ok(Board::standard()),
        }
    }
}

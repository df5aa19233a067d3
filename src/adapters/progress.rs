//! Spinner-based progress reporting for long searches

use indicatif::{ProgressBar, ProgressStyle};

use crate::{Result, ports::SearchObserver, solver::history::MoveHistory};

/// Search observer that keeps a terminal spinner alive while the solver
/// walks the jump tree, and prints improvements as they are found.
pub struct ProgressObserver {
    bar: ProgressBar,
}

impl ProgressObserver {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("Invalid spinner template"),
        );
        bar.set_message("searching...");
        Self { bar }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchObserver for ProgressObserver {
    fn on_progress(&mut self, walks: u64) -> Result<()> {
        self.bar
            .set_message(format!("{} board states walked", crate::cli::output::format_number(walks as usize)));
        self.bar.tick();
        Ok(())
    }

    fn on_winner(&mut self, history: &MoveHistory) -> Result<()> {
        self.bar
            .println(format!("1-peg finish after {} jumps", history.chain_len()));
        Ok(())
    }

    fn on_improvement(&mut self, remaining: usize, depth: usize) -> Result<()> {
        self.bar
            .println(format!("best so far: {remaining} pegs left after {depth} jumps"));
        Ok(())
    }

    fn on_finish(&mut self, walks: u64) -> Result<()> {
        self.bar.finish_with_message(format!(
            "done: {} board states walked",
            crate::cli::output::format_number(walks as usize)
        ));
        Ok(())
    }
}

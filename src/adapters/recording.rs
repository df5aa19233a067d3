//! Event-recording observer for diagnostics and tests

use crate::{Result, ports::SearchObserver, solver::history::MoveHistory};

/// One recorded solver event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Progress { walks: u64 },
    Winner { depth: usize },
    Improvement { remaining: usize, depth: usize },
    Finish { walks: u64 },
}

/// Search observer that records every event it sees, in order.
///
/// Useful for asserting on solver behavior without attaching a terminal.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub events: Vec<SearchEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the recorded 1-peg finishes.
    pub fn winners(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SearchEvent::Winner { .. }))
            .count()
    }

    /// The remaining-peg counts of recorded improvements, in order.
    pub fn improvements(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SearchEvent::Improvement { remaining, .. } => Some(*remaining),
                _ => None,
            })
            .collect()
    }
}

impl SearchObserver for RecordingObserver {
    fn on_progress(&mut self, walks: u64) -> Result<()> {
        self.events.push(SearchEvent::Progress { walks });
        Ok(())
    }

    fn on_winner(&mut self, history: &MoveHistory) -> Result<()> {
        self.events.push(SearchEvent::Winner {
            depth: history.chain_len(),
        });
        Ok(())
    }

    fn on_improvement(&mut self, remaining: usize, depth: usize) -> Result<()> {
        self.events.push(SearchEvent::Improvement { remaining, depth });
        Ok(())
    }

    fn on_finish(&mut self, walks: u64) -> Result<()> {
        self.events.push(SearchEvent::Finish { walks });
        Ok(())
    }
}

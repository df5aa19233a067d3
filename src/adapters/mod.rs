//! Adapters - concrete implementations of the observation port

pub mod progress;
pub mod recording;

pub use progress::ProgressObserver;
pub use recording::{RecordingObserver, SearchEvent};

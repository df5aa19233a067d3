//! Ports - abstractions decoupling the search core from its surroundings

pub mod observer;

pub use observer::{NullObserver, SearchObserver};

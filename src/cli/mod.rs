//! CLI infrastructure for the pegsol toolkit
//!
//! This module provides the command-line interface for solving, inspecting,
//! and validating peg-solitaire boards.

pub mod commands;
pub mod output;

//! pegsol CLI - peg-solitaire board toolkit
//!
//! This CLI provides a unified interface for:
//! - Solving boards with the exhaustive backtracking solver
//! - Enumerating the legal jumps of a position
//! - Validating board text

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pegsol")]
#[command(version, about = "Peg-solitaire board toolkit and solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a board, printing the best jump sequence found
    Solve(pegsol::cli::commands::solve::SolveArgs),

    /// Enumerate the legal jumps of a position
    Moves(pegsol::cli::commands::moves::MovesArgs),

    /// Validate board text and report its composition
    Check(pegsol::cli::commands::check::CheckArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => pegsol::cli::commands::solve::execute(args),
        Commands::Moves(args) => pegsol::cli::commands::moves::execute(args),
        Commands::Check(args) => pegsol::cli::commands::check::execute(args),
    }
}

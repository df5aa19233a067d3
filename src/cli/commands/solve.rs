//! Solve command: run the backtracking solver and print the playback

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};

use super::BoardInput;
use crate::{
    adapters::ProgressObserver,
    board::{Board, Coordinates, Tile},
    cli::output::{format_number, print_kv, print_section},
    export::SolutionDocument,
    solver::{
        DEFAULT_PROGRESS_INTERVAL, SearchConfig, SearchReport, Solver, history_to_boards,
        history_to_jumps,
    },
};

#[derive(Args, Debug)]
pub struct SolveArgs {
    #[command(flatten)]
    board: BoardInput,

    /// Remove this peg before solving (row,column). With no board and no
    /// removal flag, the center peg (3,3) is removed
    #[arg(long)]
    remove: Option<Coordinates>,

    /// Remove a random peg before solving
    #[arg(long, conflicts_with = "remove")]
    remove_random: bool,

    /// Seed for --remove-random
    #[arg(long, requires = "remove_random")]
    seed: Option<u64>,

    /// Stop after walking this many board states
    #[arg(long)]
    walk_limit: Option<u64>,

    /// Walked states between progress updates
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    progress_interval: u64,

    /// Show a progress spinner while searching
    #[arg(long)]
    progress: bool,

    /// Write the solution as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

pub fn execute(args: SolveArgs) -> anyhow::Result<()> {
    let mut board = args.board.load()?;
    let mut removed = None;

    if args.remove_random {
        let coordinates = pick_random_peg(&board, args.seed)?;
        board = board.remove_peg(coordinates)?;
        removed = Some(coordinates);
    } else if let Some(coordinates) = args.remove {
        board = board
            .remove_peg(coordinates)
            .with_context(|| format!("removing the peg at {coordinates}"))?;
        removed = Some(coordinates);
    } else if !args.board.is_explicit() {
        let center = Coordinates::new(3, 3);
        board = board.remove_peg(center)?;
        removed = Some(center);
    }

    let initial = board;
    println!("Solving from:");
    println!("{initial}");

    let mut config = SearchConfig::new().with_progress_interval(args.progress_interval);
    if let Some(limit) = args.walk_limit {
        config = config.with_walk_limit(limit);
    }

    let solver = Solver::new(config);
    let report = if args.progress {
        let mut observer = ProgressObserver::new();
        solver.solve_observed(&initial, &mut observer)?
    } else {
        solver.solve(&initial)
    };

    print_playback(&report);
    print_summary(&report);

    if let Some(path) = &args.json {
        let document = SolutionDocument::new(initial, removed, &report);
        document
            .write_json(path)
            .with_context(|| format!("writing solution to {}", path.display()))?;
        println!("\nSolution written to {}", path.display());
    }

    Ok(())
}

fn pick_random_peg(board: &Board, seed: Option<u64>) -> anyhow::Result<Coordinates> {
    let pegs = board.coordinates_of(Tile::Peg);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let coordinates = pegs.choose(&mut rng).copied().ok_or(crate::Error::NoPegsToRemove)?;
    Ok(coordinates)
}

fn print_playback(report: &SearchReport) {
    let Some(best) = &report.best else {
        return;
    };

    print_section("Playback");
    let jumps = history_to_jumps(best);
    let boards = history_to_boards(best);
    for (i, (jump, board)) in jumps.iter().zip(&boards).enumerate() {
        println!("\njump {}: {}", i + 1, jump);
        println!("{board}");
    }
}

fn print_summary(report: &SearchReport) {
    print_section("Search summary");
    print_kv("states walked", &format_number(report.walks as usize));
    print_kv(
        "stopped early",
        if report.interrupted { "yes" } else { "no" },
    );
    match report.best_remaining {
        Some(1) => print_kv("result", "solved down to a single peg"),
        Some(remaining) => print_kv("result", &format!("{remaining} pegs left")),
        None => print_kv("result", "no solution found"),
    }
    if let Some(best) = &report.best {
        print_kv("jumps", &best.chain_len().to_string());
    }
}

//! Moves command: enumerate the legal jumps on a board

use anyhow::Context;
use clap::Args;

use super::BoardInput;
use crate::{
    board::{Coordinates, legal_jumps},
    cli::output::print_section,
};

#[derive(Args, Debug)]
pub struct MovesArgs {
    #[command(flatten)]
    board: BoardInput,

    /// Remove this peg first (row,column)
    #[arg(long)]
    remove: Option<Coordinates>,
}

pub fn execute(args: MovesArgs) -> anyhow::Result<()> {
    let mut board = args.board.load()?;
    if let Some(coordinates) = args.remove {
        board = board
            .remove_peg(coordinates)
            .with_context(|| format!("removing the peg at {coordinates}"))?;
    }

    println!("{board}");

    let jumps = legal_jumps(&board);
    print_section(&format!("Legal jumps ({})", jumps.len()));
    if jumps.is_empty() {
        println!("  (none - terminal position)");
    }
    for (i, jump) in jumps.iter().enumerate() {
        let over = jump.midpoint().expect("generated jumps are always straight");
        println!("  {:>2}. {jump}  over {over}", i + 1);
    }

    Ok(())
}

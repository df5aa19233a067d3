//! Check command: validate board text and report its composition

use clap::Args;

use super::BoardInput;
use crate::{
    board::{Board, Tile, legal_jumps, parse_tile_rows},
    cli::output::{print_kv, print_section},
};

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    board: BoardInput,
}

pub fn execute(args: CheckArgs) -> anyhow::Result<()> {
    let text = match args.board.text()? {
        Some(text) => text,
        None => Board::standard().to_string(),
    };

    let rows = parse_tile_rows(&text)?;
    let legal = Board::rows_are_legal(&rows);

    print_section("Board check");
    print_kv("rows", &rows.len().to_string());
    print_kv("shape legal", if legal { "yes" } else { "no" });

    if !legal {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != crate::board::BOARD_SIZE {
                print_kv(&format!("row {i}"), &format!("{} columns", row.len()));
            }
        }
        anyhow::bail!("board failed the 7x7 shape check");
    }

    let board = Board::from_rows(&rows)?;
    let count = |tile| board.coordinates_of(tile).len();
    print_kv("pegs", &count(Tile::Peg).to_string());
    print_kv("spaces", &count(Tile::Space).to_string());
    print_kv("corners", &count(Tile::Corner).to_string());
    print_kv("legal jumps", &legal_jumps(&board).len().to_string());

    println!("\n{board}");
    Ok(())
}

use docopt::Docopt;
use error_chain::bail;
use rand::Rng;
use serde_derive::Deserialize;

use gridgames::{
    minesweeper::{parse_command, Board, MinesCommand, Tile, View},
    units::{BombCount, Dimension},
};

use std::io::{self, BufRead, Write};

const USAGE: &str = "Minesweeper

Usage:
    minesweeper [--size=<n>] [--bombs=<b>] [--auto]
    minesweeper -h | --help

Options:
    -h --help        Show this screen.
    -n --size=<n>    Board side length for an n x n board [default: 9].
    -b --bombs=<b>   Number of bombs, must be less than the cell count [default: 10].
    --auto           Reveal random cells automatically until the game ends.
";

const HELP_TEXT: &str = "Commands:
  r c        -> reveal the cell at (row, col)
  m r c      -> flag/unflag the cell, e.g. m 1 2
               compact forms m12 and m1,2 also parse as (1, 2)
  q          -> quit
Flagged cells show as x; unrevealed cells show as .";

#[derive(Debug, Deserialize)]
struct MinesArgs {
    flag_size: usize,
    flag_bombs: usize,
    flag_auto: bool,
}

mod errors {
    use error_chain::*;
    error_chain! {
        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: MinesArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let dim = args.flag_size;
    if args.flag_bombs >= dim * dim {
        bail!("bomb count must be less than the number of cells ({})", dim * dim);
    }

    let mut rng = rand::thread_rng();
    let board = Board::generate(Dimension(dim), BombCount(args.flag_bombs), &mut rng);
    let mut view = View::new(Dimension(dim));

    if args.flag_auto {
        auto_play(&board, &mut view, &mut rng);
        return Ok(());
    }

    println!("=== Minesweeper ===");
    println!("{}", HELP_TEXT);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}> ", view.render_text());
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            None => println!("Could not parse that; use `r c`, `m r c` or `q`."),
            Some(MinesCommand::Quit) => {
                println!("Quit");
                return Ok(());
            }
            Some(MinesCommand::Mark(row, col)) => {
                let (row, col) = match checked_coordinates(row, col, dim) {
                    Some(pair) => pair,
                    None => {
                        println!("Coordinates out of range");
                        continue;
                    }
                };
                if !view.toggle_flag(row, col) {
                    println!("That cell is already revealed and cannot be flagged");
                }
            }
            Some(MinesCommand::Reveal(row, col)) => {
                let (row, col) = match checked_coordinates(row, col, dim) {
                    Some(pair) => pair,
                    None => {
                        println!("Coordinates out of range");
                        continue;
                    }
                };
                view.reveal(&board, row, col);
                if view.tile(row, col) == Tile::Exploded {
                    view.expose_bombs(&board);
                    println!("{}\nYou stepped on a bomb! Game over", view.render_text());
                    return Ok(());
                }
                if view.is_won(&board) {
                    view.expose_bombs(&board);
                    println!("{}\nYou win!", view.render_text());
                    return Ok(());
                }
            }
        }
    }
}

/// Reveal cells in a random order until a bomb goes off or the board is cleared.
fn auto_play<R: Rng>(board: &Board, view: &mut View, rng: &mut R) {
    let dim = board.dimension();
    let mut cells: Vec<(usize, usize)> = (0..dim)
        .flat_map(|row| (0..dim).map(move |col| (row, col)))
        .collect();
    rng.shuffle(&mut cells);

    for (row, col) in cells {
        view.reveal(board, row, col);
        if view.tile(row, col) == Tile::Exploded {
            view.expose_bombs(board);
            println!("{}\nYou stepped on a bomb! Game over", view.render_text());
            return;
        }
        if view.is_won(board) {
            view.expose_bombs(board);
            println!("{}\nYou win!", view.render_text());
            return;
        }
    }
    println!("{}\nAuto mode finished", view.render_text());
}

fn checked_coordinates(row: i64, col: i64, dim: usize) -> Option<(usize, usize)> {
    if row >= 0 && (row as usize) < dim && col >= 0 && (col as usize) < dim {
        Some((row as usize, col as usize))
    } else {
        None
    }
}

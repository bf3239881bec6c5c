use docopt::Docopt;
use error_chain::bail;
use serde_derive::Deserialize;

use gridgames::{
    game::{self, GameState, MazeGame},
    input::{LineBufferedInput, RawTerminalInput},
    renderers::{ColourMode, TerminalRenderer},
    units::Dimension,
};

use crossterm::tty::IsTty;
use std::io;

const USAGE: &str = "Maze walker

Generates a perfect maze and either lets you walk it or watches it solve itself.

Usage:
    maze_game [--size=<n>] [--demo] [--no-colour]
    maze_game -h | --help

Options:
    -h --help        Show this screen.
    -n --size=<n>    Maze side length for an n x n grid, minimum 3 [default: 15].
    --demo           Run the auto-solve demo instead of playing interactively.
    --no-colour      Plain output even on colour-capable terminals.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_size: usize,
    flag_demo: bool,
    flag_no_colour: bool,
}

mod errors {
    use error_chain::*;
    error_chain! {
        links {
            Game(::gridgames::errors::Error, ::gridgames::errors::ErrorKind);
        }
        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    if args.flag_size < 3 {
        bail!("--size must be at least 3, got {}", args.flag_size);
    }

    let mut rng = rand::thread_rng();
    let maze = game::build_solvable_maze(Dimension(args.flag_size), &mut rng)?;

    // Colour capability is decided once here, never re-checked per line.
    let colour = if args.flag_no_colour || !io::stdout().is_tty() {
        ColourMode::Plain
    } else {
        ColourMode::Coloured
    };
    let mut renderer = TerminalRenderer::new(io::stdout(), colour);

    if args.flag_demo {
        let steps = game::run_demo(&maze, &mut renderer)?;
        println!("Demo reached end in {} steps", steps);
        return Ok(());
    }

    let mut maze_game = MazeGame::new(maze.grid, maze.start, maze.end);
    println!("Use WASD or arrow keys to move. Press q to quit.");

    // Prefer immediate keypresses; fall back to line buffered input (Enter after
    // each command) when the terminal refuses raw mode.
    let final_state = match RawTerminalInput::activate() {
        Ok(mut raw_input) => game::play_interactive(&mut maze_game, &mut raw_input, &mut renderer)?,
        Err(_) => {
            let stdin = io::stdin();
            let mut line_input = LineBufferedInput::new(stdin.lock());
            game::play_interactive(&mut maze_game, &mut line_input, &mut renderer)?
        }
    };

    match final_state {
        GameState::Won => println!("You reached the end in {} steps!", maze_game.steps()),
        GameState::Quit => println!("Quit"),
        GameState::Playing => unreachable!("interactive loop only returns terminal states"),
    }

    Ok(())
}

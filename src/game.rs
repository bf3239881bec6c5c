use rand::Rng;

use crate::cells::{self, GridCoordinate, GridDirection};
use crate::errors::*;
use crate::generators;
use crate::grid::SquareGrid;
use crate::input::{Command, InputProvider};
use crate::pathing;
use crate::placement;
use crate::renderers::{Frame, Renderer};
use crate::units::Dimension;

/// Full regenerations attempted before giving up on producing a solvable maze.
pub const GENERATION_ATTEMPTS: usize = 10;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GameState {
    Playing,
    Won,
    Quit,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum MoveOutcome {
    Moved,
    /// Target cell out of bounds or a wall; the step still counts.
    Blocked,
}

/// A generated maze together with its verified solution path.
#[derive(Debug)]
pub struct GeneratedMaze {
    pub grid: SquareGrid,
    pub start: GridCoordinate,
    pub end: GridCoordinate,
    pub path: Vec<GridCoordinate>,
}

/// Generate a maze, place the start/end openings and verify reachability.
///
/// The generator guarantees connectivity, so an unreachable end can only really
/// happen through a construction bug; rather than silently playing an unsolvable
/// maze the whole construction is retried from scratch a bounded number of times
/// and then surfaced as a fatal error.
pub fn build_solvable_maze<R: Rng>(dimension: Dimension, rng: &mut R) -> Result<GeneratedMaze> {
    for _ in 0..GENERATION_ATTEMPTS {
        let mut grid = generators::recursive_backtracker(dimension, rng);
        let (start, end) = placement::place_start_end(&mut grid, rng);
        if let Some(path) = pathing::find_path(&grid, start, end) {
            return Ok(GeneratedMaze {
                grid,
                start,
                end,
                path,
            });
        }
    }
    Err(ErrorKind::GenerationFailed(GENERATION_ATTEMPTS).into())
}

/// The interactive maze walk state machine.
///
/// Owns the player position and the step counter. Every directional command
/// increments the counter whether or not the move is accepted; a move into a wall
/// or out of bounds is a countable no-op turn, not an error.
#[derive(Debug)]
pub struct MazeGame {
    grid: SquareGrid,
    start: GridCoordinate,
    end: GridCoordinate,
    player: GridCoordinate,
    steps: usize,
    state: GameState,
}

impl MazeGame {
    pub fn new(grid: SquareGrid, start: GridCoordinate, end: GridCoordinate) -> MazeGame {
        MazeGame {
            grid,
            start,
            end,
            player: start,
            steps: 0,
            state: GameState::Playing,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn player(&self) -> GridCoordinate {
        self.player
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn frame(&self) -> Frame {
        Frame {
            grid: &self.grid,
            start: self.start,
            end: self.end,
            player: Some(self.player),
            steps: self.steps,
        }
    }

    /// Attempt a directional move. The step counter increments unconditionally;
    /// the position only changes when the target cell is an in-bounds passage.
    pub fn apply_move(&mut self, direction: GridDirection) -> MoveOutcome {
        self.steps += 1;
        let target = match cells::offset_coordinate(self.player, direction) {
            Some(coord) if self.grid.is_passage(coord) => coord,
            _ => return MoveOutcome::Blocked,
        };
        self.player = target;
        if self.player == self.end {
            self.state = GameState::Won;
        }
        MoveOutcome::Moved
    }

    pub fn quit(&mut self) {
        self.state = GameState::Quit;
    }
}

/// Drive the interactive game until it is won or quit, rendering after every
/// state change. Unrecognized input re-prompts without rendering or counting.
pub fn play_interactive<I, R>(game: &mut MazeGame, input: &mut I, renderer: &mut R)
                              -> Result<GameState>
    where I: InputProvider,
          R: Renderer
{
    renderer.frame(&game.frame())?;
    while game.state() == GameState::Playing {
        match input.next_command()? {
            Command::Noop => continue,
            Command::Quit => game.quit(),
            Command::Move(direction) => {
                game.apply_move(direction);
                renderer.frame(&game.frame())?;
            }
        }
    }
    Ok(game.state())
}

/// Replay a found path cell by cell with an increasing step counter starting at 0.
/// Returns the final step count: path length minus one, the number of moves.
pub fn run_demo<R>(maze: &GeneratedMaze, renderer: &mut R) -> Result<usize>
    where R: Renderer
{
    for (steps, position) in maze.path.iter().enumerate() {
        renderer.frame(&Frame {
            grid: &maze.grid,
            start: maze.start,
            end: maze.end,
            player: Some(*position),
            steps,
        })?;
    }
    Ok(maze.path.len().saturating_sub(1))
}

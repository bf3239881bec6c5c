//! **gridgames** is a pair of terminal grid games: a perfect-maze walker and a minesweeper.
//!
//! The maze half carves a spanning-tree maze into an n x n grid, opens a start and end
//! cell on the boundary, verifies solvability with a breadth first search and then
//! drives either an interactive game loop or an auto-solve demo.

pub mod cells;
pub mod errors;
pub mod game;
pub mod generators;
pub mod grid;
pub mod input;
pub mod minesweeper;
pub mod pathing;
pub mod placement;
pub mod renderers;
pub mod units;
mod utils;

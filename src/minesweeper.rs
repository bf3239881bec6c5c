//! The secondary game: a small minesweeper with bomb placement, neighbour counts,
//! flood-fill reveal of zero-count regions, win checking and the free-text command
//! parser used by its interactive loop.

use itertools::Itertools;
use rand::Rng;
use std::fmt;

use crate::units::{BombCount, Dimension};

const BOMB: i8 = -1;

/// The hidden answer board: -1 for a bomb, otherwise the 8-neighbour bomb count.
#[derive(Clone, Debug)]
pub struct Board {
    cells: Vec<i8>,
    dimension: usize,
}

impl Board {
    /// Place `bombs` distinct bombs uniformly at random, then fill every other
    /// cell with its neighbour count. `bombs` must be less than the cell count.
    pub fn generate<R: Rng>(dimension: Dimension, bombs: BombCount, rng: &mut R) -> Board {
        let Dimension(dim) = dimension;
        let BombCount(bomb_count) = bombs;
        assert!(bomb_count < dim * dim, "bomb count must be less than the cell count");

        let mut cells = vec![0i8; dim * dim];
        let all_positions = (0..dim).flat_map(|row| (0..dim).map(move |col| (row, col)));
        for (row, col) in rand::sample(rng, all_positions, bomb_count) {
            cells[row * dim + col] = BOMB;
        }

        let mut board = Board { cells, dimension: dim };
        for row in 0..dim {
            for col in 0..dim {
                if !board.is_bomb(row, col) {
                    let count = board
                        .neighbours8(row, col)
                        .iter()
                        .filter(|&&(nr, nc)| board.is_bomb(nr, nc))
                        .count();
                    board.cells[row * dim + col] = count as i8;
                }
            }
        }
        board
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn is_bomb(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.dimension + col] == BOMB
    }

    /// Neighbour bomb count for a non-bomb cell.
    pub fn count(&self, row: usize, col: usize) -> u8 {
        let value = self.cells[row * self.dimension + col];
        debug_assert!(value >= 0, "count requested for a bomb cell");
        value as u8
    }

    fn neighbours8(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        let dim = self.dimension as isize;
        let mut neighbours = Vec::with_capacity(8);
        for row_delta in -1..2 {
            for col_delta in -1..2 {
                if row_delta == 0 && col_delta == 0 {
                    continue;
                }
                let (nr, nc) = (row as isize + row_delta, col as isize + col_delta);
                if nr >= 0 && nr < dim && nc >= 0 && nc < dim {
                    neighbours.push((nr as usize, nc as usize));
                }
            }
        }
        neighbours
    }

    #[cfg(test)]
    fn from_cells(dimension: usize, cells: Vec<i8>) -> Board {
        assert_eq!(cells.len(), dimension * dimension);
        Board { cells, dimension }
    }
}

/// What the player sees for one cell.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Tile {
    Hidden,
    Flagged,
    Revealed(u8),
    Exploded,
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Tile::Hidden => write!(f, "."),
            Tile::Flagged => write!(f, "x"),
            Tile::Revealed(0) => write!(f, " "),
            Tile::Revealed(count) => write!(f, "{}", count),
            Tile::Exploded => write!(f, "!"),
        }
    }
}

/// The player-visible board state.
#[derive(Clone, Debug)]
pub struct View {
    tiles: Vec<Tile>,
    dimension: usize,
}

impl View {
    pub fn new(dimension: Dimension) -> View {
        let Dimension(dim) = dimension;
        View {
            tiles: vec![Tile::Hidden; dim * dim],
            dimension: dim,
        }
    }

    pub fn tile(&self, row: usize, col: usize) -> Tile {
        self.tiles[row * self.dimension + col]
    }

    fn set(&mut self, row: usize, col: usize, tile: Tile) {
        self.tiles[row * self.dimension + col] = tile;
    }

    /// Reveal a cell. Flagged and already revealed cells are left alone. A bomb
    /// explodes; a positive count shows the digit; a zero-count cell flood-fills
    /// the contiguous zero region (4-directional) plus its numbered frontier.
    pub fn reveal(&mut self, board: &Board, row: usize, col: usize) {
        if self.tile(row, col) != Tile::Hidden {
            return;
        }
        if board.is_bomb(row, col) {
            self.set(row, col, Tile::Exploded);
            return;
        }
        let count = board.count(row, col);
        if count > 0 {
            self.set(row, col, Tile::Revealed(count));
            return;
        }

        // Flood fill on an explicit stack.
        let mut stack = vec![(row, col)];
        while let Some((r, c)) = stack.pop() {
            if self.tile(r, c) != Tile::Hidden {
                continue;
            }
            self.set(r, c, Tile::Revealed(0));
            for &(nr, nc) in &four_neighbours(r, c, self.dimension) {
                if self.tile(nr, nc) != Tile::Hidden || board.is_bomb(nr, nc) {
                    continue;
                }
                match board.count(nr, nc) {
                    0 => stack.push((nr, nc)),
                    frontier => self.set(nr, nc, Tile::Revealed(frontier)),
                }
            }
        }
    }

    /// Toggle a flag. Returns false when the cell is already revealed and
    /// cannot be flagged.
    pub fn toggle_flag(&mut self, row: usize, col: usize) -> bool {
        match self.tile(row, col) {
            Tile::Hidden => {
                self.set(row, col, Tile::Flagged);
                true
            }
            Tile::Flagged => {
                self.set(row, col, Tile::Hidden);
                true
            }
            Tile::Revealed(_) | Tile::Exploded => false,
        }
    }

    /// The game is won when every non-bomb cell has been revealed.
    pub fn is_won(&self, board: &Board) -> bool {
        for row in 0..self.dimension {
            for col in 0..self.dimension {
                let unrevealed = match self.tile(row, col) {
                    Tile::Revealed(_) => false,
                    _ => true,
                };
                if !board.is_bomb(row, col) && unrevealed {
                    return false;
                }
            }
        }
        true
    }

    /// Show every bomb, done once the game ends either way.
    pub fn expose_bombs(&mut self, board: &Board) {
        for row in 0..self.dimension {
            for col in 0..self.dimension {
                if board.is_bomb(row, col) {
                    self.set(row, col, Tile::Exploded);
                }
            }
        }
    }

    /// Text rendering with a column header row and row labels, every cell padded
    /// to a fixed width.
    pub fn render_text(&self) -> String {
        let dim = self.dimension;
        let width = digits(dim.saturating_sub(1)).max(2);

        let header = (0..dim).map(|col| format!("{:>w$}", col, w = width)).join(" ");
        let mut out = format!("{:w$}  {}\n", "", header, w = width);
        for row in 0..dim {
            let tiles = (0..dim)
                .map(|col| format!("{:>w$}", self.tile(row, col).to_string(), w = width))
                .join(" ");
            out.push_str(&format!("{:>w$}  {}\n", row, tiles, w = width));
        }
        out
    }
}

fn digits(value: usize) -> usize {
    value.to_string().len()
}

fn four_neighbours(row: usize, col: usize, dimension: usize) -> Vec<(usize, usize)> {
    let mut neighbours = Vec::with_capacity(4);
    if row > 0 {
        neighbours.push((row - 1, col));
    }
    if row + 1 < dimension {
        neighbours.push((row + 1, col));
    }
    if col > 0 {
        neighbours.push((row, col - 1));
    }
    if col + 1 < dimension {
        neighbours.push((row, col + 1));
    }
    neighbours
}

/// A parsed player command. Coordinates are raw signed values; bounds checking is
/// left to the caller so that out-of-range input gets its own message.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum MinesCommand {
    Reveal(i64, i64),
    Mark(i64, i64),
    Quit,
}

/// Parse one line of player input.
///
/// `q` quits. A leading `m`/`M` marks: coordinates are accepted spaced (`m 1 2`),
/// comma or punctuation separated (`m1,2`, `m:1,2`) or as a compact two-digit pair
/// (`m12`, only unambiguous for single-digit indices). Anything else must be two
/// whitespace-separated integers naming a cell to reveal. None means unparseable.
pub fn parse_command(line: &str) -> Option<MinesCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.eq_ignore_ascii_case("q") {
        return Some(MinesCommand::Quit);
    }

    if trimmed.starts_with('m') || trimmed.starts_with('M') {
        let after = trimmed[1..].trim();

        let numbers = extract_integers(after);
        if numbers.len() >= 2 {
            return Some(MinesCommand::Mark(numbers[0], numbers[1]));
        }

        // Compact two-digit form like `12` meaning row 1, column 2.
        let compact: String = after.chars().filter(|ch| ch.is_ascii_digit()).collect();
        if compact.len() == 2 {
            let mut digits = compact.chars();
            let row = digits.next().and_then(|d| d.to_digit(10))?;
            let col = digits.next().and_then(|d| d.to_digit(10))?;
            return Some(MinesCommand::Mark(i64::from(row), i64::from(col)));
        }
        return None;
    }

    let mut parts = trimmed.split_whitespace();
    let row = parts.next()?.parse::<i64>().ok()?;
    let col = parts.next()?.parse::<i64>().ok()?;
    Some(MinesCommand::Reveal(row, col))
}

/// Scan out every (optionally negative) integer in the text, ignoring any other
/// characters between them.
fn extract_integers(text: &str) -> Vec<i64> {
    let mut numbers = vec![];
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        let negative = ch == '-';
        if !negative && !ch.is_ascii_digit() {
            continue;
        }
        if negative && !chars.peek().map_or(false, |next| next.is_ascii_digit()) {
            continue;
        }
        let mut value: i64 = if negative {
            0
        } else {
            i64::from(ch.to_digit(10).expect("checked ascii digit"))
        };
        while let Some(&next) = chars.peek() {
            if let Some(digit) = next.to_digit(10) {
                value = value * 10 + i64::from(digit);
                chars.next();
            } else {
                break;
            }
        }
        numbers.push(if negative { -value } else { value });
    }
    numbers
}

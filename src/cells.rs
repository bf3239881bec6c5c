use smallvec::SmallVec;
use std::convert::From;

/// The state of a single grid cell: traversable passage or blocking wall.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellState {
    Passage,
    Wall,
}

/// A 0-indexed (row, column) position on a square grid.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub row: usize,
    pub col: usize,
}
impl GridCoordinate {
    pub fn new(row: usize, col: usize) -> GridCoordinate {
        GridCoordinate { row, col }
    }
}
impl From<(usize, usize)> for GridCoordinate {
    fn from(row_col_pair: (usize, usize)) -> GridCoordinate {
        GridCoordinate::new(row_col_pair.0, row_col_pair.1)
    }
}

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GridDirection {
    North,
    South,
    East,
    West,
}

pub const ALL_DIRECTIONS: [GridDirection; 4] = [
    GridDirection::North,
    GridDirection::South,
    GridDirection::East,
    GridDirection::West,
];

/// Creates a new `GridCoordinate` offset 1 cell away in the given direction.
/// Returns None if the coordinate is not representable (stepping off the zero edges).
/// Stepping beyond the south/east sides is representable and left to grid bounds checks.
pub fn offset_coordinate(coord: GridCoordinate, dir: GridDirection) -> Option<GridCoordinate> {
    let GridCoordinate { row, col } = coord;
    match dir {
        GridDirection::North => {
            if row > 0 {
                Some(GridCoordinate::new(row - 1, col))
            } else {
                None
            }
        }
        GridDirection::South => Some(GridCoordinate::new(row + 1, col)),
        GridDirection::East => Some(GridCoordinate::new(row, col + 1)),
        GridDirection::West => {
            if col > 0 {
                Some(GridCoordinate::new(row, col - 1))
            } else {
                None
            }
        }
    }
}

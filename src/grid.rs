use itertools::Itertools;

use crate::cells::{offset_coordinate, CellState, CoordinateSmallVec, GridCoordinate,
                   GridDirection, ALL_DIRECTIONS};
use crate::units::Dimension;
use crate::utils;

/// An n x n matrix of cell states.
///
/// The maze invariant is that the outer ring (row 0, row n-1, column 0, column n-1)
/// stays `Wall` except where explicitly opened for the start and end cells. The grid
/// is created once per game and only mutated by maze carving and those two boundary
/// openings.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct SquareGrid {
    cells: Vec<CellState>,
    dimension: usize,
}

impl SquareGrid {
    pub fn new(dimension: Dimension, initial_state: CellState) -> SquareGrid {
        let Dimension(dim) = dimension;
        SquareGrid {
            cells: vec![initial_state; dim * dim],
            dimension: dim,
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn size(&self) -> usize {
        self.dimension * self.dimension
    }

    pub fn cell(&self, coord: GridCoordinate) -> Option<CellState> {
        if self.is_valid_coordinate(&coord) {
            Some(self.cells[self.cell_index(&coord)])
        } else {
            None
        }
    }

    /// Is the cell at this coordinate a passage? Out of bounds coordinates are not.
    pub fn is_passage(&self, coord: GridCoordinate) -> bool {
        self.cell(coord) == Some(CellState::Passage)
    }

    /// Set the state of a cell. Out of bounds coordinates are ignored.
    pub fn set(&mut self, coord: GridCoordinate, state: CellState) {
        if self.is_valid_coordinate(&coord) {
            let index = self.cell_index(&coord);
            self.cells[index] = state;
        }
    }

    pub fn is_valid_coordinate(&self, coord: &GridCoordinate) -> bool {
        coord.row < self.dimension && coord.col < self.dimension
    }

    pub fn is_boundary(&self, coord: &GridCoordinate) -> bool {
        coord.row == 0 || coord.row == self.dimension - 1 || coord.col == 0 ||
        coord.col == self.dimension - 1
    }

    pub fn is_corner(&self, coord: &GridCoordinate) -> bool {
        let edge = self.dimension - 1;
        (coord.row == 0 || coord.row == edge) && (coord.col == 0 || coord.col == edge)
    }

    /// Cells that are to the North, South, East or West of a particular cell
    /// and inside the grid, regardless of their state.
    pub fn neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        ALL_DIRECTIONS
            .iter()
            .filter_map(|&dir| self.neighbour_at_direction(&coord, dir))
            .collect()
    }

    pub fn neighbour_at_direction(&self,
                                  coord: &GridCoordinate,
                                  direction: GridDirection)
                                  -> Option<GridCoordinate> {
        offset_coordinate(*coord, direction).filter(|adjacent| self.is_valid_coordinate(adjacent))
    }

    /// Set the entire outer ring to `Wall`.
    pub fn seal_boundary(&mut self) {
        if self.dimension == 0 {
            return;
        }
        let edge = self.dimension - 1;
        for i in 0..self.dimension {
            self.set(GridCoordinate::new(0, i), CellState::Wall);
            self.set(GridCoordinate::new(edge, i), CellState::Wall);
            self.set(GridCoordinate::new(i, 0), CellState::Wall);
            self.set(GridCoordinate::new(i, edge), CellState::Wall);
        }
    }

    /// All outer ring coordinates, deduplicated and in a deterministic order.
    pub fn boundary_coordinates(&self) -> Vec<GridCoordinate> {
        if self.dimension == 0 {
            return vec![];
        }
        let edge = self.dimension - 1;
        let mut positions = utils::fnv_hashset(4 * self.dimension);
        for i in 0..self.dimension {
            positions.insert(GridCoordinate::new(0, i));
            positions.insert(GridCoordinate::new(edge, i));
            positions.insert(GridCoordinate::new(i, 0));
            positions.insert(GridCoordinate::new(i, edge));
        }
        positions.into_iter().sorted()
    }

    pub fn iter(&self) -> CellIter {
        CellIter {
            current_cell_number: 0,
            dimension: self.dimension,
            cells_count: self.size(),
        }
    }

    fn cell_index(&self, coord: &GridCoordinate) -> usize {
        coord.row * self.dimension + coord.col
    }
}

impl<'a> IntoIterator for &'a SquareGrid {
    type Item = GridCoordinate;
    type IntoIter = CellIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Row major iterator over all the coordinates of a grid.
#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    dimension: usize,
    cells_count: usize,
}
impl Iterator for CellIter {
    type Item = GridCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let row = self.current_cell_number / self.dimension;
            let col = self.current_cell_number % self.dimension;
            self.current_cell_number += 1;
            Some(GridCoordinate::new(row, col))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells_count - self.current_cell_number;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use itertools::Itertools;

    fn gc(row: usize, col: usize) -> GridCoordinate {
        GridCoordinate::new(row, col)
    }

    #[test]
    fn grid_size_and_dimension() {
        let g = SquareGrid::new(Dimension(10), CellState::Wall);
        assert_eq!(g.dimension(), 10);
        assert_eq!(g.size(), 100);
    }

    #[test]
    fn cell_access_and_mutation() {
        let mut g = SquareGrid::new(Dimension(4), CellState::Wall);
        assert_eq!(g.cell(gc(1, 2)), Some(CellState::Wall));
        g.set(gc(1, 2), CellState::Passage);
        assert_eq!(g.cell(gc(1, 2)), Some(CellState::Passage));
        assert!(g.is_passage(gc(1, 2)));
        assert!(!g.is_passage(gc(1, 3)));
    }

    #[test]
    fn out_of_bounds_cells() {
        let mut g = SquareGrid::new(Dimension(4), CellState::Wall);
        assert_eq!(g.cell(gc(4, 0)), None);
        assert_eq!(g.cell(gc(0, 4)), None);
        assert!(!g.is_passage(gc(99, 99)));
        // setting out of bounds is a no-op rather than a panic
        g.set(gc(99, 99), CellState::Passage);
        assert_eq!(g.cell(gc(99, 99)), None);
    }

    #[test]
    fn neighbour_cells() {
        let g = SquareGrid::new(Dimension(10), CellState::Wall);

        let check_expected_neighbours = |coord, expected_neighbours: &[GridCoordinate]| {
            let neighbours: Vec<GridCoordinate> = g.neighbours(coord).iter().cloned().sorted();
            let expected: Vec<GridCoordinate> = expected_neighbours.iter().cloned().sorted();
            assert_eq!(neighbours, expected);
        };

        // corners
        check_expected_neighbours(gc(0, 0), &[gc(1, 0), gc(0, 1)]);
        check_expected_neighbours(gc(0, 9), &[gc(0, 8), gc(1, 9)]);
        check_expected_neighbours(gc(9, 0), &[gc(8, 0), gc(9, 1)]);
        check_expected_neighbours(gc(9, 9), &[gc(8, 9), gc(9, 8)]);

        // side elements
        check_expected_neighbours(gc(0, 1), &[gc(0, 0), gc(0, 2), gc(1, 1)]);
        check_expected_neighbours(gc(8, 0), &[gc(7, 0), gc(9, 0), gc(8, 1)]);

        // somewhere with 4 neighbours inside the grid
        check_expected_neighbours(gc(1, 1), &[gc(0, 1), gc(1, 0), gc(2, 1), gc(1, 2)]);
    }

    #[test]
    fn neighbour_at_dir() {
        let g = SquareGrid::new(Dimension(2), CellState::Wall);
        let check_neighbour = |coord, dir: GridDirection, expected| {
            assert_eq!(g.neighbour_at_direction(&coord, dir), expected);
        };
        check_neighbour(gc(0, 0), GridDirection::North, None);
        check_neighbour(gc(0, 0), GridDirection::West, None);
        check_neighbour(gc(0, 0), GridDirection::South, Some(gc(1, 0)));
        check_neighbour(gc(0, 0), GridDirection::East, Some(gc(0, 1)));

        check_neighbour(gc(1, 1), GridDirection::South, None);
        check_neighbour(gc(1, 1), GridDirection::East, None);
        check_neighbour(gc(1, 1), GridDirection::North, Some(gc(0, 1)));
        check_neighbour(gc(1, 1), GridDirection::West, Some(gc(1, 0)));
    }

    #[test]
    fn boundary_and_corner_queries() {
        let g = SquareGrid::new(Dimension(5), CellState::Wall);
        assert!(g.is_boundary(&gc(0, 2)));
        assert!(g.is_boundary(&gc(4, 2)));
        assert!(g.is_boundary(&gc(2, 0)));
        assert!(g.is_boundary(&gc(2, 4)));
        assert!(!g.is_boundary(&gc(2, 2)));

        assert!(g.is_corner(&gc(0, 0)));
        assert!(g.is_corner(&gc(0, 4)));
        assert!(g.is_corner(&gc(4, 0)));
        assert!(g.is_corner(&gc(4, 4)));
        assert!(!g.is_corner(&gc(0, 2)));
    }

    #[test]
    fn boundary_coordinates_deduplicated_without_any_interior() {
        let g = SquareGrid::new(Dimension(4), CellState::Wall);
        let boundary = g.boundary_coordinates();
        assert_eq!(boundary.len(), 12); // 4*4 - 2*2 interior cells
        assert_eq!(boundary.iter().cloned().unique().count(), boundary.len());
        assert!(boundary.iter().all(|coord| g.is_boundary(coord)));
    }

    #[test]
    fn seal_boundary_resets_ring_only() {
        let mut g = SquareGrid::new(Dimension(4), CellState::Passage);
        g.seal_boundary();
        for coord in g.iter() {
            if g.is_boundary(&coord) {
                assert_eq!(g.cell(coord), Some(CellState::Wall));
            } else {
                assert_eq!(g.cell(coord), Some(CellState::Passage));
            }
        }
    }

    #[test]
    fn cell_iter_row_major() {
        let g = SquareGrid::new(Dimension(2), CellState::Wall);
        assert_eq!(g.iter().collect::<Vec<GridCoordinate>>(),
                   &[gc(0, 0), gc(0, 1), gc(1, 0), gc(1, 1)]);
    }
}

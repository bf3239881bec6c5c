use rand::Rng;

use crate::cells::{CellState, GridCoordinate};
use crate::grid::SquareGrid;

/// Choose distinct non-corner boundary cells as the maze start and end, carving
/// each one open into the interior passage network where needed.
///
/// Both choices are uniform over the deduplicated non-corner boundary set; the end
/// cell is re-drawn until it differs from the start. Mutates the grid in place:
/// a boundary cell that is still `Wall` is flipped to `Passage` along with its single
/// inward neighbour, guaranteeing the opening connects to the interior.
pub fn place_start_end<R: Rng>(grid: &mut SquareGrid,
                               rng: &mut R)
                               -> (GridCoordinate, GridCoordinate) {
    let positions: Vec<GridCoordinate> = grid.boundary_coordinates()
        .into_iter()
        .filter(|coord| !grid.is_corner(coord))
        .collect();

    let start = *rng.choose(&positions).expect("no non-corner boundary cells");
    let mut end = *rng.choose(&positions).expect("no non-corner boundary cells");
    while end == start {
        end = *rng.choose(&positions).expect("no non-corner boundary cells");
    }

    open_to_interior(grid, start);
    open_to_interior(grid, end);

    (start, end)
}

/// If the boundary cell is a wall (the default after generation), carve it and the
/// cell one step inward to `Passage`.
fn open_to_interior(grid: &mut SquareGrid, coord: GridCoordinate) {
    if grid.is_passage(coord) {
        return;
    }
    let inward = inward_neighbour(grid, coord);
    grid.set(inward, CellState::Passage);
    grid.set(coord, CellState::Passage);
}

/// The interior cell one step inward from a non-corner boundary cell, determined
/// by which edge the cell lies on.
fn inward_neighbour(grid: &SquareGrid, coord: GridCoordinate) -> GridCoordinate {
    let edge = grid.dimension() - 1;
    let GridCoordinate { row, col } = coord;
    if row == 0 {
        GridCoordinate::new(row + 1, col)
    } else if row == edge {
        GridCoordinate::new(row - 1, col)
    } else if col == 0 {
        GridCoordinate::new(row, col + 1)
    } else {
        debug_assert_eq!(col, edge);
        GridCoordinate::new(row, col - 1)
    }
}

#[cfg(test)]
mod tests {

    use rand::{SeedableRng, XorShiftRng};

    use super::*;
    use crate::generators;
    use crate::pathing;
    use crate::units::Dimension;

    fn seeded_rng(seed: u32) -> XorShiftRng {
        XorShiftRng::from_seed([seed, 7, 11, 13])
    }

    #[test]
    fn start_and_end_are_distinct_non_corner_boundary_passages() {
        for seed in 1..50 {
            let mut rng = seeded_rng(seed);
            let mut grid = generators::recursive_backtracker(Dimension(7), &mut rng);
            let (start, end) = place_start_end(&mut grid, &mut rng);

            assert_ne!(start, end);
            assert!(grid.is_boundary(&start) && !grid.is_corner(&start));
            assert!(grid.is_boundary(&end) && !grid.is_corner(&end));
            assert!(grid.is_passage(start));
            assert!(grid.is_passage(end));
        }
    }

    #[test]
    fn openings_connect_into_the_maze() {
        for seed in 1..50 {
            let mut rng = seeded_rng(200 + seed);
            let mut grid = generators::recursive_backtracker(Dimension(9), &mut rng);
            let (start, end) = place_start_end(&mut grid, &mut rng);
            assert!(pathing::find_path(&grid, start, end).is_some(),
                    "no path between placed start {:?} and end {:?}", start, end);
        }
    }

    #[test]
    fn only_boundary_openings_change_the_grid() {
        let mut rng = seeded_rng(99);
        let mut grid = generators::recursive_backtracker(Dimension(9), &mut rng);
        let before = grid.clone();
        let (start, end) = place_start_end(&mut grid, &mut rng);

        let changed: Vec<_> = grid.iter()
            .filter(|&coord| grid.cell(coord) != before.cell(coord))
            .collect();
        // At most the two boundary cells plus their inward neighbours flip.
        assert!(changed.len() <= 4, "unexpected cells changed: {:?}", changed);
        for coord in &changed {
            let is_opening = *coord == start || *coord == end;
            let is_inward = *coord == inward_neighbour(&grid, start) ||
                            *coord == inward_neighbour(&grid, end);
            assert!(is_opening || is_inward);
        }
    }

    #[test]
    fn smallest_supported_grid_placement() {
        // 3x3 has exactly one odd interior node; every opening must reach it.
        for seed in 1..20 {
            let mut rng = seeded_rng(300 + seed);
            let mut grid = generators::recursive_backtracker(Dimension(3), &mut rng);
            let (start, end) = place_start_end(&mut grid, &mut rng);
            let path = pathing::find_path(&grid, start, end).expect("3x3 maze unsolvable");
            assert!(path.contains(&GridCoordinate::new(1, 1)));
        }
    }
}

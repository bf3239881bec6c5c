use std::collections::VecDeque;

use crate::cells::GridCoordinate;
use crate::grid::SquareGrid;
use crate::utils;
use crate::utils::FnvHashMap;

/// Breadth first search from `start` to `end` over 4-directionally adjacent passage
/// cells, recording a predecessor map and reconstructing the path on arrival.
///
/// Returns None when `end` is never reached (or either endpoint is not a passage);
/// that is the failure signal the maze construction retry policy consumes.
///
/// On a spanning-tree maze the returned path is the only simple path between the two
/// cells. Opening boundary cells can add at most one extra edge each beyond the tree,
/// so the path stays shortest; strict uniqueness is an assumption inherited from the
/// carving construction, not something verified here.
pub fn find_path(grid: &SquareGrid,
                 start: GridCoordinate,
                 end: GridCoordinate)
                 -> Option<Vec<GridCoordinate>> {

    if !grid.is_passage(start) || !grid.is_passage(end) {
        return None;
    }

    let mut predecessors: FnvHashMap<GridCoordinate, Option<GridCoordinate>> =
        utils::fnv_hashmap(grid.size());
    predecessors.insert(start, None);

    let mut frontier = VecDeque::new();
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        if current == end {
            break;
        }
        for &neighbour in grid.neighbours(current).iter() {
            if grid.is_passage(neighbour) && !predecessors.contains_key(&neighbour) {
                predecessors.insert(neighbour, Some(current));
                frontier.push_back(neighbour);
            }
        }
    }

    if !predecessors.contains_key(&end) {
        return None;
    }

    let mut path = vec![end];
    let mut current = end;
    while let Some(&Some(previous)) = predecessors.get(&current) {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    Some(path)
}

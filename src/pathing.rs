use bit_set::BitSet;
use error_chain::bail;
use log::{debug, trace};

use crate::cells::{Cartesian2DCoordinate, CoordinateSmallVec, StepDistance};
use crate::errors::*;
use crate::grid::Grid;


/// Find a walkable route from `start` to `end` with a depth first search.
///
/// Neighbours are tried North, South, West then East and the search commits to the first
/// open one, backing up when it hits a dead end. If `end` is next to the cell being
/// explored the search stops there. The route returned is therefore *a* route, not
/// necessarily the shortest one; in a perfect maze there is only one anyway.
///
/// The path includes both `start` and `end`. Failures are returned as errors, never as a
/// partial path:
///
/// - `InvalidStart` / `InvalidEnd` if either coordinate is outside the grid
/// - `BlockedEnd` if `end` is a wall, detected before searching
/// - `NoPathExists` if every cell reachable from `start` was explored without finding `end`
pub fn depth_first_path(grid: &Grid,
                        start: Cartesian2DCoordinate,
                        end: Cartesian2DCoordinate)
                        -> Result<Vec<Cartesian2DCoordinate>> {

    let start_index = match grid.grid_coordinate_to_index(start) {
        Some(index) => index,
        None => bail!(ErrorKind::InvalidStart(start)),
    };
    match grid.is_wall(end) {
        None => bail!(ErrorKind::InvalidEnd(end)),
        Some(true) => bail!(ErrorKind::BlockedEnd(end)),
        Some(false) => {}
    }

    if start == end {
        return Ok(vec![start]);
    }

    let mut visited = BitSet::with_capacity(grid.size().0);
    visited.insert(start_index);
    let mut path = vec![start];

    while let Some(&current) = path.last() {

        let candidates = grid.neighbours(current, StepDistance::Unit)
            .into_iter()
            .filter(|&neighbour_coord| {
                grid.is_passage(neighbour_coord) &&
                grid.grid_coordinate_to_index(neighbour_coord)
                    .map_or(false, |index| !visited.contains(index))
            })
            .collect::<CoordinateSmallVec>();

        if candidates.contains(&end) {
            path.push(end);
            debug!("found path from {} to {} of {} cells, explored {} cells",
                   start,
                   end,
                   path.len(),
                   visited.len());
            return Ok(path);
        }

        if let Some(&next) = candidates.first() {
            if let Some(next_index) = grid.grid_coordinate_to_index(next) {
                visited.insert(next_index);
            }
            path.push(next);
        } else {
            trace!("dead end at {}", current);
            let _ = path.pop();
        }
    }

    debug!("no path from {} to {}, explored {} cells", start, end, visited.len());
    bail!(ErrorKind::NoPathExists(start, end))
}

/// Is `path` non empty, made only of passages and does each cell follow the previous one by a
/// single unit step?
pub fn is_walkable_path(grid: &Grid, path: &[Cartesian2DCoordinate]) -> bool {
    !path.is_empty() &&
    path.iter().all(|&coord| grid.is_passage(coord)) &&
    path.windows(2).all(|pair| pair[0].manhattan_distance(pair[1]) == 1)
}

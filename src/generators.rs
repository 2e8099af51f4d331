use bit_set::BitSet;
use error_chain::bail;
use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand::seq::SliceRandom;
use rand_xorshift::XorShiftRng;

use crate::cells::{Cartesian2DCoordinate, DirectionCoordinateSmallVec, StepDistance};
use crate::errors::*;
use crate::grid::Grid;
use crate::units::{Height, Width};


/// Build a `width` x `height` grid and carve a maze into it from the top left cell.
///
/// The same seed always produces the same maze.
pub fn generate(width: Width, height: Height, seed: u64) -> Result<Grid> {
    generate_from(width, height, Cartesian2DCoordinate::new(0, 0), seed)
}

/// As `generate` but carving starts from `start`.
pub fn generate_from(width: Width,
                     height: Height,
                     start: Cartesian2DCoordinate,
                     seed: u64)
                     -> Result<Grid> {
    let mut grid = Grid::new(width, height)?;
    let mut rng = XorShiftRng::seed_from_u64(seed);
    recursive_backtracker(&mut grid, start, &mut rng)?;
    Ok(grid)
}

/// Apply the recursive backtracker maze generation algorithm to an all wall grid.
///
/// Starting from `start` it performs a random walk over cells two steps apart, knocking
/// out the wall cell in between each time it moves. When the walk reaches a cell with no
/// unvisited neighbours it backs up along the walked path until it finds one that still has
/// unvisited neighbours. The walk ends when it has backed all the way out to `start`.
///
/// The result is a perfect maze: the passages form a tree rooted at `start`. Cells that cannot
/// be reached in steps of two from `start` (every other row and column) are only ever
/// opened as the wall between two carved cells, so a frame of walls stays around the maze
/// on the sides where the parity leaves one.
///
/// The walk keeps its own stack, so memory is bounded by the grid size rather than the
/// call stack.
pub fn recursive_backtracker<R>(grid: &mut Grid,
                                start: Cartesian2DCoordinate,
                                rng: &mut R)
                                -> Result<()>
    where R: Rng + ?Sized
{
    let start_index = match grid.grid_coordinate_to_index(start) {
        Some(index) => index,
        None => bail!(ErrorKind::InvalidStart(start)),
    };

    let mut visited = BitSet::with_capacity(grid.size().0);
    visited.insert(start_index);
    grid.open(start);

    let mut stack = vec![start];
    let mut carved_cells_count = 1;

    while let Some(&current) = stack.last() {

        let unvisited_neighbours = grid.neighbours_with_directions(current, StepDistance::MazeStep)
            .into_iter()
            .filter(|&(_, neighbour_coord)| {
                grid.grid_coordinate_to_index(neighbour_coord)
                    .map_or(false, |index| !visited.contains(index))
            })
            .collect::<DirectionCoordinateSmallVec>();

        if let Some(&(direction, next)) = unvisited_neighbours.choose(rng) {

            // The shared wall between the two cells always exists if the neighbour does.
            if let Some(midpoint) = grid.neighbour_at_direction(current,
                                                                direction,
                                                                StepDistance::Unit) {
                grid.open(midpoint);
            }
            grid.open(next);

            if let Some(next_index) = grid.grid_coordinate_to_index(next) {
                visited.insert(next_index);
            }
            carved_cells_count += 1;
            stack.push(next);

        } else {
            trace!("backtracking from {}", current);
            let _ = stack.pop();
        }
    }

    debug!("carved maze from {} visiting {} cells, {} of {} cells are passages",
           start,
           carved_cells_count,
           grid.passages_count(),
           grid.size().0);

    Ok(())
}

#[cfg(test)]
mod tests {

    use quickcheck::{quickcheck, TestResult};
    use rand::rngs::mock::StepRng;
    use std::collections::VecDeque;

    use super::*;

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    // Always yields zero, so every random choice picks the first candidate.
    fn first_choice_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    fn passages_as_text(grid: &Grid) -> Vec<String> {
        grid.iter_row()
            .map(|row| row.iter().map(|cell| if cell.is_wall() { '#' } else { '.' }).collect())
            .collect()
    }

    // Walk unit steps through passages from `start`, returning every passage reached.
    fn reachable_passages(grid: &Grid, start: Cartesian2DCoordinate) -> Vec<Cartesian2DCoordinate> {
        let mut seen = BitSet::with_capacity(grid.size().0);
        let mut frontier = VecDeque::new();
        let mut reached = vec![];
        if grid.is_passage(start) {
            seen.insert(grid.grid_coordinate_to_index(start).unwrap());
            frontier.push_back(start);
        }
        while let Some(coord) = frontier.pop_front() {
            reached.push(coord);
            for neighbour in grid.neighbours(coord, StepDistance::Unit).iter() {
                let index = grid.grid_coordinate_to_index(*neighbour).unwrap();
                if grid.is_passage(*neighbour) && seen.insert(index) {
                    frontier.push_back(*neighbour);
                }
            }
        }
        reached
    }

    // Count of unit step links between passage cells.
    fn passage_links_count(grid: &Grid) -> usize {
        grid.iter_passages()
            .map(|coord| {
                grid.neighbours(coord, StepDistance::Unit)
                    .iter()
                    .filter(|neighbour| grid.is_passage(**neighbour))
                    .count()
            })
            .sum::<usize>() / 2
    }

    #[test]
    fn five_by_five_golden_maze() {
        let mut g = Grid::new(Width(5), Height(5)).unwrap();
        recursive_backtracker(&mut g, gc(0, 0), &mut first_choice_rng()).unwrap();

        assert_eq!(passages_as_text(&g),
                   vec![".#...", ".#.#.", ".#.#.", ".#.#.", "...#."]);
        assert_eq!(g.passages_count(), 17);
        assert_eq!(reachable_passages(&g, gc(0, 0)).len(), 17);
    }

    #[test]
    fn start_outside_grid_is_rejected() {
        let mut g = Grid::new(Width(3), Height(3)).unwrap();
        let result = recursive_backtracker(&mut g, gc(3, 0), &mut first_choice_rng());
        match result {
            Err(Error(ErrorKind::InvalidStart(coord), _)) => assert_eq!(coord, gc(3, 0)),
            other => panic!("expected InvalidStart, got {:?}", other),
        }
        assert_eq!(g.passages_count(), 0);
    }

    #[test]
    fn single_cell_grid_only_opens_start() {
        let mut g = Grid::new(Width(1), Height(1)).unwrap();
        recursive_backtracker(&mut g, gc(0, 0), &mut first_choice_rng()).unwrap();
        assert_eq!(g.passages_count(), 1);
        assert!(g.is_passage(gc(0, 0)));
    }

    #[test]
    fn narrow_grid_has_nowhere_to_carve() {
        let mut g = Grid::new(Width(2), Height(2)).unwrap();
        recursive_backtracker(&mut g, gc(1, 1), &mut first_choice_rng()).unwrap();
        assert_eq!(g.iter_passages().collect::<Vec<_>>(), vec![gc(1, 1)]);
    }

    #[test]
    fn same_seed_same_maze() {
        let a = generate(Width(21), Height(15), 42).unwrap();
        let b = generate(Width(21), Height(15), 42).unwrap();
        assert_eq!(passages_as_text(&a), passages_as_text(&b));
    }

    #[test]
    fn generate_rejects_bad_requests() {
        assert!(matches!(generate(Width(0), Height(4), 1).map_err(|e| e.0),
                         Err(ErrorKind::InvalidDimensions(..))));
        assert!(matches!(generate_from(Width(4), Height(4), gc(9, 9), 1).map_err(|e| e.0),
                         Err(ErrorKind::InvalidStart(..))));
    }

    #[test]
    fn every_even_cell_is_carved_from_origin() {
        let g = generate(Width(11), Height(8), 7).unwrap();
        for cell in g.iter() {
            let coord = cell.coordinate();
            if coord.x % 2 == 0 && coord.y % 2 == 0 {
                assert!(cell.is_passage(), "{} should be carved", coord);
            }
            if coord.x % 2 == 1 && coord.y % 2 == 1 {
                assert!(cell.is_wall(), "{} should stay a wall", coord);
            }
        }
    }

    #[test]
    fn carving_from_an_odd_cell_carves_the_odd_lattice() {
        let g = generate_from(Width(7), Height(7), gc(1, 1), 3).unwrap();
        // 3 x 3 lattice cells joined by 8 opened walls.
        assert_eq!(g.passages_count(), 17);
        assert!(g.iter().filter(|cell| cell.is_passage()).all(|cell| {
            let coord = cell.coordinate();
            coord.x % 2 == 1 || coord.y % 2 == 1
        }));
        assert_eq!(reachable_passages(&g, gc(1, 1)).len(), 17);
    }

    #[test]
    fn quickcheck_carved_passages_form_a_spanning_tree() {

        fn p(w: u8, h: u8, seed: u64) -> TestResult {
            let (w, h) = (w as usize % 24, h as usize % 24);
            if w == 0 || h == 0 {
                return TestResult::discard();
            }
            let g = generate(Width(w), Height(h), seed).unwrap();

            // Lattice cells reachable in steps of two from the origin, plus one opened wall
            // for each tree edge joining them.
            let lattice_cells = ((w + 1) / 2) * ((h + 1) / 2);
            let expected_passages = 2 * lattice_cells - 1;

            let passages = g.passages_count();
            let connected = reachable_passages(&g, Cartesian2DCoordinate::new(0, 0)).len();
            let links = passage_links_count(&g);

            // A connected graph with one edge less than its vertices is a tree.
            TestResult::from_bool(passages == expected_passages && connected == passages &&
                                  links + 1 == passages)
        }
        quickcheck(p as fn(u8, u8, u64) -> TestResult);
    }
}

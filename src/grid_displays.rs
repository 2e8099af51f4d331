use std::fmt;

use crate::cells::{Cartesian2DCoordinate, CoordinateSmallVec};
use crate::grid::Grid;
use crate::utils;
use crate::utils::FnvHashSet;

const WALL: char = '#';
const EMPTY: char = ' ';

pub trait GridDisplay {
    /// Render the contents of a passage cell as a single glyph.
    fn render_cell_body(&self, _: Cartesian2DCoordinate) -> char {
        EMPTY
    }
}

/// Marks every cell on a path, with `S` and `E` at its two ends.
#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<Cartesian2DCoordinate>,
    start: Option<Cartesian2DCoordinate>,
    end: Option<Cartesian2DCoordinate>,
}

impl PathDisplay {
    pub fn new(path: &[Cartesian2DCoordinate]) -> Self {
        let mut on_path_coordinates = utils::fnv_hashset(path.len());
        on_path_coordinates.extend(path.iter().cloned());
        PathDisplay {
            on_path_coordinates,
            start: path.first().cloned(),
            end: path.last().cloned(),
        }
    }
}

impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, coord: Cartesian2DCoordinate) -> char {
        if self.start == Some(coord) {
            'S'
        } else if self.end == Some(coord) {
            'E'
        } else if self.on_path_coordinates.contains(&coord) {
            '.'
        } else {
            EMPTY
        }
    }
}

#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start_coordinates: CoordinateSmallVec,
    end_coordinates: CoordinateSmallVec,
}

impl StartEndPointsDisplay {
    pub fn new(starts: CoordinateSmallVec, ends: CoordinateSmallVec) -> StartEndPointsDisplay {
        StartEndPointsDisplay {
            start_coordinates: starts,
            end_coordinates: ends,
        }
    }
}

impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, coord: Cartesian2DCoordinate) -> char {

        let contains_coordinate =
            |coordinates: &CoordinateSmallVec| coordinates.iter().any(|&c| c == coord);

        if contains_coordinate(&self.start_coordinates) {
            'S'
        } else if contains_coordinate(&self.end_coordinates) {
            'E'
        } else {
            EMPTY
        }
    }
}

/// Text dump of a grid, one line per row with `#` for walls. Passage cells are blank unless a
/// `GridDisplay` is given to fill them in.
pub struct MazeText<'a> {
    grid: &'a Grid,
    display: Option<&'a dyn GridDisplay>,
}

impl<'a> MazeText<'a> {
    pub fn new(grid: &'a Grid) -> MazeText<'a> {
        MazeText {
            grid,
            display: None,
        }
    }

    pub fn with_display(grid: &'a Grid, display: &'a dyn GridDisplay) -> MazeText<'a> {
        MazeText {
            grid,
            display: Some(display),
        }
    }
}

impl<'a> fmt::Display for MazeText<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.grid.iter_row() {
            let line = row.iter()
                .map(|cell| {
                    if cell.is_wall() {
                        WALL
                    } else {
                        self.display
                            .map_or(EMPTY, |display| display.render_cell_body(cell.coordinate()))
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

use std::fmt;
use std::slice;

use error_chain::bail;

use crate::cells::{offset_coordinate, Cartesian2DCoordinate, Cell, CompassPrimary,
                   CoordinateSmallVec, DirectionCoordinateSmallVec, StepDistance,
                   COMPASS_PRIMARY_DIRECTIONS};
use crate::errors::*;
use crate::units::{CellsCount, Height, Width};


/// A fixed size rectangle of cells, each a wall or a passage.
///
/// Cells are stored row major so a coordinate maps straight onto its index. A new grid is
/// all walls, the maze generators carve passages into it.
#[derive(Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    width: Width,
    height: Height,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: width: {:?}, height: {:?}, passages: {:?}",
               self.width, self.height, self.passages_count())
    }
}

impl Grid {
    pub fn new(width: Width, height: Height) -> Result<Grid> {

        if width.0 == 0 || height.0 == 0 {
            bail!(ErrorKind::InvalidDimensions(width, height));
        }
        let cells_count = width.0.checked_mul(height.0)
            .ok_or_else(|| Error::from(ErrorKind::InvalidDimensions(width, height)))?;
        // Coordinates are u32 on each axis.
        if width.0 > u32::max_value() as usize || height.0 > u32::max_value() as usize {
            bail!(ErrorKind::InvalidDimensions(width, height));
        }

        let cells = (0..cells_count)
            .map(|index| {
                let x = index % width.0;
                let y = index / width.0;
                Cell::wall(Cartesian2DCoordinate::new(x as u32, y as u32))
            })
            .collect();

        Ok(Grid {
            cells,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline]
    pub fn size(&self) -> CellsCount {
        CellsCount(self.cells.len())
    }

    pub fn passages_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_passage()).count()
    }

    /// The cell at a coordinate, None if the coordinate is outside the grid.
    #[inline]
    pub fn cell_at(&self, coord: Cartesian2DCoordinate) -> Option<&Cell> {
        self.grid_coordinate_to_index(coord).map(|index| &self.cells[index])
    }

    /// Some(true) for walls, Some(false) for passages and None outside the grid.
    #[inline]
    pub fn is_wall(&self, coord: Cartesian2DCoordinate) -> Option<bool> {
        self.cell_at(coord).map(Cell::is_wall)
    }

    /// Outside the grid counts as not a passage.
    #[inline]
    pub fn is_passage(&self, coord: Cartesian2DCoordinate) -> bool {
        self.is_wall(coord) == Some(false)
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        (coord.x as usize) < self.width.0 && (coord.y as usize) < self.height.0
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.y as usize * self.width.0 + coord.x as usize)
        } else {
            None
        }
    }

    /// Turn a wall into a passage. Returns true if the cell was a wall before.
    pub(crate) fn open(&mut self, coord: Cartesian2DCoordinate) -> bool {
        match self.grid_coordinate_to_index(coord) {
            Some(index) => self.cells[index].open(),
            None => false,
        }
    }

    pub fn neighbour_at_direction(&self,
                                  coord: Cartesian2DCoordinate,
                                  direction: CompassPrimary,
                                  distance: StepDistance)
                                  -> Option<Cartesian2DCoordinate> {
        offset_coordinate(coord, direction, distance)
            .filter(|neighbour_coord| self.is_valid_coordinate(*neighbour_coord))
    }

    /// Cells `distance` away to the North, South, West and East (in that order) that are
    /// inside the grid, whether they are walls or not.
    pub fn neighbours(&self,
                      coord: Cartesian2DCoordinate,
                      distance: StepDistance)
                      -> CoordinateSmallVec {
        self.neighbours_with_directions(coord, distance)
            .into_iter()
            .map(|(_, neighbour_coord)| neighbour_coord)
            .collect()
    }

    pub fn neighbours_with_directions(&self,
                                      coord: Cartesian2DCoordinate,
                                      distance: StepDistance)
                                      -> DirectionCoordinateSmallVec {
        COMPASS_PRIMARY_DIRECTIONS.iter()
            .filter_map(|&dir| {
                self.neighbour_at_direction(coord, dir, distance)
                    .map(|neighbour_coord| (dir, neighbour_coord))
            })
            .collect()
    }

    /// Cells in row major order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<Cell> {
        self.cells.iter()
    }

    /// Rows from top (y == 0) to bottom, each a slice of cells from West to East.
    #[inline]
    pub fn iter_row(&self) -> slice::ChunksExact<Cell> {
        self.cells.chunks_exact(self.width.0)
    }

    pub fn iter_passages<'a>(&'a self) -> impl Iterator<Item = Cartesian2DCoordinate> + 'a {
        self.cells.iter().filter(|cell| cell.is_passage()).map(Cell::coordinate)
    }
}

use std::convert::From;
use std::fmt;

use smallvec::SmallVec;

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;
pub type DirectionCoordinateSmallVec = SmallVec<[(CompassPrimary, Cartesian2DCoordinate); 4]>;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }

    /// Manhattan distance between two coordinates.
    pub fn manhattan_distance(&self, other: Cartesian2DCoordinate) -> u32 {
        let dx = if self.x > other.x { self.x - other.x } else { other.x - self.x };
        let dy = if self.y > other.y { self.y - other.y } else { other.y - self.y };
        dx + dy
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

impl fmt::Display for Cartesian2DCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// North is towards row zero, West towards column zero.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    West,
    East,
}

/// Up, down, left, right. Path finding picks the first open neighbour in this order so it
/// decides which route comes back when a grid has several.
pub const COMPASS_PRIMARY_DIRECTIONS: [CompassPrimary; 4] = [CompassPrimary::North,
                                                            CompassPrimary::South,
                                                            CompassPrimary::West,
                                                            CompassPrimary::East];

/// How far a neighbour lies from a cell.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum StepDistance {
    /// Adjacent cells, used when walking the maze.
    Unit,
    /// Two cells away with a shared wall cell in between, used when carving.
    MazeStep,
}

impl StepDistance {
    #[inline]
    pub fn cells(self) -> u32 {
        match self {
            StepDistance::Unit => 1,
            StepDistance::MazeStep => 2,
        }
    }
}

/// Creates a new coordinate offset `distance` cells away in the given direction.
/// Returns None if the coordinate is not representable, it is not checked against any grid.
pub fn offset_coordinate(coord: Cartesian2DCoordinate,
                         dir: CompassPrimary,
                         distance: StepDistance)
                         -> Option<Cartesian2DCoordinate> {
    let (x, y) = (coord.x, coord.y);
    let step = distance.cells();
    match dir {
        CompassPrimary::North => y.checked_sub(step).map(|y| Cartesian2DCoordinate::new(x, y)),
        CompassPrimary::South => y.checked_add(step).map(|y| Cartesian2DCoordinate::new(x, y)),
        CompassPrimary::West => x.checked_sub(step).map(|x| Cartesian2DCoordinate::new(x, y)),
        CompassPrimary::East => x.checked_add(step).map(|x| Cartesian2DCoordinate::new(x, y)),
    }
}

/// One position on the grid, either wall or passage.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Cell {
    coord: Cartesian2DCoordinate,
    is_wall: bool,
}

impl Cell {
    pub(crate) fn wall(coord: Cartesian2DCoordinate) -> Cell {
        Cell {
            coord,
            is_wall: true,
        }
    }

    #[inline]
    pub fn coordinate(&self) -> Cartesian2DCoordinate {
        self.coord
    }

    #[inline]
    pub fn is_wall(&self) -> bool {
        self.is_wall
    }

    #[inline]
    pub fn is_passage(&self) -> bool {
        !self.is_wall
    }

    /// Wall to passage only, a passage never reverts. Returns true if the cell changed.
    pub(crate) fn open(&mut self) -> bool {
        let was_wall = self.is_wall;
        self.is_wall = false;
        was_wall
    }
}

// Create the Error, ErrorKind, ResultExt, and Result types.
// Every failure here is an expected outcome of a bad request rather than a broken maze,
// so callers are meant to match on the `ErrorKind`.
use error_chain::*;

use crate::cells::Cartesian2DCoordinate;
use crate::units::{Height, Width};

error_chain! {
    errors {
        InvalidDimensions(width: Width, height: Height) {
            description("grid width and height must both be positive")
            display("invalid grid dimensions {} x {}", width.0, height.0)
        }
        InvalidStart(coord: Cartesian2DCoordinate) {
            description("start coordinate is outside the grid")
            display("start coordinate {} is outside the grid", coord)
        }
        InvalidEnd(coord: Cartesian2DCoordinate) {
            description("end coordinate is outside the grid")
            display("end coordinate {} is outside the grid", coord)
        }
        BlockedEnd(coord: Cartesian2DCoordinate) {
            description("end cell is a wall")
            display("end cell {} is a wall", coord)
        }
        NoPathExists(start: Cartesian2DCoordinate, end: Cartesian2DCoordinate) {
            description("no walkable path between the two cells")
            display("no walkable path from {} to {}", start, end)
        }
    }
}

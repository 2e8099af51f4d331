//! **backtrack_mazes** carves perfect mazes into a wall/passage grid with a randomized recursive
//! backtracker and finds walkable routes through them with a depth first search.

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod pathing;
pub mod units;
mod utils;

use backtrack_mazes::{
    cells::Cartesian2DCoordinate,
    errors::ErrorKind as MazeErrorKind,
    generators,
    grid::Grid,
    grid_displays::{MazeText, PathDisplay, StartEndPointsDisplay},
    pathing,
    units::{Height, Width},
};
use docopt::Docopt;
use log::{info, warn};
use serde_derive::Deserialize;
use smallvec::smallvec;
use std::{
    fs::File,
    io,
    io::prelude::*,
};

const USAGE: &str = "Mazes

Usage:
    mazes_driver -h | --help
    mazes_driver [(--grid-size=<n>|[--grid-width=<w> --grid-height=<h>])] [--seed=<s>] [--start-point-x=<x> --start-point-y=<y>] [--end-point-x=<e1> --end-point-y=<e2>] [--text-out=<path>]

Options:
    -h --help              Show this screen.
    --grid-size=<n>        The grid size is n * n.
    --grid-width=<w>       The grid width in a w*h grid [default: 21].
    --grid-height=<h>      The grid height in a w*h grid [default: 21].
    --seed=<s>             Seed for the maze generator. A random seed is used if not given.
    --start-point-x=<x>    x coordinate of the path start [default: 0].
    --start-point-y=<y>    y coordinate of the path start [default: 0].
    --end-point-x=<e1>     x coordinate of the path end. Defaults to the bottom right passage.
    --end-point-y=<e2>     y coordinate of the path end. Defaults to the bottom right passage.
    --text-out=<path>      Output file path for the maze text. Printed to stdout if not given.

Set RUST_LOG=debug to see what the generator and path finder did.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_size: Option<usize>,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_seed: Option<u64>,
    flag_start_point_x: u32,
    flag_start_point_y: u32,
    flag_end_point_x: Option<u32>,
    flag_end_point_y: Option<u32>,
    flag_text_out: String,
}

mod errors {
    use error_chain::*;
    error_chain! {
        links {
            Maze(::backtrack_mazes::errors::Error, ::backtrack_mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let (width, height) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_grid_width, args.flag_grid_height)
    };
    let seed = args.flag_seed.unwrap_or_else(rand::random);
    info!("generating a {} x {} maze with seed {}", width, height, seed);

    let maze_grid = generators::generate(Width(width), Height(height), seed)
        .chain_err(|| format!("Failed to generate a {} x {} maze", width, height))?;

    let start = Cartesian2DCoordinate::new(args.flag_start_point_x, args.flag_start_point_y);
    let end = get_end_point(&args, &maze_grid)?;

    let maze_text = maze_with_path_text(&maze_grid, start, end)?;

    if args.flag_text_out.is_empty() {
        print!("{}", maze_text);
    } else {
        write_text_to_file(&maze_text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

/// Render the maze with the route from start to end marked. If there is no route, show where the
/// start and end points are instead.
fn maze_with_path_text(maze_grid: &Grid,
                       start: Cartesian2DCoordinate,
                       end: Cartesian2DCoordinate)
                       -> Result<String> {

    match pathing::depth_first_path(maze_grid, start, end) {
        Ok(path) => {
            info!("path from {} to {} is {} cells long", start, end, path.len());
            let display_path = PathDisplay::new(&path);
            Ok(MazeText::with_display(maze_grid, &display_path).to_string())
        }
        Err(e) => {
            let unreachable_end = match *e.kind() {
                MazeErrorKind::BlockedEnd(..) | MazeErrorKind::NoPathExists(..) => true,
                _ => false,
            };
            if !unreachable_end {
                return Err(e.into());
            }

            warn!("{}", e);
            let display_start_end_points = StartEndPointsDisplay::new(smallvec![start],
                                                                      smallvec![end]);
            Ok(MazeText::with_display(maze_grid, &display_start_end_points).to_string())
        }
    }
}

fn get_end_point(maze_args: &MazeArgs, maze_grid: &Grid) -> Result<Cartesian2DCoordinate> {

    if let (Some(end_x), Some(end_y)) = (maze_args.flag_end_point_x, maze_args.flag_end_point_y) {
        Ok(Cartesian2DCoordinate::new(end_x, end_y))
    } else {
        // Even sized grids leave the bottom right corner as a wall.
        maze_grid.iter_passages()
            .last()
            .ok_or_else(|| "The maze has no passages to end a path in.".into())
    }
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

//! Console pathfinding demo.
//!
//! Builds the reference occupancy map, searches from (1, 0) to (6, 2) and
//! prints the grid with the found path marked.
//!
//! Run: cargo run --bin pathdemo

use waymark_core::{Grid, Point};
use waymark_demos::{REFERENCE_MAP, render};
use waymark_paths::Pathfinder;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let grid = Grid::parse(REFERENCE_MAP)?;
    let finder = Pathfinder::new(grid);

    let start = Point::new(1, 0);
    let end = Point::new(6, 2);
    let path = finder.find_path(start, end);
    if path.is_empty() {
        println!("no path from {start} to {end}");
        return Ok(());
    }

    print!("{}", render(finder.grid(), &path));
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

//! Shared demo support: the reference occupancy map and console rendering.

use std::collections::HashSet;

use waymark_core::{Grid, Point};

/// The 10x10 demonstration map: a wall along column 4 with a single opening
/// at (4, 4), plus assorted interior obstacles.
pub const REFERENCE_MAP: &str = "\
....#.....
....#..#..
.####..#..
.#..####..
.#....#...
.#.##.#...
.#..#.#...
.##.#.###.
....#.....
....#.....";

/// Render a grid and a path over it as console text.
///
/// Path cells are drawn as `'+'`, open cells as `'.'` and blocked cells as
/// `'#'`, one text line per grid row.
pub fn render(grid: &Grid, path: &[Point]) -> String {
    let on_path: HashSet<Point> = path.iter().copied().collect();
    let mut out = String::with_capacity(((grid.width() + 1) * grid.height()) as usize);
    for (p, cell) in grid.iter() {
        if on_path.contains(&p) {
            out.push('+');
        } else if cell.is_open() {
            out.push('.');
        } else {
            out.push('#');
        }
        if p.x == grid.width() - 1 {
            out.push('\n');
        }
    }
    out
}

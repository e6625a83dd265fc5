//! The binary-occupancy [`Grid`] used as the map for searches.
//!
//! A `Grid` owns its cells in a flat row-major buffer. It is built once and
//! then handed to a pathfinder, which keeps it immutable for its whole
//! lifetime.

use std::fmt;

use crate::geom::Point;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// The state of one grid cell: traversable or not.
///
/// Converts from the external small-integer encoding where `0` is open and
/// any non-zero value is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Traversable cell.
    #[default]
    Open,
    /// Impassable cell.
    Blocked,
}

impl Cell {
    /// Whether the cell is traversable.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        if v == 0 { Self::Open } else { Self::Blocked }
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A `width × height` grid of [`Cell`]s in row-major order.
///
/// Indexed by (row = y, column = x). Construction validates that the data
/// matches the declared dimensions; all later bounds failures are expressed
/// as `None`/`false` query results rather than panics.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Create an all-open grid of the given dimensions.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            cells: vec![Cell::default(); (w as usize) * (h as usize)],
            width: w,
            height: h,
        }
    }

    /// Build a grid from rows of small integers (`0` = open, non-zero =
    /// blocked), validating them against the declared dimensions.
    ///
    /// Fails fast with [`GridError::DimensionMismatch`] when the row count
    /// or any row length disagrees with `width`/`height`.
    pub fn from_rows<R: AsRef<[i32]>>(
        width: i32,
        height: i32,
        rows: &[R],
    ) -> Result<Self, GridError> {
        if rows.len() != height.max(0) as usize {
            return Err(GridError::DimensionMismatch {
                expected: Point::new(width, height),
                found: Point::new(width, rows.len() as i32),
            });
        }
        let mut cells = Vec::with_capacity((width.max(0) as usize) * (height.max(0) as usize));
        for row in rows {
            let row = row.as_ref();
            if row.len() != width.max(0) as usize {
                return Err(GridError::DimensionMismatch {
                    expected: Point::new(width, height),
                    found: Point::new(row.len() as i32, height),
                });
            }
            cells.extend(row.iter().map(|&v| Cell::from(v)));
        }
        Ok(Self {
            cells,
            width: width.max(0),
            height: height.max(0),
        })
    }

    /// Parse a grid from map text: `'.'` = open, `'#'` = blocked, one line
    /// per row.
    ///
    /// Leading and trailing whitespace is trimmed from the whole string but
    /// not from individual lines. All lines must have the same width.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        let mut cells = Vec::new();
        let mut width: i32 = -1;
        let mut y: i32 = 0;

        for line in s.lines() {
            let mut x: i32 = 0;
            for ch in line.chars() {
                match ch {
                    '.' => cells.push(Cell::Open),
                    '#' => cells.push(Cell::Blocked),
                    _ => {
                        return Err(GridError::InvalidRune {
                            ch,
                            pos: Point::new(x, y),
                            content: s.to_string(),
                        });
                    }
                }
                x += 1;
            }
            if width >= 0 && x != width {
                return Err(GridError::InconsistentSize(s.to_string()));
            }
            width = x;
            y += 1;
        }

        Ok(Self {
            cells,
            width: width.max(0),
            height: y,
        })
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` lies within the grid bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// The cell at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is an in-bounds, traversable cell.
    ///
    /// Out-of-bounds positions report `false`, so a cell adjacent to the
    /// grid boundary never counts as open.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_open)
    }

    /// Set the cell at `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.index(p) {
            self.cells[i] = cell;
        }
    }

    /// Fill the entire grid with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        // A non-empty buffer implies width > 0.
        let w = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (Point::new(i as i32 % w, i as i32 / w), c))
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors that can occur when constructing a grid.
#[derive(Debug, Clone)]
pub enum GridError {
    /// The supplied data does not match the declared dimensions.
    DimensionMismatch {
        /// Declared (width, height).
        expected: Point,
        /// (width, height) actually found in the data.
        found: Point,
    },
    /// Map text lines have inconsistent widths.
    InconsistentSize(String),
    /// A character other than `'.'` or `'#'` was found in map text.
    InvalidRune {
        ch: char,
        pos: Point,
        content: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "grid data is {}x{}, declared {}x{}",
                    found.x, found.y, expected.x, expected.y
                )
            }
            Self::InconsistentSize(s) => write!(f, "map has inconsistent line widths:\n{s}"),
            Self::InvalidRune { ch, pos, content } => {
                write!(
                    f,
                    "map contains invalid rune \u{201c}{ch}\u{201d} at ({}, {}):\n{content}",
                    pos.x, pos.y
                )
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "\
...#
.#.#
....";

    #[test]
    fn parse_and_query() {
        let g = Grid::parse(MAP).unwrap();
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert!(g.is_open(Point::new(0, 0)));
        assert!(!g.is_open(Point::new(3, 0)));
        assert_eq!(g.at(Point::new(1, 1)), Some(Cell::Blocked));
        assert_eq!(g.at(Point::new(4, 0)), None);
    }

    #[test]
    fn parse_rejects_ragged_lines() {
        let err = Grid::parse("...\n..").unwrap_err();
        assert!(matches!(err, GridError::InconsistentSize(_)));
    }

    #[test]
    fn parse_rejects_unknown_rune() {
        let err = Grid::parse("..\n.x").unwrap_err();
        match err {
            GridError::InvalidRune { ch, pos, .. } => {
                assert_eq!(ch, 'x');
                assert_eq!(pos, Point::new(1, 1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn from_rows_int_encoding() {
        let g = Grid::from_rows(3, 2, &[[0, 1, 0], [7, 0, 0]]).unwrap();
        assert_eq!(g.at(Point::new(1, 0)), Some(Cell::Blocked));
        // Any non-zero value counts as blocked.
        assert_eq!(g.at(Point::new(0, 1)), Some(Cell::Blocked));
        assert_eq!(g.at(Point::new(2, 1)), Some(Cell::Open));
    }

    #[test]
    fn from_rows_rejects_wrong_row_count() {
        let err = Grid::from_rows(2, 3, &[[0, 0], [0, 0]]).unwrap_err();
        assert!(matches!(err, GridError::DimensionMismatch { .. }));
    }

    #[test]
    fn from_rows_rejects_ragged_row() {
        let rows: [&[i32]; 2] = [&[0, 0, 0], &[0, 0]];
        let err = Grid::from_rows(3, 2, &rows).unwrap_err();
        match err {
            GridError::DimensionMismatch { expected, found } => {
                assert_eq!(expected, Point::new(3, 2));
                assert_eq!(found.x, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn set_and_fill() {
        let mut g = Grid::new(2, 2);
        g.set(Point::new(1, 1), Cell::Blocked);
        assert!(!g.is_open(Point::new(1, 1)));
        // Out-of-bounds set is a no-op.
        g.set(Point::new(5, 5), Cell::Blocked);
        g.fill(Cell::Open);
        assert!(g.iter().all(|(_, c)| c.is_open()));
    }

    #[test]
    fn iter_row_major() {
        let g = Grid::parse("..\n.#").unwrap();
        let cells: Vec<_> = g.iter().collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0], (Point::new(0, 0), Cell::Open));
        assert_eq!(cells[3], (Point::new(1, 1), Cell::Blocked));
    }

    #[test]
    fn empty_grid() {
        let g = Grid::new(0, 0);
        assert_eq!(g.width(), 0);
        assert!(!g.contains(Point::ZERO));
        let h = Grid::new(-3, 4);
        assert_eq!(h.width(), 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        let p = Point::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse("..#\n#..").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}

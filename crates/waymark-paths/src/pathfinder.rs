use waymark_core::{Grid, Point};

/// Sentinel parent index for the start node of a search.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Internal node for the A* search arena
// ---------------------------------------------------------------------------

/// A node discovered during one search.
///
/// Nodes live in a per-search arena (`Vec<SearchNode>`) and reference their
/// parent by index, forming a tree rooted at the start node. Node identity
/// is its position; the scores only order expansion.
#[derive(Clone, Copy)]
pub(crate) struct SearchNode {
    pub(crate) pos: Point,
    /// Flat grid index of `pos`, for closed/open bookkeeping.
    pub(crate) cell: usize,
    pub(crate) parent: usize,
    /// Accumulated step cost from the start (unit steps).
    pub(crate) g: i32,
    /// Total priority: `g` plus the heuristic estimate to the goal.
    pub(crate) f: i32,
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Shortest-path queries over an immutable occupancy grid.
///
/// The `Pathfinder` takes ownership of its [`Grid`] at construction, so the
/// map cannot change between or during searches. Every query allocates its
/// own transient state and takes `&self`.
pub struct Pathfinder {
    grid: Grid,
}

impl Pathfinder {
    /// Create a pathfinder over the given grid.
    ///
    /// The grid's dimensions were validated when it was built, so this
    /// cannot fail.
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// The grid being searched.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Total number of cells.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        (self.grid.width() as usize) * (self.grid.height() as usize)
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if self.grid.contains(p) {
            Some((p.y as usize) * (self.grid.width() as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let w = self.grid.width() as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }
}

use waymark_core::Point;

use crate::Pathfinder;
use crate::distance::squared_euclidean;
use crate::pathfinder::{NO_PARENT, SearchNode};

impl Pathfinder {
    /// Compute a path from `start` to `end` using A*.
    ///
    /// Movement is 4-directional with unit step cost; the heuristic is the
    /// squared Euclidean distance to `end`. On success the returned sequence
    /// begins with `start`, ends with `end`, and each consecutive pair
    /// differs by one orthogonal step. An empty vector means `end` is
    /// unreachable (or an endpoint lies outside the grid); that is a valid
    /// negative result, not an error.
    ///
    /// The search is deterministic: the open list is scanned in insertion
    /// order and only a strictly smaller `f` replaces the current pick, so
    /// equal-priority ties always resolve to the earliest-discovered node.
    /// Repeated calls with the same arguments return identical sequences.
    pub fn find_path(&self, start: Point, end: Point) -> Vec<Point> {
        let (Some(si), Some(_)) = (self.idx(start), self.idx(end)) else {
            return Vec::new();
        };

        if start == end {
            return vec![start];
        }

        let len = self.len();
        // Per-search state, discarded on return: the node arena, the open
        // list in insertion order, the closed cells, and the best g enqueued
        // so far for each cell.
        let mut nodes = vec![SearchNode {
            pos: start,
            cell: si,
            parent: NO_PARENT,
            g: 0,
            f: 0,
        }];
        let mut open: Vec<usize> = vec![0];
        let mut closed = vec![false; len];
        let mut best_g = vec![i32::MAX; len];
        best_g[si] = 0;

        while !open.is_empty() {
            // Scan in insertion order; only a strictly smaller f replaces
            // the pick, so earlier equal-f entries win.
            let mut pick = 0;
            for (i, &ni) in open.iter().enumerate().skip(1) {
                if nodes[ni].f < nodes[open[pick]].f {
                    pick = i;
                }
            }
            // Plain remove keeps the remaining entries in insertion order.
            let ci = open.remove(pick);
            let current = nodes[ci];
            closed[current.cell] = true;

            if current.pos == end {
                let mut path = Vec::with_capacity(current.g as usize + 1);
                let mut i = ci;
                while i != NO_PARENT {
                    path.push(nodes[i].pos);
                    i = nodes[i].parent;
                }
                path.reverse();
                return path;
            }

            for np in current.pos.neighbors_4() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if !self.grid().is_open(np) || closed[ni] {
                    continue;
                }
                let g = current.g + 1;
                // The open list already holds this position with an
                // equal-or-better g.
                if best_g[ni] <= g {
                    continue;
                }
                best_g[ni] = g;
                let h = squared_euclidean(np, end);
                nodes.push(SearchNode {
                    pos: np,
                    cell: ni,
                    parent: ci,
                    g,
                    f: g + h,
                });
                open.push(nodes.len() - 1);
            }
        }

        Vec::new()
    }
}

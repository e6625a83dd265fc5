use std::collections::VecDeque;

use waymark_core::Point;

use crate::Pathfinder;

/// Sentinel distance meaning "not reached".
pub const UNREACHABLE: i32 = i32::MAX;

/// Distances produced by [`Pathfinder::bfs_map`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMap {
    width: i32,
    height: i32,
    dist: Vec<i32>,
}

impl DistanceMap {
    /// The BFS distance at `p`.
    ///
    /// Returns [`UNREACHABLE`] if `p` is outside the grid or was not
    /// reached.
    pub fn at(&self, p: Point) -> i32 {
        if p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height {
            self.dist[(p.y as usize) * (self.width as usize) + (p.x as usize)]
        } else {
            UNREACHABLE
        }
    }
}

impl Pathfinder {
    /// Compute a multi-source breadth-first distance map over open cells.
    ///
    /// Each step has cost 1, matching the step cost of
    /// [`find_path`](Pathfinder::find_path). Out-of-bounds and blocked
    /// sources are ignored; expansion stops when the distance would exceed
    /// `max_dist`.
    pub fn bfs_map(&self, sources: &[Point], max_dist: i32) -> DistanceMap {
        let mut dist = vec![UNREACHABLE; self.len()];
        let mut queue: VecDeque<usize> = VecDeque::new();

        for &src in sources {
            let Some(si) = self.idx(src) else {
                continue;
            };
            if !self.grid().is_open(src) || dist[si] != UNREACHABLE {
                continue;
            }
            dist[si] = 0;
            queue.push_back(si);
        }

        while let Some(ci) = queue.pop_front() {
            let current_dist = dist[ci];
            let cp = self.point(ci);

            for np in cp.neighbors_4() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if !self.grid().is_open(np) || dist[ni] != UNREACHABLE {
                    continue;
                }
                let nd = current_dist + 1;
                if nd > max_dist {
                    continue;
                }
                dist[ni] = nd;
                queue.push_back(ni);
            }
        }

        DistanceMap {
            width: self.grid().width(),
            height: self.grid().height(),
            dist,
        }
    }
}

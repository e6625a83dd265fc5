//! Pathfinding on binary-occupancy 2D grids.
//!
//! This crate provides a single embeddable search component, the
//! [`Pathfinder`], which owns an immutable occupancy grid and computes
//! shortest-cost paths between cells:
//!
//! - **A\*** shortest-path search ([`Pathfinder::find_path`])
//! - **BFS** uniform-cost distance maps ([`Pathfinder::bfs_map`])
//!
//! Movement is 4-directional with unit step cost. Searches are synchronous
//! and allocate all transient state per call, so a shared `Pathfinder` can
//! serve concurrent queries.
//!
//! The A* selection policy and neighbor expansion order are fixed: given the
//! same grid and endpoints, [`Pathfinder::find_path`] always returns the
//! same sequence.

mod astar;
mod bfs;
mod distance;
mod pathfinder;

pub use bfs::{DistanceMap, UNREACHABLE};
pub use distance::{manhattan, squared_euclidean};
pub use pathfinder::Pathfinder;

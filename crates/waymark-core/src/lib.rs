//! **waymark-core** — Core types for the waymark pathfinding crates.
//!
//! This crate provides the foundational types shared by the *waymark*
//! workspace: the [`Point`] geometry primitive and the binary-occupancy
//! [`Grid`] that searches run against.

pub mod geom;
pub mod grid;

pub use geom::Point;
pub use grid::{Cell, Grid, GridError};

//! **ballpath-core** — grid model for ballpath.
//!
//! This crate provides the foundational types used across the *ballpath*
//! workspace: geometry primitives, the free/ball cell type, and the
//! immutable grid that path searches run over.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use geom::{Point, Range};
pub use grid::{Grid, GridError, build_grid};

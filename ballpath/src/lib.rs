//! ballpath — shortest route between two cells of a grid of balls.
//!
//! Reads a grid file, runs a breadth-first search from the start cell and
//! prints the route to the end cell, or reports that none exists.

pub mod cli;
pub mod input;
pub mod render;

pub use cli::{Cli, run};
pub use input::{GridInput, ParseError};

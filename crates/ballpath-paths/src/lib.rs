//! Breadth-first shortest paths on ballpath grids.
//!
//! - **BFS** distance and back-pointer state ([`Pathfinder::search`])
//! - **Route reconstruction** into ordered moves ([`Pathfinder::reconstruct`])
//! - **Connectivity** flood fill ([`Pathfinder::cc_map`], [`connected`])
//!
//! All searches run through [`Pathfinder`], which owns and reuses the
//! per-cell search state so that repeated queries over the same immutable
//! grid never see stale values. [`find_shortest_path`] is the one-shot
//! entry point.

mod bfs;
mod cc;
mod distance;
mod moves;
mod pathfinder;
mod route;
mod traits;

pub use cc::connected;
pub use distance::manhattan;
pub use moves::Move;
pub use pathfinder::Pathfinder;
pub use route::{Route, find_shortest_path};
pub use traits::Pather;

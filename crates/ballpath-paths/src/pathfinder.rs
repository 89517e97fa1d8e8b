use ballpath_core::{Point, Range};

use crate::moves::Move;

/// Sentinel distance meaning "not reached" in the search state.
pub(crate) const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Reusable breadth-first pathfinder over a grid rectangle.
///
/// `Pathfinder` owns the per-cell search state (distance from the last
/// search's start and the move that led into each cell) as dense arrays
/// parallel to the grid. Every search resets this state first, so one
/// pathfinder can answer any number of queries without stale values and
/// without reallocating.
pub struct Pathfinder {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    // BFS state
    pub(crate) dist: Vec<i32>,
    pub(crate) incoming: Vec<Option<Move>>,
    pub(crate) source: Option<Point>,
    // CC state
    pub(crate) cc_seen: Vec<bool>,
    pub(crate) cc_stack: Vec<usize>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl Pathfinder {
    /// Create a new `Pathfinder` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            width: rng.width().max(0) as usize,
            dist: vec![UNREACHABLE; len],
            incoming: vec![None; len],
            source: None,
            cc_seen: vec![false; len],
            cc_stack: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range, reusing the state arrays when the new
    /// range fits in their capacity.
    pub fn set_range(&mut self, rng: Range) {
        let len = rng.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        self.source = None;
        if len <= self.dist.len() {
            self.dist.truncate(len);
            self.incoming.truncate(len);
            self.cc_seen.truncate(len);
            self.reset();
            return;
        }
        self.dist.clear();
        self.dist.resize(len, UNREACHABLE);
        self.incoming.clear();
        self.incoming.resize(len, None);
        self.cc_seen.clear();
        self.cc_seen.resize(len, false);
        self.cc_stack.clear();
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Start point of the last search, if one ran since the last reset.
    #[inline]
    pub fn source(&self) -> Option<Point> {
        self.source
    }

    /// Clear all per-cell search state.
    pub fn reset(&mut self) {
        self.dist.fill(UNREACHABLE);
        self.incoming.fill(None);
        self.source = None;
    }

    // -----------------------------------------------------------------------
    // Search state queries
    // -----------------------------------------------------------------------

    /// Distance from the last search's start to `p`, or `None` if the
    /// search did not reach it.
    pub fn distance_at(&self, p: Point) -> Option<usize> {
        let i = self.idx(p)?;
        match self.dist[i] {
            UNREACHABLE => None,
            d => Some(d as usize),
        }
    }

    /// Whether the last search visited `p`.
    #[inline]
    pub fn visited_at(&self, p: Point) -> bool {
        self.distance_at(p).is_some()
    }

    /// The move that leads from `p` back to the cell it was discovered
    /// from. `None` for the start cell and for unvisited cells.
    pub fn incoming_at(&self, p: Point) -> Option<Move> {
        self.idx(p).and_then(|i| self.incoming[i])
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

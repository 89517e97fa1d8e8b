//! Connected-component flood fill.

use ballpath_core::{Grid, Point};

use crate::Pathfinder;
use crate::traits::Pather;

impl Pathfinder {
    /// Flood-fill from a single point and return the set of connected cells.
    ///
    /// A start outside the range or not passable yields an empty set. Only
    /// cells reachable from `p` are marked; query them with
    /// [`cc_at`](Self::cc_at). Independent of the BFS state.
    pub fn cc_map<P: Pather>(&mut self, pather: &P, p: Point) -> Vec<Point> {
        self.cc_seen.fill(false);

        let mut result = Vec::new();
        let Some(si) = self.idx(p) else {
            return result;
        };
        if !pather.passable(p) {
            return result;
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        self.cc_stack.clear();
        self.cc_stack.push(si);
        self.cc_seen[si] = true;
        result.push(p);

        while let Some(ci) = self.cc_stack.pop() {
            let cp = self.point(ci);
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                if let Some(ni) = self.idx(np) {
                    if !self.cc_seen[ni] {
                        self.cc_seen[ni] = true;
                        self.cc_stack.push(ni);
                        result.push(np);
                    }
                }
            }
        }

        self.nbuf = nbuf;
        result
    }

    /// Whether `p` was reached by the last [`cc_map`](Self::cc_map).
    pub fn cc_at(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.cc_seen[i])
    }
}

/// Whether a route of passable cells joins `a` and `b`.
pub fn connected(grid: &Grid, a: Point, b: Point) -> bool {
    let mut pf = Pathfinder::new(grid.bounds());
    pf.cc_map(grid, a);
    pf.cc_at(b)
}

use ballpath_core::{Grid, Point};

/// Minimal pathfinding interface — passability and neighbor enumeration.
pub trait Pather {
    /// Whether a search may start on, or step onto, `p`.
    fn passable(&self, p: Point) -> bool;

    /// Append the passable neighbors of `p` into `buf`, highest priority
    /// first. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

impl Pather for Grid {
    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.is_passable(p)
    }

    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        Grid::neighbors(self, p, buf);
    }
}

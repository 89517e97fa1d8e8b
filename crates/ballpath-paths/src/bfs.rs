use std::collections::VecDeque;

use ballpath_core::Point;
use log::{debug, trace};

use crate::Pathfinder;
use crate::moves::Move;
use crate::pathfinder::UNREACHABLE;
use crate::traits::Pather;

impl Pathfinder {
    /// Run a breadth-first search from `start`.
    ///
    /// Each step has cost 1. Neighbors are expanded in the order the
    /// `pather` yields them, and every reached cell records its distance
    /// from `start` together with the move leading back toward the cell it
    /// was discovered from. When `stop_at` is given, the search ends as soon
    /// as that cell is dequeued; distances of everything reached up to then
    /// are already final.
    ///
    /// A `start` outside the range or not passable reaches nothing.
    /// Returns the number of cells reached.
    pub fn search<P: Pather>(&mut self, pather: &P, start: Point, stop_at: Option<Point>) -> usize {
        self.reset();
        self.source = Some(start);

        let Some(si) = self.idx(start) else {
            debug!("bfs: start {start} outside {}", self.rng);
            return 0;
        };
        if !pather.passable(start) {
            debug!("bfs: start {start} is blocked");
            return 0;
        }
        let stop = stop_at.and_then(|p| self.idx(p));

        self.dist[si] = 0;
        let mut reached = 1;
        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(si);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = queue.pop_front() {
            if Some(ci) == stop {
                break;
            }
            let current_dist = self.dist[ci];
            let cp = self.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.dist[ni] != UNREACHABLE {
                    continue;
                }
                self.dist[ni] = current_dist + 1;
                self.incoming[ni] = Move::between(np, cp);
                queue.push_back(ni);
                reached += 1;
                trace!("bfs: {np} at distance {}", current_dist + 1);
            }
        }

        self.nbuf = nbuf;
        debug!("bfs: from {start} reached {reached} cells");
        reached
    }
}

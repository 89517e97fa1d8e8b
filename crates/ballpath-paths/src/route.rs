//! Route reconstruction and the one-shot [`find_shortest_path`] entry point.

use ballpath_core::{Grid, GridError, Point};
use log::{debug, error};

use crate::Pathfinder;
use crate::distance::manhattan;
use crate::moves::Move;
use crate::traits::Pather;

/// Outcome of a shortest-path query.
///
/// An unreachable target is a normal outcome, not an error: `reachable` is
/// `false`, `moves` is empty and `distance` is 0.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub reachable: bool,
    /// Moves in start-to-end order.
    pub moves: Vec<Move>,
    /// Number of moves.
    pub distance: usize,
}

impl Route {
    /// The "no path" outcome.
    pub fn unreachable() -> Self {
        Self::default()
    }

    fn reached(moves: Vec<Move>) -> Self {
        Self {
            reachable: true,
            distance: moves.len(),
            moves,
        }
    }

    /// Points visited when walking the route from `start`, both endpoints
    /// included. Empty for an unreachable route.
    pub fn positions(&self, start: Point) -> Vec<Point> {
        if !self.reachable {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(self.moves.len() + 1);
        out.push(start);
        let mut p = start;
        for m in &self.moves {
            p = m.apply(p);
            out.push(p);
        }
        out
    }
}

impl Pathfinder {
    /// Rebuild the shortest route from the last search's start to `end`.
    ///
    /// Walks backward from `end`, each time stepping to the neighbour whose
    /// distance is exactly one less (left, right, up, down wins ties), then
    /// reverses the collected moves.
    pub fn reconstruct(&self, end: Point) -> Route {
        let Some(mut d) = self.distance_at(end) else {
            return Route::unreachable();
        };

        let mut moves = Vec::with_capacity(d);
        let mut cur = end;
        while d > 0 {
            let prev = cur
                .neighbors_4()
                .into_iter()
                .find(|&np| self.distance_at(np) == Some(d - 1));
            let Some(prev) = prev else {
                error!("route: no predecessor for {cur} at distance {d}");
                return Route::unreachable();
            };
            match Move::between(prev, cur) {
                Some(m) => moves.push(m),
                None => return Route::unreachable(),
            }
            cur = prev;
            d -= 1;
        }
        moves.reverse();
        Route::reached(moves)
    }

    /// Search from `start`, stopping once `end` is reached, and rebuild the
    /// route to `end`.
    pub fn find_route<P: Pather>(&mut self, pather: &P, start: Point, end: Point) -> Route {
        self.search(pather, start, Some(end));
        let route = self.reconstruct(end);
        if route.reachable {
            debug!(
                "route: {start} -> {end} in {} steps (lower bound {})",
                route.distance,
                manhattan(start, end)
            );
        } else {
            debug!("route: {end} unreachable from {start}");
        }
        route
    }
}

/// Find the shortest orthogonal route between two cells of `grid`.
///
/// Fails only if `start` or `end` lies outside the grid. A blocked start or
/// end, or an end cut off from the start by balls, yields an unreachable
/// [`Route`].
pub fn find_shortest_path(grid: &Grid, start: Point, end: Point) -> Result<Route, GridError> {
    grid.check_bounds(start)?;
    grid.check_bounds(end)?;
    let mut pf = Pathfinder::new(grid.bounds());
    Ok(pf.find_route(grid, start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connected;
    use ballpath_core::{Range, build_grid};
    use rand::{Rng, RngExt, SeedableRng};

    fn grid(rows: &[&str]) -> Grid {
        let flags: Vec<Vec<bool>> = rows
            .iter()
            .map(|r| r.chars().map(|c| c == '1').collect())
            .collect();
        build_grid(rows[0].len() as i32, rows.len() as i32, &flags).unwrap()
    }

    /// Plain BFS distance, independent of the pathfinder.
    fn reference_distance(g: &Grid, start: Point, end: Point) -> Option<usize> {
        if !g.is_passable(start) {
            return None;
        }
        let mut seen = vec![start];
        let mut frontier = vec![start];
        let mut d = 0;
        while !frontier.is_empty() {
            if frontier.contains(&end) {
                return Some(d);
            }
            let mut next = Vec::new();
            for p in frontier {
                for np in p.neighbors_4() {
                    if g.is_passable(np) && !seen.contains(&np) {
                        seen.push(np);
                        next.push(np);
                    }
                }
            }
            frontier = next;
            d += 1;
        }
        None
    }

    fn random_grid(rng: &mut impl Rng, w: i32, h: i32) -> Grid {
        let rows: Vec<Vec<bool>> = (0..h)
            .map(|_| (0..w).map(|_| rng.random_range(0..10) < 3).collect())
            .collect();
        build_grid(w, h, &rows).unwrap()
    }

    #[test]
    fn start_equals_end() {
        let g = grid(&["000", "010"]);
        let r = find_shortest_path(&g, Point::new(2, 1), Point::new(2, 1)).unwrap();
        assert!(r.reachable);
        assert!(r.moves.is_empty());
        assert_eq!(r.distance, 0);
        assert_eq!(r.positions(Point::new(2, 1)), vec![Point::new(2, 1)]);
    }

    #[test]
    fn straight_corridor() {
        let g = grid(&["000"]);
        let r = find_shortest_path(&g, Point::new(0, 0), Point::new(2, 0)).unwrap();
        assert_eq!(r.moves, vec![Move::Right, Move::Right]);
        assert_eq!(r.distance, 2);
    }

    #[test]
    fn ties_prefer_left_right_up_down() {
        // Both "right then down" and "down then right" are shortest. Walking
        // back from the end, the left neighbour wins, so the last step is
        // Right and the route goes down first.
        let g = grid(&["00", "00"]);
        let r = find_shortest_path(&g, Point::new(0, 0), Point::new(1, 1)).unwrap();
        assert_eq!(r.moves, vec![Move::Down, Move::Right]);

        // From the top-right corner to the bottom-left, the right neighbour
        // of the end wins: route goes down first, then left.
        let r = find_shortest_path(&g, Point::new(1, 0), Point::new(0, 1)).unwrap();
        assert_eq!(r.moves, vec![Move::Down, Move::Left]);
    }

    #[test]
    fn tie_break_follows_open_side() {
        // Two grids, each leaving only one of the two shortest routes open.
        let upper = grid(&["00", "10"]);
        let r = find_shortest_path(&upper, Point::new(0, 0), Point::new(1, 1)).unwrap();
        assert_eq!(r.moves, vec![Move::Right, Move::Down]);

        let lower = grid(&["01", "00"]);
        let r = find_shortest_path(&lower, Point::new(0, 0), Point::new(1, 1)).unwrap();
        assert_eq!(r.moves, vec![Move::Down, Move::Right]);
    }

    #[test]
    fn detour_around_wall() {
        let g = grid(&["0000", "0110", "0000"]);
        let start = Point::new(1, 0);
        let end = Point::new(1, 2);
        let r = find_shortest_path(&g, start, end).unwrap();
        assert!(r.reachable);
        assert_eq!(r.distance, 4);
        assert_eq!(r.moves, vec![Move::Left, Move::Down, Move::Down, Move::Right]);
    }

    #[test]
    fn wall_row_separates_halves() {
        let g = grid(&["000", "111", "000"]);
        let r = find_shortest_path(&g, Point::new(0, 0), Point::new(0, 2)).unwrap();
        assert!(!r.reachable);
        assert!(r.moves.is_empty());
        assert_eq!(r.distance, 0);
        assert!(r.positions(Point::new(0, 0)).is_empty());
    }

    #[test]
    fn blocked_endpoints_are_unreachable() {
        let g = grid(&["100", "001"]);
        let r = find_shortest_path(&g, Point::new(0, 0), Point::new(2, 0)).unwrap();
        assert!(!r.reachable);
        let r = find_shortest_path(&g, Point::new(1, 0), Point::new(2, 1)).unwrap();
        assert!(!r.reachable);
        let r = find_shortest_path(&g, Point::new(0, 0), Point::new(0, 0)).unwrap();
        assert!(!r.reachable);
    }

    #[test]
    fn out_of_bounds_endpoints_rejected() {
        let g = grid(&["00", "00"]);
        let err = find_shortest_path(&g, Point::new(2, 0), Point::new(0, 0)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                point: Point::new(2, 0),
                bounds: Range::new(0, 0, 2, 2)
            }
        );
        assert!(find_shortest_path(&g, Point::new(0, 0), Point::new(0, -1)).is_err());
    }

    #[test]
    fn reconstruct_reuses_last_search() {
        let g = grid(&["000", "000", "000"]);
        let mut pf = Pathfinder::new(g.bounds());
        pf.search(&g, Point::new(1, 1), None);
        assert_eq!(pf.reconstruct(Point::new(1, 0)).moves, vec![Move::Up]);
        assert_eq!(pf.reconstruct(Point::new(0, 1)).moves, vec![Move::Left]);
        assert_eq!(pf.reconstruct(Point::new(2, 2)).distance, 2);
    }

    #[test]
    fn random_grids_agree_with_reference() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let w = rng.random_range(1..9);
            let h = rng.random_range(1..9);
            let g = random_grid(&mut rng, w, h);
            let start = Point::new(rng.random_range(0..w), rng.random_range(0..h));
            let end = Point::new(rng.random_range(0..w), rng.random_range(0..h));

            let r = find_shortest_path(&g, start, end).unwrap();
            let expected = reference_distance(&g, start, end);

            assert_eq!(r.reachable, expected.is_some());
            assert_eq!(r.reachable, connected(&g, start, end));
            if let Some(d) = expected {
                assert_eq!(r.distance, d);
                assert_eq!(r.moves.len(), d);
                assert!(r.distance as i32 >= manhattan(start, end));
                let path = r.positions(start);
                assert_eq!(path.last(), Some(&end));
                assert!(path.iter().all(|&p| g.is_passable(p)));
            }
        }
    }

    #[test]
    fn pathfinder_reuse_matches_fresh_searches() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let g = random_grid(&mut rng, 8, 6);
        let mut pf = Pathfinder::new(g.bounds());
        for _ in 0..50 {
            let start = Point::new(rng.random_range(0..8), rng.random_range(0..6));
            let end = Point::new(rng.random_range(0..8), rng.random_range(0..6));
            let reused = pf.find_route(&g, start, end);
            let fresh = find_shortest_path(&g, start, end).unwrap();
            assert_eq!(reused, fresh);
        }
    }
}

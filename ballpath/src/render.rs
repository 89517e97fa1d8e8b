//! Text and JSON presentation of a route.

use std::collections::HashMap;

use ballpath_core::{Cell, Grid, Point};
use ballpath_paths::Route;
use serde::Serialize;

/// Characters used when drawing the annotated grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub blocked: char,
    pub free: char,
    pub finish: char,
    /// Printed after every marker of a row.
    pub separator: &'static str,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            blocked: 'O',
            free: '1',
            finish: 'F',
            separator: "     ",
        }
    }
}

/// Draw the grid with one marker per cell, each followed by the separator.
///
/// Each route cell shows the move taken when leaving it and the end cell
/// shows the finish marker. An unreachable route draws the bare grid.
pub fn render_grid(grid: &Grid, start: Point, route: &Route, markers: &Markers) -> String {
    let path = route.positions(start);
    let mut overlay: HashMap<Point, char> = path
        .iter()
        .zip(&route.moves)
        .map(|(&p, m)| (p, m.marker()))
        .collect();
    if let Some(&end) = path.last() {
        overlay.insert(end, markers.finish);
    }

    let mut out = String::new();
    for (y, row) in grid.rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let p = Point::new(x as i32, y as i32);
            let ch = overlay.get(&p).copied().unwrap_or(match cell {
                Cell::Ball => markers.blocked,
                Cell::Free => markers.free,
            });
            out.push(ch);
            out.push_str(markers.separator);
        }
        out.push('\n');
    }
    out
}

/// The move list and step count, or the "no path" message.
pub fn render_summary(route: &Route) -> String {
    if !route.reachable {
        return "There is no path\n".to_string();
    }
    let moves: Vec<String> = route.moves.iter().map(|m| m.to_string()).collect();
    format!(
        "End point path: {}\nNumber of steps: {}\n",
        moves.join(", "),
        route.distance
    )
}

/// Full text report: the annotated grid (when requested and a route
/// exists) followed by the summary.
pub fn render_report(
    grid: &Grid,
    start: Point,
    route: &Route,
    markers: &Markers,
    show_grid: bool,
) -> String {
    let mut out = String::new();
    if show_grid && route.reachable {
        out.push_str(&render_grid(grid, start, route, markers));
    }
    out.push_str(&render_summary(route));
    out
}

/// Machine-readable report. Points are 0-indexed.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub width: i32,
    pub height: i32,
    pub start: Point,
    pub end: Point,
    pub route: &'a Route,
}

pub fn render_json(
    grid: &Grid,
    start: Point,
    end: Point,
    route: &Route,
) -> serde_json::Result<String> {
    let report = JsonReport {
        width: grid.width(),
        height: grid.height(),
        start,
        end,
        route,
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballpath_core::build_grid;
    use ballpath_paths::find_shortest_path;

    fn grid(rows: &[&str]) -> Grid {
        let flags: Vec<Vec<bool>> = rows
            .iter()
            .map(|r| r.chars().map(|c| c == '1').collect())
            .collect();
        build_grid(rows[0].len() as i32, rows.len() as i32, &flags).unwrap()
    }

    fn compact() -> Markers {
        Markers {
            separator: "",
            ..Markers::default()
        }
    }

    #[test]
    fn grid_marks_route_and_finish() {
        let g = grid(&["010", "000"]);
        let start = Point::new(0, 0);
        let route = find_shortest_path(&g, start, Point::new(2, 0)).unwrap();
        let text = render_grid(&g, start, &route, &compact());
        assert_eq!(text, "DOF\nRRU\n");
    }

    #[test]
    fn start_equals_end_shows_finish_only() {
        let g = grid(&["00"]);
        let start = Point::new(1, 0);
        let route = find_shortest_path(&g, start, start).unwrap();
        assert_eq!(render_grid(&g, start, &route, &compact()), "1F\n");
        assert_eq!(
            render_summary(&route),
            "End point path: \nNumber of steps: 0\n"
        );
    }

    #[test]
    fn default_separator_spacing() {
        let g = grid(&["01"]);
        let route = Route::unreachable();
        let text = render_grid(&g, Point::ZERO, &route, &Markers::default());
        assert_eq!(text, "1     O     \n");
    }

    #[test]
    fn default_layout_marks_route() {
        let g = grid(&["00", "10"]);
        let start = Point::new(0, 0);
        let route = find_shortest_path(&g, start, Point::new(1, 1)).unwrap();
        let text = render_grid(&g, start, &route, &Markers::default());
        assert_eq!(text, "R     D     \nO     F     \n");
    }

    #[test]
    fn summary_lists_moves() {
        let g = grid(&["000"]);
        let route = find_shortest_path(&g, Point::new(0, 0), Point::new(2, 0)).unwrap();
        assert_eq!(
            render_summary(&route),
            "End point path: R, R\nNumber of steps: 2\n"
        );
    }

    #[test]
    fn unreachable_report_has_no_grid() {
        let g = grid(&["010"]);
        let start = Point::new(0, 0);
        let route = find_shortest_path(&g, start, Point::new(2, 0)).unwrap();
        let text = render_report(&g, start, &route, &Markers::default(), true);
        assert_eq!(text, "There is no path\n");
    }

    #[test]
    fn report_can_skip_grid() {
        let g = grid(&["00"]);
        let start = Point::new(0, 0);
        let route = find_shortest_path(&g, start, Point::new(1, 0)).unwrap();
        let text = render_report(&g, start, &route, &Markers::default(), false);
        assert_eq!(text, "End point path: R\nNumber of steps: 1\n");
    }

    #[test]
    fn json_report_fields() {
        let g = grid(&["00"]);
        let start = Point::new(0, 0);
        let end = Point::new(1, 0);
        let route = find_shortest_path(&g, start, end).unwrap();
        let json = render_json(&g, start, end, &route).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["width"], 2);
        assert_eq!(v["end"]["x"], 1);
        assert_eq!(v["route"]["reachable"], true);
        assert_eq!(v["route"]["moves"][0], "Right");
        assert_eq!(v["route"]["distance"], 1);
    }
}

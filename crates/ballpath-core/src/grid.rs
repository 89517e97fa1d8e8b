//! The [`Grid`] type — an immutable 2D field of [`Cell`]s.
//!
//! A grid is built once with [`build_grid`] (or [`Grid::from_cells`]) and is
//! read-only afterwards. Search state never lives here, so any number of
//! searches can share one grid.

use std::fmt;

use crate::cell::Cell;
use crate::geom::{Point, Range};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Structural problems with a grid or with a query against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is not positive.
    InvalidSize { width: i32, height: i32 },
    /// The number of rows differs from the declared height.
    RowCount { expected: usize, found: usize },
    /// A row's length differs from the declared width.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The cell count differs from width × height.
    CellCount { expected: usize, found: usize },
    /// A query point lies outside the grid.
    OutOfBounds { point: Point, bounds: Range },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "grid size must be positive, got {width}x{height}")
            }
            Self::RowCount { expected, found } => {
                write!(f, "grid: expected {expected} rows, found {found}")
            }
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::CellCount { expected, found } => {
                write!(f, "grid: expected {expected} cells, found {found}")
            }
            Self::OutOfBounds { point, bounds } => {
                write!(f, "point {point} lies outside grid {bounds}")
            }
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular field of free and ball cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr", into = "GridRepr"))]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
}

/// Serialized form of a [`Grid`]; decoding validates the shape.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl From<Grid> for GridRepr {
    fn from(g: Grid) -> Self {
        Self {
            width: g.width(),
            height: g.height(),
            cells: g.cells,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(r: GridRepr) -> Result<Self, GridError> {
        if r.width <= 0 || r.height <= 0 {
            return Err(GridError::InvalidSize {
                width: r.width,
                height: r.height,
            });
        }
        let bounds = Range::new(0, 0, r.width, r.height);
        if r.cells.len() != bounds.len() {
            return Err(GridError::CellCount {
                expected: bounds.len(),
                found: r.cells.len(),
            });
        }
        Ok(Self {
            cells: r.cells,
            bounds,
        })
    }
}

/// Build a grid from rows of blocked flags (`true` = ball).
///
/// Fails if the size is not positive, if there are not exactly `height`
/// rows, or if any row does not hold exactly `width` flags.
pub fn build_grid(width: i32, height: i32, rows: &[Vec<bool>]) -> Result<Grid, GridError> {
    let cells = rows
        .iter()
        .map(|row| row.iter().copied().map(Cell::from_blocked).collect())
        .collect::<Vec<Vec<Cell>>>();
    Grid::from_cells(width, height, &cells)
}

impl Grid {
    /// Build a grid from rows of cells, validating its shape.
    pub fn from_cells(width: i32, height: i32, rows: &[Vec<Cell>]) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidSize { width, height });
        }
        let (w, h) = (width as usize, height as usize);
        if rows.len() != h {
            return Err(GridError::RowCount {
                expected: h,
                found: rows.len(),
            });
        }
        let mut cells = Vec::with_capacity(w * h);
        for (row, line) in rows.iter().enumerate() {
            if line.len() != w {
                return Err(GridError::RaggedRow {
                    row,
                    expected: w,
                    found: line.len(),
                });
            }
            cells.extend_from_slice(line);
        }
        Ok(Self {
            cells,
            bounds: Range::new(0, 0, width, height),
        })
    }

    /// The bounding range of the grid, always anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point` (width, height).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Return `Ok(())` if `p` is inside the grid, or an
    /// [`OutOfBounds`](GridError::OutOfBounds) error otherwise.
    pub fn check_bounds(&self, p: Point) -> Result<(), GridError> {
        if self.contains(p) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                point: p,
                bounds: self.bounds,
            })
        }
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.bounds.width() as usize + p.x as usize)
    }

    /// Get the cell at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is inside the grid and free of balls.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_passable)
    }

    /// Append the passable in-bounds neighbours of `p` into `buf`, in the
    /// order left, right, up, down. The caller clears `buf` before calling.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for np in p.neighbors_4() {
            if self.is_passable(np) {
                buf.push(np);
            }
        }
    }

    /// Number of cells holding a ball.
    pub fn count_blocked(&self) -> usize {
        self.cells.iter().filter(|c| c.is_blocked()).count()
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Iterate over the rows of the grid as cell slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.bounds.width() as usize)
    }
}

//! Grid file parsing.
//!
//! A grid file holds, one per line: the width, the height, the start and
//! end coordinates as 1-indexed `(x, y)` pairs (`x` = column), then
//! `height` rows of `width` characters from `{0, 1}`, optionally separated
//! by whitespace. `1` marks a ball. Blank lines between rows are ignored.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ballpath_core::{Grid, GridError, Point, build_grid};
use log::{debug, info};

/// A fully parsed grid file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridInput {
    pub grid: Grid,
    /// 0-indexed start point.
    pub start: Point,
    /// 0-indexed end point.
    pub end: Point,
}

/// Why a grid file could not be loaded.
#[derive(Debug)]
pub enum ParseError {
    /// The file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The file ended before the named field.
    MissingLine(&'static str),
    /// A width or height line is not an integer.
    Dimension { line: usize, text: String },
    /// A coordinate line is not an `(x, y)` pair of integers.
    Coordinate { line: usize, text: String },
    /// A grid row holds something other than `0`, `1` or whitespace.
    Cell { line: usize, ch: char },
    /// The rows do not form a valid grid, or an endpoint lies outside it.
    Grid(GridError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::MissingLine(what) => write!(f, "input ends before the {what} line"),
            Self::Dimension { line, text } => {
                write!(f, "line {line}: expected an integer, found {text:?}")
            }
            Self::Coordinate { line, text } => {
                write!(f, "line {line}: expected a coordinate like (x, y), found {text:?}")
            }
            Self::Cell { line, ch } => {
                write!(f, "line {line}: unexpected character {ch:?} in grid row")
            }
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ParseError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Read and parse a grid file.
pub fn load(path: &Path) -> Result<GridInput, ParseError> {
    let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let input = parse(&text)?;
    info!(
        "loaded {}x{} grid from {}",
        input.grid.width(),
        input.grid.height(),
        path.display()
    );
    Ok(input)
}

/// Parse the contents of a grid file.
pub fn parse(text: &str) -> Result<GridInput, ParseError> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));

    let width = parse_dimension(lines.next().ok_or(ParseError::MissingLine("width"))?)?;
    let height = parse_dimension(lines.next().ok_or(ParseError::MissingLine("height"))?)?;
    let start = parse_point(lines.next().ok_or(ParseError::MissingLine("start"))?)?;
    let end = parse_point(lines.next().ok_or(ParseError::MissingLine("end"))?)?;

    let mut rows = Vec::new();
    for (line, text) in lines {
        if text.is_empty() {
            continue;
        }
        rows.push(parse_row(line, text)?);
    }
    debug!("parsed {} grid rows", rows.len());

    let grid = build_grid(width, height, &rows)?;
    grid.check_bounds(start)?;
    grid.check_bounds(end)?;
    Ok(GridInput { grid, start, end })
}

fn parse_dimension((line, text): (usize, &str)) -> Result<i32, ParseError> {
    text.parse().map_err(|_| ParseError::Dimension {
        line,
        text: text.to_string(),
    })
}

/// Parse a 1-indexed `(x, y)` pair into a 0-indexed point. Brackets are
/// optional and the separator may be a comma, whitespace, or both.
fn parse_point((line, text): (usize, &str)) -> Result<Point, ParseError> {
    let err = || ParseError::Coordinate {
        line,
        text: text.to_string(),
    };
    let cleaned: String = text
        .chars()
        .filter(|&c| c != '(' && c != ')')
        .map(|c| if c == ',' { ' ' } else { c })
        .collect();
    let mut parts = cleaned.split_whitespace();
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(err());
    };
    let x: i32 = x.parse().map_err(|_| err())?;
    let y: i32 = y.parse().map_err(|_| err())?;
    Point::from_one_based(x, y).ok_or_else(err)
}

fn parse_row(line: usize, text: &str) -> Result<Vec<bool>, ParseError> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|ch| match ch {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(ParseError::Cell { line, ch }),
        })
        .collect()
}

//! Single orthogonal steps.

use std::fmt;

use ballpath_core::Point;

/// One orthogonal step on the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves in search priority order: left, right, up, down.
    pub const PRIORITY: [Move; 4] = [Move::Left, Move::Right, Move::Up, Move::Down];

    /// The offset this move applies to a point.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::Up => Point::new(0, -1),
            Self::Down => Point::new(0, 1),
            Self::Left => Point::new(-1, 0),
            Self::Right => Point::new(1, 0),
        }
    }

    /// The move that undoes this one.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Single-letter marker used in textual output.
    #[inline]
    pub const fn marker(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Down => 'D',
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }

    /// The move that steps from `from` to the adjacent point `to`, or `None`
    /// if the points are not orthogonal neighbours.
    pub fn between(from: Point, to: Point) -> Option<Self> {
        let d = to - from;
        Self::PRIORITY.into_iter().find(|m| m.delta() == d)
    }

    /// Apply the move to a point.
    #[inline]
    pub fn apply(self, p: Point) -> Point {
        p + self.delta()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

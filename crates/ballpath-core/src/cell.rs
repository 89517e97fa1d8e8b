//! The [`Cell`] type — the content of one grid square.

/// A grid square: either free or occupied by a ball.
///
/// Balls block movement; a blocked cell is never part of a route.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Free,
    Ball,
}

impl Cell {
    /// Build a cell from a blocked flag.
    #[inline]
    pub const fn from_blocked(blocked: bool) -> Self {
        if blocked { Self::Ball } else { Self::Free }
    }

    /// Whether the cell holds a ball.
    #[inline]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Ball)
    }

    /// Whether the cell can be stepped on.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !self.is_blocked()
    }
}

impl From<bool> for Cell {
    fn from(blocked: bool) -> Self {
        Self::from_blocked(blocked)
    }
}

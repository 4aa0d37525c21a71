//! Square type and coordinate conversions.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, represented as (row, col).
///
/// The fields are public so callers can carry raw coordinates around; every
/// rules entry point re-checks bounds with [`Square::is_on_board`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row, col))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    /// Returns true for the dark squares pieces are allowed to stand on
    #[inline]
    #[must_use]
    pub const fn is_playable(self) -> bool {
        self.is_on_board() && (self.0 + self.1) % 2 == 1
    }

    /// Get the square's index (0-63, row-major)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Create a square from an index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }

    /// The square `(row + dr, col + dc)`, if it is on the board
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Square> {
        let row = self.0.checked_add_signed(dr)?;
        let col = self.1.checked_add_signed(dc)?;
        Square::new(row, col)
    }

    /// Square halfway between two squares two diagonal steps apart
    #[inline]
    #[must_use]
    pub const fn midpoint(self, other: Square) -> Square {
        Square((self.0 + other.0) / 2, (self.1 + other.1) / 2)
    }

    /// Signed `(row delta, col delta)` from `self` to `other`
    #[inline]
    #[must_use]
    pub const fn delta_to(self, other: Square) -> (isize, isize) {
        (
            other.0 as isize - self.0 as isize,
            other.1 as isize - self.1 as isize,
        )
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl TryFrom<(isize, isize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (isize, isize)) -> Result<Self, Self::Error> {
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return Err(SquareError::OutOfBounds { row, col });
        }
        Ok(Square(row as usize, col as usize))
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(row, col).ok_or(SquareError::OutOfBounds {
            row: row as isize,
            col: col as isize,
        })
    }
}

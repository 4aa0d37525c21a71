//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Diagonal step directions as `(row delta, col delta)`, in enumeration order.
pub(crate) const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Player colors.
///
/// `Light` starts on rows 0-2 and advances toward row 7; `Dark` starts on
/// rows 5-7 and advances toward row 0. Light moves first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    /// Both colors in index order (Light=0, Dark=1)
    pub const BOTH: [Color; 2] = [Color::Light, Color::Dark];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Sign used by the raw material score (+1 for Dark, -1 for Light)
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Row delta of a forward step
    #[inline]
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Row on which a man of this color is crowned
    #[inline]
    #[must_use]
    pub const fn crowning_row(self) -> usize {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    /// Rows filled with this color in the opening layout
    #[inline]
    #[must_use]
    pub const fn home_rows(self) -> [usize; 3] {
        match self {
            Color::Light => [0, 1, 2],
            Color::Dark => [5, 6, 7],
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "Light"),
            Color::Dark => write!(f, "Dark"),
        }
    }
}

/// A checker: a man or a king of one color.
///
/// The color never changes. A man becomes a king once and stays one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    color: Color,
    is_king: bool,
}

impl Piece {
    /// Raw value of a man in the board's material score
    pub const MAN_VALUE: i32 = 1;
    /// Raw value of a king in the board's material score
    pub const KING_VALUE: i32 = 3;

    #[inline]
    #[must_use]
    pub const fn man(color: Color) -> Self {
        Piece {
            color,
            is_king: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn king(color: Color) -> Self {
        Piece {
            color,
            is_king: true,
        }
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        self.is_king
    }

    /// The same piece after crowning. Crowning a king is a no-op.
    #[inline]
    #[must_use]
    pub const fn crowned(self) -> Self {
        Piece::king(self.color)
    }

    /// Unsigned value in the board's material score
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        if self.is_king {
            Self::KING_VALUE
        } else {
            Self::MAN_VALUE
        }
    }

    /// Returns true if the piece may step or jump with the given row delta
    #[inline]
    #[must_use]
    pub const fn may_move_toward(self, row_delta: isize) -> bool {
        self.is_king || row_delta.signum() == self.color.forward()
    }

    /// Diagram character: `l`/`L` for Light, `d`/`D` for Dark (uppercase = king)
    #[must_use]
    pub const fn to_char(self) -> char {
        match (self.color, self.is_king) {
            (Color::Light, false) => 'l',
            (Color::Light, true) => 'L',
            (Color::Dark, false) => 'd',
            (Color::Dark, true) => 'D',
        }
    }

    /// Parse a diagram character
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            'l' => Some(Piece::man(Color::Light)),
            'L' => Some(Piece::king(Color::Light)),
            'd' => Some(Piece::man(Color::Dark)),
            'D' => Some(Piece::king(Color::Dark)),
            _ => None,
        }
    }
}

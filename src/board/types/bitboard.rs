//! Bitboard type and operations.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A 64-bit set of squares, bit index `row * 8 + col`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Squares with `(row + col)` odd, the only ones pieces may occupy
    pub const PLAYABLE: Bitboard = Bitboard(0x55AA_55AA_55AA_55AA);

    /// Create a bitboard with a single square set
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1 << (sq.0 * 8 + sq.1))
    }

    /// Returns an iterator over the squares set in this bitboard, in row-major order
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    /// Returns true if the bitboard is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count)
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given square is set. Off-board squares are never set.
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        sq.is_on_board() && (self.0 & (1 << (sq.0 * 8 + sq.1))) != 0
    }

    #[inline]
    pub fn set(&mut self, sq: Square) {
        self.0 |= Self::from_square(sq).0;
    }

    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.0 &= !Self::from_square(sq).0;
    }

    /// Bitwise AND
    #[inline]
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        Bitboard(self.0 & other.0)
    }

    /// Bitwise OR
    #[inline]
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Bitboard(self.0 | other.0)
    }

    /// Bitwise AND NOT
    #[inline]
    #[must_use]
    pub const fn without(self, other: Self) -> Self {
        Bitboard(self.0 & !other.0)
    }
}

fn pop_lsb(bb: &mut Bitboard) -> Square {
    let idx = bb.0.trailing_zeros() as usize;
    bb.0 &= bb.0 - 1;
    Square::from_index(idx)
}

/// Iterator over set squares in a Bitboard
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            Some(pop_lsb(&mut self.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playable_mask_matches_coloring() {
        for idx in 0..64 {
            let sq = Square::from_index(idx);
            assert_eq!(Bitboard::PLAYABLE.contains(sq), sq.is_playable(), "{sq}");
        }
        assert_eq!(Bitboard::PLAYABLE.popcount(), 32);
    }

    #[test]
    fn test_iter_is_row_major() {
        let mut bb = Bitboard::EMPTY;
        bb.set(Square(5, 0));
        bb.set(Square(0, 7));
        bb.set(Square(0, 1));
        let squares: Vec<Square> = bb.iter().collect();
        assert_eq!(squares, vec![Square(0, 1), Square(0, 7), Square(5, 0)]);
    }

    #[test]
    fn test_set_and_clear() {
        let mut bb = Bitboard::EMPTY;
        bb.set(Square(3, 2));
        assert!(bb.contains(Square(3, 2)));
        bb.clear(Square(3, 2));
        assert!(bb.is_empty());
    }
}

use once_cell::sync::Lazy;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::tables::HOME_SQUARES;
use super::{Bitboard, Color, Piece, Square};

static STARTING_BOARD: Lazy<Board> = Lazy::new(|| Board {
    occupied: *HOME_SQUARES,
    kings: Bitboard::EMPTY,
});

/// An 8x8 checkers board.
///
/// The board is a plain `Copy` value: search branches and previews work on
/// their own copy and never share state with the original.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) kings: Bitboard,
}

impl Board {
    /// The standard opening layout: Light on rows 0-2, Dark on rows 5-7
    #[must_use]
    pub fn new() -> Self {
        *STARTING_BOARD
    }

    /// A board with no pieces
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            occupied: [Bitboard::EMPTY; 2],
            kings: Bitboard::EMPTY,
        }
    }

    /// Piece on the given square, `None` for empty or off-board squares
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if !sq.is_on_board() {
            return None;
        }
        let color = Color::BOTH
            .into_iter()
            .find(|c| self.occupied[c.index()].contains(sq))?;
        if self.kings.contains(sq) {
            Some(Piece::king(color))
        } else {
            Some(Piece::man(color))
        }
    }

    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        !self.all_occupied().contains(sq)
    }

    pub(crate) fn all_occupied(&self) -> Bitboard {
        self.occupied[0].or(self.occupied[1])
    }

    /// Squares holding pieces of the given color
    #[must_use]
    pub fn pieces_of(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    #[must_use]
    pub fn piece_count(&self, color: Color) -> u32 {
        self.occupied[color.index()].popcount()
    }

    #[must_use]
    pub fn king_count(&self, color: Color) -> u32 {
        self.occupied[color.index()].and(self.kings).popcount()
    }

    /// Every piece on the board in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.all_occupied()
            .iter()
            .filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.remove_piece(sq);
        self.occupied[piece.color().index()].set(sq);
        if piece.is_king() {
            self.kings.set(sq);
        }
    }

    pub(crate) fn remove_piece(&mut self, sq: Square) {
        self.occupied[0].clear(sq);
        self.occupied[1].clear(sq);
        self.kings.clear(sq);
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_layout() {
        let board = Board::new();
        assert_eq!(board.piece_count(Color::Light), 12);
        assert_eq!(board.piece_count(Color::Dark), 12);
        assert_eq!(board.piece_at(Square(2, 1)), Some(Piece::man(Color::Light)));
        assert_eq!(board.piece_at(Square(5, 0)), Some(Piece::man(Color::Dark)));
        assert_eq!(board.piece_at(Square(0, 0)), None);
        for row in 3..5 {
            for col in 0..8 {
                assert!(board.is_empty(Square(row, col)));
            }
        }
    }

    #[test]
    fn test_pieces_only_on_playable_squares() {
        let board = Board::new();
        for (sq, _) in board.pieces() {
            assert!(sq.is_playable(), "{sq} is not playable");
        }
    }

    #[test]
    fn test_set_piece_replaces_occupant() {
        let mut board = Board::empty();
        board.set_piece(Square(3, 2), Piece::king(Color::Light));
        board.set_piece(Square(3, 2), Piece::man(Color::Dark));
        assert_eq!(board.piece_at(Square(3, 2)), Some(Piece::man(Color::Dark)));
        assert_eq!(board.piece_count(Color::Light), 0);
        assert_eq!(board.king_count(Color::Dark), 0);
    }

    #[test]
    fn test_off_board_lookup_is_none() {
        assert_eq!(Board::new().piece_at(Square(8, 1)), None);
    }
}

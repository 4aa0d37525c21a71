//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing a diagram.
//!
//! # Example
//! ```
//! use checkers_engine::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(2, 1), Piece::man(Color::Light))
//!     .piece(Square(3, 2), Piece::man(Color::Dark))
//!     .build()
//!     .unwrap();
//! assert_eq!(board.possible_captures(Square(2, 1)), vec![Square(4, 3)]);
//! ```

use super::{Board, Color, Piece, Square, SquareError};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the opening layout.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            pieces: Board::new().pieces().collect(),
        }
    }

    /// Place a piece, replacing anything already on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Place a man of the given color.
    #[must_use]
    pub fn man(self, square: Square, color: Color) -> Self {
        self.piece(square, Piece::man(color))
    }

    /// Place a king of the given color.
    #[must_use]
    pub fn king(self, square: Square, color: Color) -> Self {
        self.piece(square, Piece::king(color))
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board.
    ///
    /// Fails if any piece sits off the board or on a square with `(row + col)` even.
    pub fn build(self) -> Result<Board, SquareError> {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            if !square.is_on_board() {
                return Err(SquareError::OutOfBounds {
                    row: square.row() as isize,
                    col: square.col() as isize,
                });
            }
            if !square.is_playable() {
                return Err(SquareError::Unplayable { square });
            }
            board.set_piece(square, piece);
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build().unwrap();
        assert_eq!(built, Board::new());
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position()
            .clear(Square(2, 1))
            .build()
            .unwrap();
        assert!(board.piece_at(Square(2, 1)).is_none());
        assert!(board.piece_at(Square(2, 3)).is_some());
    }

    #[test]
    fn test_later_piece_wins() {
        let board = BoardBuilder::new()
            .man(Square(4, 3), Color::Light)
            .king(Square(4, 3), Color::Dark)
            .build()
            .unwrap();
        assert_eq!(board.piece_at(Square(4, 3)), Some(Piece::king(Color::Dark)));
    }

    #[test]
    fn test_rejects_unplayable_square() {
        let err = BoardBuilder::new()
            .man(Square(0, 0), Color::Light)
            .build()
            .unwrap_err();
        assert_eq!(err, SquareError::Unplayable { square: Square(0, 0) });
    }

    #[test]
    fn test_rejects_off_board_square() {
        let err = BoardBuilder::new()
            .man(Square(8, 1), Color::Light)
            .build()
            .unwrap_err();
        assert_eq!(err, SquareError::OutOfBounds { row: 8, col: 1 });
    }
}

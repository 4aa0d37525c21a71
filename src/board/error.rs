//! Error types for board operations.

use std::fmt;

use super::{Color, Square};

/// The five categories every rejected move falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveErrorKind {
    InvalidOrigin,
    InvalidDestination,
    IllegalDirection,
    MissingCaptureTarget,
    ForcedCaptureViolation,
}

/// Error type for rejected move requests.
///
/// A move that fails with any of these leaves the board untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Origin square lies off the board
    OriginOffBoard { from: Square },
    /// No piece on the origin square
    EmptyOrigin { from: Square },
    /// Origin holds a piece of the side not on move
    NotYourPiece { from: Square, to_move: Color },
    /// Destination square lies off the board
    DestinationOffBoard { to: Square },
    /// Destination square already holds a piece
    DestinationOccupied { to: Square },
    /// Destination is not one diagonal step or one diagonal jump away
    Unreachable { from: Square, to: Square },
    /// A man tried to move or jump away from its crowning row
    IllegalDirection { from: Square, to: Square },
    /// Jump midpoint is empty or holds a piece of the mover's color
    MissingCaptureTarget { over: Square },
    /// A capture is available but a different destination was requested
    ForcedCaptureViolation { from: Square, to: Square },
}

impl MoveError {
    /// Category of this error
    #[must_use]
    pub const fn kind(&self) -> MoveErrorKind {
        match self {
            MoveError::OriginOffBoard { .. }
            | MoveError::EmptyOrigin { .. }
            | MoveError::NotYourPiece { .. } => MoveErrorKind::InvalidOrigin,
            MoveError::DestinationOffBoard { .. }
            | MoveError::DestinationOccupied { .. }
            | MoveError::Unreachable { .. } => MoveErrorKind::InvalidDestination,
            MoveError::IllegalDirection { .. } => MoveErrorKind::IllegalDirection,
            MoveError::MissingCaptureTarget { .. } => MoveErrorKind::MissingCaptureTarget,
            MoveError::ForcedCaptureViolation { .. } => MoveErrorKind::ForcedCaptureViolation,
        }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OriginOffBoard { from } => {
                write!(f, "Start square {from} is off the board")
            }
            MoveError::EmptyOrigin { from } => {
                write!(f, "There is no piece on {from}")
            }
            MoveError::NotYourPiece { from, to_move } => {
                write!(f, "The piece on {from} does not belong to {to_move}, who is on move")
            }
            MoveError::DestinationOffBoard { to } => {
                write!(f, "Destination {to} is off the board")
            }
            MoveError::DestinationOccupied { to } => {
                write!(f, "Destination {to} is not empty")
            }
            MoveError::Unreachable { from, to } => {
                write!(f, "{to} is not a diagonal step or jump from {from}")
            }
            MoveError::IllegalDirection { from, to } => {
                write!(f, "Only kings may move backward ({from} to {to})")
            }
            MoveError::MissingCaptureTarget { over } => {
                write!(f, "No opposing piece on {over} to capture")
            }
            MoveError::ForcedCaptureViolation { from, to } => {
                write!(f, "A capture is available and must be taken instead of {from} to {to}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Coordinates outside the 8x8 board
    OutOfBounds { row: isize, col: isize },
    /// Square is on the board but not one pieces may stand on
    Unplayable { square: Square },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { row, col } => {
                write!(f, "Square ({row}, {col}) out of bounds (must be 0-7)")
            }
            SquareError::Unplayable { square } => {
                write!(f, "Square {square} is not a playable square")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for board diagram parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    /// Diagram must have exactly 8 non-empty rows
    WrongRowCount { found: usize },
    /// Each row must have exactly 8 cells
    WrongRowLength { row: usize, found: usize },
    /// Unknown cell character
    InvalidPiece { char: char },
    /// Piece placed on a square with `(row + col)` even
    UnplayableSquare { square: Square },
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramError::WrongRowCount { found } => {
                write!(f, "Diagram must have 8 rows, found {found}")
            }
            DiagramError::WrongRowLength { row, found } => {
                write!(f, "Diagram row {row} must have 8 cells, found {found}")
            }
            DiagramError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in diagram")
            }
            DiagramError::UnplayableSquare { square } => {
                write!(f, "Piece on unplayable square {square}")
            }
        }
    }
}

impl std::error::Error for DiagramError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_groups_origin_errors() {
        let errs = [
            MoveError::OriginOffBoard { from: Square(8, 0) },
            MoveError::EmptyOrigin { from: Square(3, 0) },
            MoveError::NotYourPiece {
                from: Square(5, 0),
                to_move: Color::Light,
            },
        ];
        for err in errs {
            assert_eq!(err.kind(), MoveErrorKind::InvalidOrigin);
        }
    }

    #[test]
    fn test_kind_groups_destination_errors() {
        let errs = [
            MoveError::DestinationOffBoard { to: Square(9, 9) },
            MoveError::DestinationOccupied { to: Square(3, 2) },
            MoveError::Unreachable {
                from: Square(2, 1),
                to: Square(2, 3),
            },
        ];
        for err in errs {
            assert_eq!(err.kind(), MoveErrorKind::InvalidDestination);
        }
    }

    #[test]
    fn test_forced_capture_message() {
        let err = MoveError::ForcedCaptureViolation {
            from: Square(2, 1),
            to: Square(3, 2),
        };
        assert_eq!(err.kind(), MoveErrorKind::ForcedCaptureViolation);
        assert!(err.to_string().contains("must be taken"));
    }

    #[test]
    fn test_missing_target_message() {
        let err = MoveError::MissingCaptureTarget { over: Square(3, 2) };
        assert!(err.to_string().contains("(3, 2)"));
    }

    #[test]
    fn test_square_error_display() {
        let err = SquareError::OutOfBounds { row: 4, col: -1 };
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_diagram_error_display() {
        let err = DiagramError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }
}

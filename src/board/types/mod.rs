//! Core checkers types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - men, kings and the two sides
//! - `Square` - (row, col) board coordinates
//! - `Bitboard` - 64-bit square sets
//! - `Move` and `MoveList` - move representation

mod bitboard;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::DIAGONALS;

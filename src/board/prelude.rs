//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use checkers_engine::board::prelude::*;
//! ```

pub use super::{
    find_best_move, Board, BoardBuilder, Color, ForcedCapture, Move, MoveError, MoveErrorKind,
    MoveList, MoveOutcome, Piece, Rules, SearchParams, SearchState, Square,
};

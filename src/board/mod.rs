//! Checkers board representation and rules.
//!
//! Uses per-color bitboards for occupancy and a shared king bitboard. The
//! board is a `Copy` value, so previews and search branches work on copies.
//!
//! # Example
//! ```
//! use checkers_engine::board::{Board, Color, Rules, Square};
//!
//! let mut board = Board::new();
//! let rules = Rules::default();
//! let moves = board.generate_moves(Color::Light, &rules);
//! println!("Light has {} opening moves", moves.len());
//!
//! board.try_move(Square(2, 1), Square(3, 0), &rules).unwrap();
//! assert!(board.piece_at(Square(3, 0)).is_some());
//! ```

mod builder;
mod diagram;
mod error;
mod eval;
mod make_move;
mod movegen;
pub mod prelude;
mod rules;
pub mod search;
mod state;
mod tables;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{DiagramError, MoveError, MoveErrorKind, SquareError};
pub use make_move::MoveOutcome;
pub use rules::{ForcedCapture, Rules};
pub use state::Board;
pub use types::{Bitboard, BitboardIter, Color, Move, MoveList, MoveListIntoIter, Piece, Square};

// Public API - search functions and configuration
pub use search::{
    find_best_move, minimax, parallel_search, search, EvalKind, MoveSource, SearchInfo,
    SearchLogger, SearchParams, SearchResult, SearchState, SearchStats, StdoutLogger, INFINITY,
};
#[cfg(feature = "logging")]
pub use search::LogLogger;

pub(crate) use types::DIAGONALS;

pub mod board;
pub mod game;

pub use board::{Board, Color, Move, MoveError, Piece, Rules, Square};
pub use game::{GameConfig, GameState, GameStatus};

//! Game state: a board plus the side on move.
//!
//! This is the surface a front end drives. It validates that the requested
//! piece belongs to the side on move, applies accepted moves, passes the
//! turn, and asks the search for the computer's reply.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    find_best_move, Board, Color, Move, MoveError, MoveOutcome, Rules, SearchParams, SearchState,
    Square,
};

/// Current game status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(Color),
    /// Neither side can move
    Drawn,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(color) => write!(f, "{color} wins"),
            GameStatus::Drawn => write!(f, "Drawn"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub rules: Rules,
    /// Side played by the engine, `None` for two human players
    pub computer: Option<Color>,
    pub search: SearchParams,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rules: Rules::default(),
            computer: Some(Color::Dark),
            search: SearchParams::default(),
        }
    }
}

pub struct GameState {
    board: Board,
    to_move: Color,
    computer: Option<Color>,
    search: SearchState,
}

impl GameState {
    /// New game from the opening layout, Light to move
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::from_board(Board::new(), Color::Light, config)
    }

    #[must_use]
    pub fn from_board(board: Board, to_move: Color, config: GameConfig) -> Self {
        GameState {
            board,
            to_move,
            computer: config.computer,
            search: SearchState::new(config.search).with_rules(config.rules),
        }
    }

    /// Read-only view of the current position
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.to_move
    }

    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.search.rules
    }

    #[must_use]
    pub fn computer(&self) -> Option<Color> {
        self.computer
    }

    /// Search state used for computer moves (statistics, logger)
    pub fn search_state_mut(&mut self) -> &mut SearchState {
        &mut self.search
    }

    /// Returns true if the engine plays the side on move and the game is not over
    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        self.computer == Some(self.to_move) && self.status() == GameStatus::InProgress
    }

    /// Destinations `play` accepts for the piece on `from`, for move
    /// highlighting and hints.
    ///
    /// When the piece has a capture only capture destinations are returned.
    /// Unlike [`Board::destinations`], backward squares of a man are never
    /// offered.
    #[must_use]
    pub fn hint(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.board.piece_at(from) else {
            return Vec::new();
        };
        self.board
            .generate_moves(piece.color(), &self.search.rules)
            .iter()
            .filter(|mv| mv.from() == from)
            .map(|mv| mv.to())
            .collect()
    }

    /// Legal moves for the side on move
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board
            .generate_moves(self.to_move, &self.search.rules)
            .into_iter()
            .collect()
    }

    /// Move a piece of the side on move and pass the turn.
    pub fn play(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        if let Some(piece) = self.board.piece_at(from) {
            if piece.color() != self.to_move {
                return Err(MoveError::NotYourPiece {
                    from,
                    to_move: self.to_move,
                });
            }
        }
        let outcome = self.board.try_move(from, to, &self.search.rules)?;
        self.to_move = self.to_move.opponent();
        Ok(outcome)
    }

    /// Let the engine move if it plays the side on move.
    ///
    /// Returns `Ok(None)` when it is not the engine's turn, the game is over,
    /// or the search finds no move. A searched move that fails to apply is
    /// returned as the error.
    pub fn computer_move(&mut self) -> Result<Option<MoveOutcome>, MoveError> {
        if !self.is_computer_turn() {
            return Ok(None);
        }
        let Some(mv) = find_best_move(&self.board, self.to_move, &mut self.search) else {
            return Ok(None);
        };
        match self.play(mv.from(), mv.to()) {
            Ok(outcome) => Ok(Some(outcome)),
            Err(err) => {
                #[cfg(feature = "logging")]
                ::log::error!("engine move {} rejected: {}", mv, err);
                Err(err)
            }
        }
    }

    /// Win, draw or still in progress.
    ///
    /// A side with no pieces loses. Otherwise a side without a move `play`
    /// would accept loses, and if neither side has one the game is drawn.
    /// This can end the game earlier than [`Board::is_game_over`], which
    /// also counts backward steps of men as mobility.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        for color in Color::BOTH {
            if self.board.piece_count(color) == 0 {
                return GameStatus::Won(color.opponent());
            }
        }
        let rules = &self.search.rules;
        let mover_blocked = self.board.generate_moves(self.to_move, rules).is_empty();
        let other_blocked = self
            .board
            .generate_moves(self.to_move.opponent(), rules)
            .is_empty();
        match (mover_blocked, other_blocked) {
            (false, false) => GameStatus::InProgress,
            (true, true) => GameStatus::Drawn,
            (true, false) => GameStatus::Won(self.to_move.opponent()),
            (false, true) => GameStatus::Won(self.to_move),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new(GameConfig::default())
    }
}

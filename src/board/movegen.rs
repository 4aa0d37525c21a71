//! Move and capture enumeration.
//!
//! Destinations are produced in direction order `(-1,-1), (-1,1), (1,-1), (1,1)`
//! and side-wide lists in row-major board order.
//!
//! Per-square enumeration scans all four diagonals for every piece, men
//! included. The forced-capture check and terminal detection are built on
//! it, so a man with only a backward capture must still "take" and a man
//! with only backward steps still counts as able to move. The direction
//! rule is applied by move validation and by [`Board::generate_moves`].

use super::tables::{JUMPS, STEPS};
use super::{Board, Color, ForcedCapture, Move, MoveList, Rules, Square};

impl Board {
    /// Candidate moves for the piece on `from` in all four directions,
    /// optionally captures only.
    ///
    /// Returns an empty list for an empty or off-board square. Men get
    /// backward entries too and quiet moves are listed even when the piece
    /// also has a capture; use [`Board::generate_moves`] for the set
    /// `try_move` accepts.
    #[must_use]
    pub fn moves_from(&self, from: Square, captures_only: bool) -> MoveList {
        let mut moves = MoveList::new();
        let Some(piece) = self.piece_at(from) else {
            return moves;
        };
        let idx = from.as_index();
        let opponent = self.pieces_of(piece.color().opponent());

        for (step, jump) in STEPS[idx].iter().zip(JUMPS[idx].iter()) {
            let Some(step) = *step else {
                continue;
            };
            if self.is_empty(step) {
                if !captures_only {
                    moves.push(Move::quiet(from, step));
                }
            } else if opponent.contains(step) {
                if let Some(landing) = *jump {
                    if self.is_empty(landing) {
                        moves.push(Move::capture(from, landing));
                    }
                }
            }
        }
        moves
    }

    /// Destination squares reachable from `from`, optionally captures only
    #[must_use]
    pub fn destinations(&self, from: Square, captures_only: bool) -> Vec<Square> {
        self.moves_from(from, captures_only)
            .iter()
            .map(|mv| mv.to())
            .collect()
    }

    /// Landing squares of the captures available to the piece on `from`
    #[must_use]
    pub fn possible_captures(&self, from: Square) -> Vec<Square> {
        self.destinations(from, true)
    }

    /// Returns true if any piece of `color` has a capture
    #[must_use]
    pub fn any_captures_available(&self, color: Color) -> bool {
        self.pieces_of(color)
            .iter()
            .any(|sq| !self.moves_from(sq, true).is_empty())
    }

    /// Returns true if any piece of `color` has a capture it may actually
    /// take, i.e. one in a direction its kind allows
    #[must_use]
    pub fn any_legal_captures(&self, color: Color) -> bool {
        self.pieces_of(color)
            .iter()
            .any(|sq| self.moves_from(sq, true).iter().any(|mv| self.in_legal_direction(*mv)))
    }

    /// Every move `try_move` accepts for `color` under `rules`.
    ///
    /// A piece with a capture contributes only its captures, and of those
    /// only the ones in a direction it may move. A man whose only capture
    /// is backward therefore contributes nothing. With
    /// [`ForcedCapture::SideWide`], any legal capture on the board removes
    /// every quiet move.
    #[must_use]
    pub fn generate_moves(&self, color: Color, rules: &Rules) -> MoveList {
        let mut moves = MoveList::new();
        let mut any_capture = false;
        for sq in self.pieces_of(color).iter() {
            let piece_moves = self.moves_from(sq, false);
            let has_capture = piece_moves.iter().any(|mv| mv.is_capture());
            for mv in piece_moves {
                if mv.is_capture() == has_capture && self.in_legal_direction(mv) {
                    any_capture |= mv.is_capture();
                    moves.push(mv);
                }
            }
        }
        if any_capture && rules.forced_capture == ForcedCapture::SideWide {
            moves.retain(|mv| mv.is_capture());
        }
        moves
    }

    fn in_legal_direction(&self, mv: Move) -> bool {
        let (dr, _) = mv.from().delta_to(mv.to());
        self.piece_at(mv.from())
            .is_some_and(|piece| piece.may_move_toward(dr))
    }

    /// Returns true if some piece of `color` has an enumerated move.
    ///
    /// This is the terminal-detection notion of mobility; it can be true
    /// while [`Board::generate_moves`] is empty.
    #[must_use]
    pub fn has_moves(&self, color: Color) -> bool {
        self.pieces_of(color)
            .iter()
            .any(|sq| !self.moves_from(sq, false).is_empty())
    }

    /// One-step moves into empty squares in all four directions for every
    /// piece of `color`, ignoring direction and capture rules.
    ///
    /// Some of these are rejected by `try_move`; callers are expected to
    /// apply them on a copy and skip the failures.
    #[must_use]
    pub fn quiet_candidates(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for sq in self.pieces_of(color).iter() {
            for step in STEPS[sq.as_index()].iter().flatten() {
                if self.is_empty(*step) {
                    moves.push(Move::quiet(sq, *step));
                }
            }
        }
        moves
    }
}

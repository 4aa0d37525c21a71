//! Move validation and application.
//!
//! Every request is fully validated against an immutable view of the board
//! before anything is written, so a rejected move never leaves a trace.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, ForcedCapture, Move, MoveError, Piece, Rules, Square};

/// What happened when a move was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveOutcome {
    pub mv: Move,
    /// The piece removed by a capture
    pub captured: Option<Piece>,
    /// True if the moving man reached its crowning row on this move
    pub crowned: bool,
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.captured.is_some() {
            write!(f, "Capture completed")?;
        } else {
            write!(f, "Move completed")?;
        }
        if self.crowned {
            write!(f, ", piece crowned")?;
        }
        write!(f, ".")
    }
}

impl Board {
    /// Check a move request without touching the board.
    ///
    /// On success returns the move, tagged as a capture when it jumps.
    pub fn validate_move(&self, from: Square, to: Square, rules: &Rules) -> Result<Move, MoveError> {
        self.validate(from, to, rules).map(|(mv, _)| mv)
    }

    fn validate(&self, from: Square, to: Square, rules: &Rules) -> Result<(Move, Piece), MoveError> {
        if !from.is_on_board() {
            return Err(MoveError::OriginOffBoard { from });
        }
        let piece = self.piece_at(from).ok_or(MoveError::EmptyOrigin { from })?;
        if !to.is_on_board() {
            return Err(MoveError::DestinationOffBoard { to });
        }
        let (dr, dc) = from.delta_to(to);

        // Captures are enumerated in all four directions, so a man can be
        // held by a backward capture it is not allowed to take.
        let captures = self.moves_from(from, true);
        if !captures.is_empty() {
            let mv = captures
                .iter()
                .copied()
                .find(|mv| mv.to() == to)
                .ok_or(MoveError::ForcedCaptureViolation { from, to })?;
            if !piece.may_move_toward(dr) {
                return Err(MoveError::IllegalDirection { from, to });
            }
            return Ok((mv, piece));
        }
        if rules.forced_capture == ForcedCapture::SideWide && self.any_legal_captures(piece.color()) {
            return Err(MoveError::ForcedCaptureViolation { from, to });
        }

        if !self.is_empty(to) {
            return Err(MoveError::DestinationOccupied { to });
        }

        match (dr.abs(), dc.abs()) {
            (1, 1) => {
                if !piece.may_move_toward(dr) {
                    return Err(MoveError::IllegalDirection { from, to });
                }
                Ok((Move::quiet(from, to), piece))
            }
            (2, 2) => {
                if !piece.may_move_toward(dr) {
                    return Err(MoveError::IllegalDirection { from, to });
                }
                // A valid jump would already be in `captures`.
                Err(MoveError::MissingCaptureTarget {
                    over: from.midpoint(to),
                })
            }
            _ => Err(MoveError::Unreachable { from, to }),
        }
    }

    /// Attempt to move the piece on `from` to `to`.
    ///
    /// Either the whole move is applied (relocation, capture removal,
    /// crowning) or the board is left exactly as it was.
    pub fn try_move(&mut self, from: Square, to: Square, rules: &Rules) -> Result<MoveOutcome, MoveError> {
        let (mv, piece) = self.validate(from, to, rules)?;
        Ok(self.apply(mv, piece))
    }

    /// Apply a generated move, re-validating it first
    pub fn make_move(&mut self, mv: Move, rules: &Rules) -> Result<MoveOutcome, MoveError> {
        self.try_move(mv.from(), mv.to(), rules)
    }

    /// Copy of the board with the move applied; `self` is not modified
    pub fn after(&self, mv: Move, rules: &Rules) -> Result<(Board, MoveOutcome), MoveError> {
        let mut next = *self;
        let outcome = next.make_move(mv, rules)?;
        Ok((next, outcome))
    }

    /// Write a validated move; `piece` is the piece standing on `mv.from()`.
    fn apply(&mut self, mv: Move, mut piece: Piece) -> MoveOutcome {
        let from = mv.from();
        let to = mv.to();
        debug_assert_eq!(self.piece_at(from), Some(piece));
        let mut outcome = MoveOutcome {
            mv,
            captured: None,
            crowned: false,
        };

        if let Some(over) = mv.captured_square() {
            outcome.captured = self.piece_at(over);
            self.remove_piece(over);
        }

        self.remove_piece(from);
        if !piece.is_king() && to.row() == piece.color().crowning_row() {
            piece = piece.crowned();
            outcome.crowned = true;
            #[cfg(feature = "logging")]
            ::log::debug!("{} piece crowned on {}", piece.color(), to);
        }
        self.set_piece(to, piece);
        outcome
    }
}

//! Text diagrams of a position.
//!
//! A diagram has eight lines, row 0 first, each with eight cells: `.` for an
//! empty square, `l`/`L` for a Light man/king and `d`/`D` for a Dark
//! man/king. Spaces inside a line are ignored and blank lines are skipped.
//!
//! ```text
//! .l.l.l.l
//! l.l.l.l.
//! .l.l.l.l
//! ........
//! ........
//! d.d.d.d.
//! .d.d.d.d
//! d.d.d.d.
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::DiagramError;
use super::{Board, Piece, Square};

impl Board {
    /// Parse a board from a text diagram.
    pub fn from_diagram(diagram: &str) -> Result<Self, DiagramError> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<char>>())
            .filter(|cells| !cells.is_empty())
            .collect();

        if rows.len() != 8 {
            return Err(DiagramError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != 8 {
                return Err(DiagramError::WrongRowLength {
                    row,
                    found: cells.len(),
                });
            }
            for (col, &c) in cells.iter().enumerate() {
                if c == '.' {
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(DiagramError::InvalidPiece { char: c })?;
                let square = Square(row, col);
                if !square.is_playable() {
                    return Err(DiagramError::UnplayableSquare { square });
                }
                board.set_piece(square, piece);
            }
        }
        Ok(board)
    }

    /// Render the board as a text diagram, one row per line
    #[must_use]
    pub fn to_diagram(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in 0..8 {
            for col in 0..8 {
                let c = self.piece_at(Square(row, col)).map_or('.', Piece::to_char);
                out.push(c);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_diagram())
    }
}

impl FromStr for Board {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_diagram(s)
    }
}

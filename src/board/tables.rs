//! Per-square diagonal step and jump tables.
//!
//! Entries are indexed by square index then by direction, in the order of
//! [`DIAGONALS`]. Off-board targets are `None`.

use once_cell::sync::Lazy;

use super::{Bitboard, Square, DIAGONALS};

/// One diagonal step from each square
pub(crate) static STEPS: Lazy<[[Option<Square>; 4]; 64]> = Lazy::new(|| {
    let mut steps = [[None; 4]; 64];
    for (idx, entry) in steps.iter_mut().enumerate() {
        let sq = Square::from_index(idx);
        for (dir, (dr, dc)) in DIAGONALS.iter().enumerate() {
            entry[dir] = sq.offset(*dr, *dc);
        }
    }
    steps
});

/// Jump landing squares from each square; the jumped square is `STEPS` in the same direction
pub(crate) static JUMPS: Lazy<[[Option<Square>; 4]; 64]> = Lazy::new(|| {
    let mut jumps = [[None; 4]; 64];
    for (idx, entry) in jumps.iter_mut().enumerate() {
        let sq = Square::from_index(idx);
        for (dir, (dr, dc)) in DIAGONALS.iter().enumerate() {
            entry[dir] = sq.offset(2 * dr, 2 * dc);
        }
    }
    jumps
});

/// Playable squares of the opening layout, per color index
pub(crate) static HOME_SQUARES: Lazy<[Bitboard; 2]> = Lazy::new(|| {
    let mut home = [Bitboard::EMPTY; 2];
    for color in super::Color::BOTH {
        for row in color.home_rows() {
            for col in ((row + 1) % 2..8).step_by(2) {
                home[color.index()].set(Square(row, col));
            }
        }
    }
    home
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    #[test]
    fn test_corner_has_single_step() {
        let steps = STEPS[Square(0, 7).as_index()];
        let on_board: Vec<Square> = steps.iter().flatten().copied().collect();
        assert_eq!(on_board, vec![Square(1, 6)]);
    }

    #[test]
    fn test_jump_lines_up_with_step() {
        let idx = Square(3, 4).as_index();
        for dir in 0..4 {
            let step = STEPS[idx][dir].unwrap();
            let jump = JUMPS[idx][dir].unwrap();
            assert_eq!(Square(3, 4).midpoint(jump), step);
        }
    }

    #[test]
    fn test_home_squares_are_playable() {
        for color in Color::BOTH {
            let home = HOME_SQUARES[color.index()];
            assert_eq!(home.popcount(), 12);
            assert!(home.without(Bitboard::PLAYABLE).is_empty());
        }
    }
}

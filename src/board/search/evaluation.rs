use super::EvalKind;
use crate::board::{Board, Color};

/// Extra weight of a king over a man in the king-weighted evaluator
const KING_BONUS: i32 = 2;

impl EvalKind {
    /// Score `board` from `perspective`'s point of view; higher is better for that side.
    #[must_use]
    pub fn score(self, board: &Board, perspective: Color) -> i32 {
        match self {
            EvalKind::KingWeighted => {
                let material = |color: Color| {
                    board.piece_count(color) as i32 + KING_BONUS * board.king_count(color) as i32
                };
                material(perspective) - material(perspective.opponent())
            }
            EvalKind::Material => perspective.sign() * board.evaluate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, Square};

    #[test]
    fn test_start_is_balanced() {
        let board = Board::new();
        for color in Color::BOTH {
            assert_eq!(EvalKind::KingWeighted.score(&board, color), 0);
            assert_eq!(EvalKind::Material.score(&board, color), 0);
        }
    }

    #[test]
    fn test_king_weighting() {
        let board = BoardBuilder::new()
            .king(Square(0, 1), Color::Dark)
            .man(Square(2, 1), Color::Light)
            .man(Square(2, 3), Color::Light)
            .build()
            .unwrap();
        // Dark: 1 piece + 2 for the king = 3, Light: 2
        assert_eq!(EvalKind::KingWeighted.score(&board, Color::Dark), 1);
        assert_eq!(EvalKind::KingWeighted.score(&board, Color::Light), -1);
        // Raw: king 3 vs two men
        assert_eq!(EvalKind::Material.score(&board, Color::Dark), 1);
        assert_eq!(EvalKind::Material.score(&board, Color::Light), -1);
    }
}

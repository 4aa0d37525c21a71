use super::{Board, Color};

impl Board {
    /// Raw material score: men count 1, kings 3, Dark positive and Light negative.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        self.pieces()
            .map(|(_, piece)| piece.color().sign() * piece.value())
            .sum()
    }

    /// The game is over once either side has no pieces or no legal moves.
    ///
    /// Both sides are checked regardless of who is on move.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        Color::BOTH
            .into_iter()
            .any(|color| self.piece_count(color) == 0 || !self.has_moves(color))
    }
}

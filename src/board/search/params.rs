#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which moves the search expands at each node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveSource {
    /// Every legal move, captures included
    #[default]
    Legal,
    /// One-step candidates in all four directions, applied through move
    /// validation and skipped when rejected. Captures are never expanded,
    /// and a piece that has a capture cannot move at all.
    QuietOnly,
}

/// Static evaluator used at leaves and cutoffs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EvalKind {
    /// Piece count plus two per king, own side minus opponent
    #[default]
    KingWeighted,
    /// The board's raw material score (men 1, kings 3) seen from the searching side
    Material,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchParams {
    /// Plies to look ahead
    pub depth: u32,
    pub move_source: MoveSource,
    pub eval: EvalKind,
    /// Pick uniformly among equally scored root moves instead of the first
    pub randomize_ties: bool,
    /// Seed for tie randomization
    pub seed: u64,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: 5,
            move_source: MoveSource::Legal,
            eval: EvalKind::KingWeighted,
            randomize_ties: false,
            seed: 0,
        }
    }
}

impl SearchParams {
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        SearchParams {
            depth,
            ..Default::default()
        }
    }
}

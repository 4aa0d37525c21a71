//! Search module implementing fixed-depth minimax with alpha-beta pruning.
//!
//! Features:
//! - Explicit maximizing/minimizing layers for the searching color
//! - Each child is searched on its own copy of the board
//! - Generator order move ordering (row-major squares, then directions)
//! - Optional random choice among equally scored root moves
//! - Parallel root splitting across scoped threads

mod evaluation;
mod log;
mod params;
pub mod smp;

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Board, Color, Move, MoveList, Rules};
pub use self::log::{SearchInfo, SearchLogger, StdoutLogger};
#[cfg(feature = "logging")]
pub use self::log::LogLogger;
pub use params::{EvalKind, MoveSource, SearchParams};
pub use smp::parallel_search;

/// Bound larger than any reachable evaluation
pub const INFINITY: i32 = 1_000_000;

/// Result of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found, `None` at depth 0 or in a finished game
    pub best_move: Option<Move>,
    /// Value of the root from the searching color's point of view
    pub score: i32,
    /// Nodes visited, root included
    pub nodes: u64,
}

/// Statistics tracked during search
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub total_nodes: u64,
    pub searches: u64,
}

impl SearchStats {
    pub fn reset_search(&mut self) {
        self.nodes = 0;
    }
}

/// Search state persisted across searches
pub struct SearchState {
    pub params: SearchParams,
    pub rules: Rules,
    pub stats: SearchStats,
    rng: StdRng,
    logger: Option<Box<dyn SearchLogger>>,
}

impl SearchState {
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        let rng = StdRng::seed_from_u64(params.seed);
        SearchState {
            params,
            rules: Rules::default(),
            stats: SearchStats::default(),
            rng,
            logger: None,
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    pub fn set_logger(&mut self, logger: Box<dyn SearchLogger>) {
        self.logger = Some(logger);
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn set_params(&mut self, params: SearchParams) {
        if params.seed != self.params.seed {
            self.rng = StdRng::seed_from_u64(params.seed);
        }
        self.params = params;
    }

    pub(crate) fn record(&mut self, color: Color, result: &SearchResult, started: Instant) {
        self.stats.nodes = result.nodes;
        self.stats.total_nodes += result.nodes;
        self.stats.searches += 1;

        #[cfg(feature = "logging")]
        ::log::debug!(
            "{} searched {} nodes at depth {}, best {:?} scoring {}",
            color,
            result.nodes,
            self.params.depth,
            result.best_move,
            result.score
        );

        if let Some(logger) = &self.logger {
            logger.info(&SearchInfo {
                color,
                depth: self.params.depth,
                score: result.score,
                nodes: result.nodes,
                time_ms: started.elapsed().as_millis(),
                best_move: result.best_move,
            });
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState::new(SearchParams::default())
    }
}

/// Search context for a single search
pub(crate) struct SearchContext<'a> {
    /// The maximizing color
    pub color: Color,
    pub params: &'a SearchParams,
    pub rules: &'a Rules,
    pub nodes: u64,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(color: Color, params: &'a SearchParams, rules: &'a Rules) -> Self {
        SearchContext {
            color,
            params,
            rules,
            nodes: 0,
        }
    }

    fn leaf_score(&self, board: &Board) -> i32 {
        self.params.eval.score(board, self.color)
    }

    /// Candidate moves for `mover`; some may be rejected when applied
    fn candidates(&self, board: &Board, mover: Color) -> MoveList {
        match self.params.move_source {
            MoveSource::Legal => board.generate_moves(mover, self.rules),
            MoveSource::QuietOnly => board.quiet_candidates(mover),
        }
    }

    /// Root moves that apply cleanly, each with its resulting board
    pub(crate) fn children(&self, board: &Board, mover: Color) -> Vec<(Move, Board)> {
        self.candidates(board, mover)
            .into_iter()
            .filter_map(|mv| board.after(mv, self.rules).ok().map(|(child, _)| (mv, child)))
            .collect()
    }

    pub(crate) fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;
        if depth == 0 || board.is_game_over() {
            return (self.leaf_score(board), None);
        }

        let mut best_move = None;
        if maximizing {
            let mut max_eval = -INFINITY;
            for mv in self.candidates(board, self.color) {
                let Ok((child, _)) = board.after(mv, self.rules) else {
                    continue;
                };
                let (eval, _) = self.minimax(&child, depth - 1, alpha, beta, false);
                if eval > max_eval {
                    max_eval = eval;
                    best_move = Some(mv);
                }
                alpha = alpha.max(eval);
                if beta <= alpha {
                    break;
                }
            }
            (max_eval, best_move)
        } else {
            let mut min_eval = INFINITY;
            for mv in self.candidates(board, self.color.opponent()) {
                let Ok((child, _)) = board.after(mv, self.rules) else {
                    continue;
                };
                let (eval, _) = self.minimax(&child, depth - 1, alpha, beta, true);
                if eval < min_eval {
                    min_eval = eval;
                    best_move = Some(mv);
                }
                beta = beta.min(eval);
                if beta <= alpha {
                    break;
                }
            }
            (min_eval, best_move)
        }
    }

    /// Root search that keeps every move tied for the best exact value.
    ///
    /// Children are searched with `alpha = best - 1`, so any value at or
    /// above the current best is exact rather than a bound.
    fn root_ties(&mut self, board: &Board, depth: u32) -> (i32, Vec<Move>) {
        self.nodes += 1;
        if depth == 0 || board.is_game_over() {
            return (self.leaf_score(board), Vec::new());
        }

        let mut best = -INFINITY;
        let mut ties = Vec::new();
        for (mv, child) in self.children(board, self.color) {
            let (eval, _) = self.minimax(&child, depth - 1, best - 1, INFINITY, false);
            if eval > best {
                best = eval;
                ties.clear();
                ties.push(mv);
            } else if eval == best {
                ties.push(mv);
            }
        }
        (best, ties)
    }
}

/// Minimax with alpha-beta pruning from an arbitrary window.
///
/// `color` is the maximizing side; `maximizing` says whose layer `board` is.
/// Returns the value and the move chosen at this node.
pub fn minimax(
    board: &Board,
    color: Color,
    depth: u32,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    state: &mut SearchState,
) -> (i32, Option<Move>) {
    let mut ctx = SearchContext::new(color, &state.params, &state.rules);
    let result = ctx.minimax(board, depth, alpha, beta, maximizing);
    state.stats.nodes = ctx.nodes;
    result
}

/// Search `board` for `color` to the configured depth.
pub fn search(board: &Board, color: Color, state: &mut SearchState) -> SearchResult {
    let started = Instant::now();
    state.stats.reset_search();
    let depth = state.params.depth;

    let mut ctx = SearchContext::new(color, &state.params, &state.rules);
    let (score, best_move) = if state.params.randomize_ties {
        let (score, ties) = ctx.root_ties(board, depth);
        let choice = if ties.is_empty() {
            None
        } else {
            Some(ties[state.rng.gen_range(0..ties.len())])
        };
        (score, choice)
    } else {
        ctx.minimax(board, depth, -INFINITY, INFINITY, true)
    };

    let result = SearchResult {
        best_move,
        score,
        nodes: ctx.nodes,
    };
    state.record(color, &result, started);
    result
}

/// Best move for `color`, or `None` when the game is over or depth is 0
pub fn find_best_move(board: &Board, color: Color, state: &mut SearchState) -> Option<Move> {
    search(board, color, state).best_move
}

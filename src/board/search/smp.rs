//! Parallel root search.
//!
//! Root moves are handed out to scoped worker threads one at a time. Each
//! worker searches its root move on its own board copy, using the best value
//! found so far (minus one) as alpha so that every value at or above the
//! shared best is exact. Ties go to the lowest root index, which makes the
//! result identical to the sequential search regardless of scheduling.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::thread;
use std::time::Instant;

use parking_lot::Mutex;

use super::{SearchContext, SearchResult, SearchState, INFINITY};
use crate::board::{Board, Color, Move};

/// Best root move found so far, shared by all workers
struct RootBest {
    score: i32,
    index: usize,
    best_move: Option<Move>,
}

/// Search `board` for `color` with the root moves split across `threads` workers.
///
/// Tie randomization is not applied here; the first best move in generator
/// order is returned, exactly as the sequential search does by default.
pub fn parallel_search(
    board: &Board,
    color: Color,
    state: &mut SearchState,
    threads: usize,
) -> SearchResult {
    let started = Instant::now();
    state.stats.reset_search();
    let depth = state.params.depth;
    let params = &state.params;
    let rules = &state.rules;

    let root = SearchContext::new(color, params, rules);
    if depth == 0 || board.is_game_over() {
        let result = SearchResult {
            best_move: None,
            score: params.eval.score(board, color),
            nodes: 1,
        };
        state.record(color, &result, started);
        return result;
    }

    let root_moves = root.children(board, color);
    let shared = Mutex::new(RootBest {
        score: -INFINITY,
        index: usize::MAX,
        best_move: None,
    });
    let next = AtomicUsize::new(0);
    let nodes = AtomicU64::new(1);

    thread::scope(|scope| {
        for _ in 0..threads.max(1) {
            scope.spawn(|| {
                let mut ctx = SearchContext::new(color, params, rules);
                loop {
                    let index = next.fetch_add(1, Ordering::Relaxed);
                    let Some((mv, child)) = root_moves.get(index) else {
                        break;
                    };
                    let floor = shared.lock().score;
                    let (eval, _) = ctx.minimax(child, depth - 1, floor - 1, INFINITY, false);

                    let mut best = shared.lock();
                    if eval > best.score || (eval == best.score && index < best.index) {
                        best.score = eval;
                        best.index = index;
                        best.best_move = Some(*mv);
                    }
                }
                nodes.fetch_add(ctx.nodes, Ordering::Relaxed);
            });
        }
    });

    let best = shared.into_inner();
    let result = SearchResult {
        best_move: best.best_move,
        score: best.score,
        nodes: nodes.into_inner(),
    };
    state.record(color, &result, started);
    result
}

use crate::board::{Color, Move};

/// Summary of a finished search.
#[derive(Clone, Debug)]
pub struct SearchInfo {
    pub color: Color,
    pub depth: u32,
    pub score: i32,
    pub nodes: u64,
    pub time_ms: u128,
    pub best_move: Option<Move>,
}

pub trait SearchLogger: Send {
    fn info(&self, info: &SearchInfo);
}

pub struct StdoutLogger;

impl SearchLogger for StdoutLogger {
    fn info(&self, info: &SearchInfo) {
        println!(
            "info side {} depth {} score {} nodes {} time {} move {}",
            info.color,
            info.depth,
            info.score,
            info.nodes,
            info.time_ms,
            info.best_move
                .map_or_else(|| "none".to_string(), |mv| mv.to_string())
        );
    }
}

/// Forwards search summaries to the `log` facade at info level.
#[cfg(feature = "logging")]
pub struct LogLogger;

#[cfg(feature = "logging")]
impl SearchLogger for LogLogger {
    fn info(&self, info: &SearchInfo) {
        ::log::info!(
            "search side={} depth={} score={} nodes={} time_ms={} move={:?}",
            info.color,
            info.depth,
            info.score,
            info.nodes,
            info.time_ms,
            info.best_move
        );
    }
}

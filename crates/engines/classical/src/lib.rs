//! Alpha-beta chess engine.
//!
//! Iterative-deepening negamax with alpha-beta pruning, a quiescence search
//! over captures and promotions, static move ordering and a transposition
//! table that persists across searches until explicitly cleared.

pub mod config;
pub mod eval;
pub mod ordering;
pub mod search;
pub mod tt;

use chess_core::{Color, Engine, Move, Position, SearchLimits, SearchResult, StopSignal};

pub use config::{ConfigError, SearchConfig};
pub use eval::{piece_value, Evaluator, MaterialEvaluator, PieceSquareEvaluator};
pub use search::{is_mate_score, Searcher, MATE_SCORE};
pub use tt::{Bound, TTEntry, TTProbe, TranspositionTable};

/// Search engine owning its transposition table and evaluator.
pub struct ChessAI<E: Evaluator = PieceSquareEvaluator> {
    config: SearchConfig,
    evaluator: E,
    tt: TranspositionTable,
}

impl ChessAI<PieceSquareEvaluator> {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default(), PieceSquareEvaluator)
    }
}

impl Default for ChessAI<PieceSquareEvaluator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Evaluator> ChessAI<E> {
    pub fn with_config(config: SearchConfig, evaluator: E) -> Self {
        let tt = TranspositionTable::new(config.tt_size_mb);
        log::debug!(
            "transposition table: {} MiB, {} entries",
            config.tt_size_mb,
            tt.capacity()
        );
        Self {
            config,
            evaluator,
            tt,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn tt(&self) -> &TranspositionTable {
        &self.tt
    }

    /// Best move at `depth`, or `None` when the side to move has no legal
    /// move. `pos` is left as it was.
    pub fn best_move(&mut self, pos: &mut Position, depth: u8) -> Option<Move> {
        self.search_with_stats(pos, depth, &StopSignal::new()).best_move
    }

    /// [`ChessAI::best_move`] at the configured default depth.
    pub fn best_move_default(&mut self, pos: &mut Position) -> Option<Move> {
        let depth = self.config.default_depth;
        self.best_move(pos, depth)
    }

    /// Full search report. Raising `stop` from another thread ends the search
    /// with the last completed iteration.
    pub fn search_with_stats(
        &mut self,
        pos: &mut Position,
        depth: u8,
        stop: &StopSignal,
    ) -> SearchResult {
        let mut searcher = Searcher::new(&mut self.tt, &self.evaluator, &self.config, stop);
        searcher.iterative_deepening(pos, depth)
    }

    pub fn is_checkmate(&self, pos: &Position, color: Color) -> bool {
        chess_core::is_checkmate(pos, color)
    }

    pub fn clear_tt(&mut self) {
        self.tt.clear();
    }
}

impl<E: Evaluator> Engine for ChessAI<E> {
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult {
        let mut pos = pos.clone();
        self.search_with_stats(&mut pos, limits.depth, &limits.stop)
    }

    fn name(&self) -> &str {
        "AlphaBeta v1.0"
    }

    fn new_game(&mut self) {
        self.clear_tt();
    }
}

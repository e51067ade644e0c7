//! Iterative-deepening negamax with alpha-beta pruning and quiescence.
//!
//! Scores are always from the side to move's point of view, so a child's
//! score is negated on the way up and the window is swapped.

use std::time::Instant;

use chess_core::{
    generate_tactical_moves, legal_moves_into, Move, PieceKind, Position, SearchResult,
    SearchStats, StopSignal,
};

use crate::config::SearchConfig;
use crate::eval::{piece_value, Evaluator};
use crate::ordering::{order_moves, promote_to_front};
use crate::tt::{Bound, TranspositionTable};

/// Base score for being checkmated. The remaining depth is added so that a
/// mate found closer to the root scores higher for the mating side.
pub const MATE_SCORE: i32 = 100_000;
pub const INFINITY: i32 = 1_000_000;

/// True for scores produced by a forced mate.
pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_SCORE && score.abs() < INFINITY
}

/// Per-search state: the shared table, the evaluator and the counters.
pub struct Searcher<'a, E: Evaluator> {
    tt: &'a mut TranspositionTable,
    eval: &'a E,
    config: &'a SearchConfig,
    stop: &'a StopSignal,
    stats: SearchStats,
    aborted: bool,
}

impl<'a, E: Evaluator> Searcher<'a, E> {
    pub fn new(
        tt: &'a mut TranspositionTable,
        eval: &'a E,
        config: &'a SearchConfig,
        stop: &'a StopSignal,
    ) -> Self {
        Self {
            tt,
            eval,
            config,
            stop,
            stats: SearchStats::default(),
            aborted: false,
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search depths 1..=`max_depth`, keeping the best move of the last
    /// iteration that ran to completion. The position is restored on return.
    pub fn iterative_deepening(&mut self, pos: &mut Position, max_depth: u8) -> SearchResult {
        let start = Instant::now();
        let mut moves = Vec::with_capacity(64);
        legal_moves_into(pos, &mut moves);

        if moves.is_empty() {
            return SearchResult {
                best_move: None,
                score: self.terminal_score(pos, max_depth),
                depth: 0,
                stats: self.stats,
                stopped: false,
            };
        }

        order_moves(pos, &mut moves);
        if let Some(tt_move) = self.tt.best_move(pos.hash()) {
            promote_to_front(&mut moves, tt_move);
        }

        let mut best_move = moves[0];
        let mut best_score = 0;
        let mut completed = 0u8;

        for depth in 1..=max_depth.max(1) {
            let mut alpha = -INFINITY;
            let mut iter_best = moves[0];

            for &mv in moves.iter() {
                if self.stop.is_stopped() {
                    self.aborted = true;
                    break;
                }
                pos.make_move(mv);
                let score = -self.negamax(pos, depth - 1, -INFINITY, -alpha);
                pos.undo_move();
                if self.aborted {
                    break;
                }
                if score > alpha {
                    alpha = score;
                    iter_best = mv;
                }
            }

            if self.aborted {
                log::debug!("search stopped during depth {depth}");
                break;
            }

            best_move = iter_best;
            best_score = alpha;
            completed = depth;
            promote_to_front(&mut moves, best_move);
            self.tt
                .store(pos.hash(), depth, best_score, Bound::Exact, Some(best_move));

            log::debug!(
                "depth {depth}: best {best_move} score {best_score} nodes {} qnodes {}",
                self.stats.nodes,
                self.stats.q_nodes
            );
        }

        let nodes = self.stats.nodes.max(1) as f64;
        log::info!(
            "search done: depth {completed} best {best_move} score {best_score} | nodes {} | tt hits {} ({:.1}%) | q-nodes {} ({:.1}%) | max q-depth {} | {:?}",
            self.stats.nodes,
            self.stats.tt_hits,
            100.0 * self.stats.tt_hits as f64 / nodes,
            self.stats.q_nodes,
            100.0 * self.stats.q_nodes as f64 / nodes,
            self.stats.max_q_depth,
            start.elapsed()
        );

        SearchResult {
            best_move: Some(best_move),
            score: best_score,
            depth: completed,
            stats: self.stats,
            stopped: self.aborted,
        }
    }

    /// Score of a position without legal moves.
    fn terminal_score(&self, pos: &Position, depth: u8) -> i32 {
        if pos.is_king_checked(pos.side_to_move) {
            -(MATE_SCORE + depth as i32)
        } else {
            0
        }
    }

    pub fn negamax(&mut self, pos: &mut Position, depth: u8, mut alpha: i32, beta: i32) -> i32 {
        self.stats.nodes += 1;
        let orig_alpha = alpha;
        let hash = pos.hash();

        let probe = self.tt.probe(hash, depth, alpha, beta);
        if let Some(score) = probe.score {
            self.stats.tt_hits += 1;
            return score;
        }

        let mut moves = Vec::with_capacity(64);

        if depth == 0 {
            // A mate delivered on the last ply must not be scored by quiescence.
            if pos.is_king_checked(pos.side_to_move) {
                legal_moves_into(pos, &mut moves);
                if moves.is_empty() {
                    return self.terminal_score(pos, 0);
                }
            }
            return self.quiescence(pos, alpha, beta, 0);
        }

        legal_moves_into(pos, &mut moves);
        if moves.is_empty() {
            return self.terminal_score(pos, depth);
        }

        order_moves(pos, &mut moves);
        if let Some(tt_move) = probe.best_move {
            // Only a move that is actually legal here can go first.
            promote_to_front(&mut moves, tt_move);
        }

        let mut best = -INFINITY;
        let mut best_move = moves[0];
        for &mv in moves.iter() {
            if self.stop.is_stopped() {
                self.aborted = true;
                break;
            }
            pos.make_move(mv);
            let score = -self.negamax(pos, depth - 1, -beta, -alpha);
            pos.undo_move();
            if self.aborted {
                break;
            }
            if score > best {
                best = score;
                best_move = mv;
            }
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }

        if self.aborted {
            return best;
        }

        let bound = if best <= orig_alpha {
            Bound::Upper
        } else if best >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.tt.store(hash, depth, best, bound, Some(best_move));
        best
    }

    /// Captures and promotions only, until the position is quiet or the
    /// configured ply cap is reached.
    pub fn quiescence(&mut self, pos: &mut Position, mut alpha: i32, beta: i32, q_depth: u8) -> i32 {
        self.stats.q_nodes += 1;
        self.stats.max_q_depth = self.stats.max_q_depth.max(q_depth);

        let stand_pat = self.eval.evaluate(pos);
        if q_depth >= self.config.quiescence_max_depth {
            return stand_pat;
        }
        if stand_pat >= beta {
            return stand_pat;
        }
        alpha = alpha.max(stand_pat);

        let mut moves = Vec::with_capacity(32);
        generate_tactical_moves(pos, &mut moves);
        if moves.is_empty() {
            return stand_pat;
        }
        order_moves(pos, &mut moves);

        let mut best = stand_pat;
        for &mv in moves.iter() {
            if stand_pat + max_gain(&mv) + self.config.delta_margin < alpha {
                continue;
            }
            pos.make_move(mv);
            let score = -self.quiescence(pos, -beta, -alpha, q_depth + 1);
            pos.undo_move();

            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
        best
    }
}

/// Largest material swing a tactical move can produce on its own.
fn max_gain(mv: &Move) -> i32 {
    let captured = mv.captured.map_or(0, |pc| piece_value(pc.kind()));
    let promoted = mv
        .promotion
        .map_or(0, |pc| piece_value(pc.kind()) - piece_value(PieceKind::Pawn));
    captured + promoted
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;

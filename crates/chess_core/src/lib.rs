//! Bitboard chess rules: board state, attack tables, legal move generation.
//!
//! Search engines build on this crate through the [`Engine`] trait.

pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod error;
pub mod limits;
pub mod magic;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod types;
pub mod zobrist;

pub use attacks::*;
pub use bitboard::*;
pub use board::*;
pub use error::{FenError, FenResult, NotationError};
pub use limits::*;
pub use movegen::*;
pub use notation::*;
pub use perft::{perft, perft_divide};
pub use types::*;
pub use zobrist::ZOBRIST;

// =============================================================================
// Engine trait
// =============================================================================

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Interior nodes visited by the main search
    pub nodes: u64,
    /// Transposition table probes that returned a usable score
    pub tt_hits: u64,
    /// Nodes visited by the quiescence search
    pub q_nodes: u64,
    /// Deepest quiescence ply reached
    pub max_q_depth: u8,
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Score in centipawns from the side to move's point of view
    pub score: i32,
    /// Deepest fully completed iteration
    pub depth: u8,
    pub stats: SearchStats,
    /// Whether the stop signal cut the search short
    pub stopped: bool,
}

/// A move-choosing engine.
pub trait Engine: Send {
    /// Search `pos` within `limits` and report the best move found.
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult;

    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game (clear hash tables, history, etc.)
    fn new_game(&mut self) {}
}

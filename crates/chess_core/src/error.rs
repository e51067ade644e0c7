//! Error types for the core crate.

use thiserror::Error;

/// Structural FEN problems that would leave the board in a corrupt state.
///
/// Cosmetic problems (unknown piece letters, unknown castling characters,
/// unparsable counters) are tolerated and logged instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("empty FEN string")]
    Empty,

    #[error("expected 8 ranks in piece placement, found {0}")]
    RankCount(usize),

    #[error("rank {rank} describes more than 8 files")]
    RankTooLong { rank: u8 },
}

pub type FenResult<T> = Result<T, FenError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("'{text}' is not a legal move in {fen}")]
    IllegalMove { text: String, fen: String },
}

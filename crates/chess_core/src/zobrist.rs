//! Zobrist hashing for chess positions.
//!
//! The hash is the XOR of one random key per feature of the position:
//! - each piece on each square (12 × 64)
//! - black to move
//! - each castling right still held (4)
//! - the file of the en-passant target, when there is one (8)
//!
//! `Position::make_move` toggles only the keys of features that changed, and
//! `Position::compute_hash` rebuilds the same value from scratch.

use crate::types::{Piece, Square};

/// Keys generated at compile time from a fixed xorshift seed.
pub struct ZobristKeys {
    /// Indexed by [piece.idx()][square]
    pub pieces: [[u64; 64]; 12],
    /// XORed in when black is to move
    pub side_to_move: u64,
    /// [white kingside, white queenside, black kingside, black queenside]
    pub castling: [u64; 4],
    /// En-passant target file (0-7)
    pub en_passant: [u64; 8],
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristKeys {
    pub const fn new() -> Self {
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x123456789ABCDEF0u64;

        let mut pieces = [[0u64; 64]; 12];
        let mut piece = 0;
        while piece < 12 {
            let mut sq = 0;
            while sq < 64 {
                state = xorshift64(state);
                pieces[piece][sq] = state;
                sq += 1;
            }
            piece += 1;
        }

        state = xorshift64(state);
        let side_to_move = state;

        let mut castling = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            state = xorshift64(state);
            castling[i] = state;
            i += 1;
        }

        let mut en_passant = [0u64; 8];
        let mut i = 0;
        while i < 8 {
            state = xorshift64(state);
            en_passant[i] = state;
            i += 1;
        }

        ZobristKeys {
            pieces,
            side_to_move,
            castling,
            en_passant,
        }
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: Square) -> u64 {
        self.pieces[piece.idx()][sq as usize]
    }

    /// Key for castling right index (0=wk, 1=wq, 2=bk, 3=bq).
    #[inline(always)]
    pub fn castling_key(&self, index: usize) -> u64 {
        self.castling[index]
    }

    /// Key for an en-passant target square (only its file matters).
    #[inline(always)]
    pub fn ep_key(&self, sq: Square) -> u64 {
        self.en_passant[(sq % 8) as usize]
    }
}

pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;

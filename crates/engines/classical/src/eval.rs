//! Static evaluation.
//!
//! The search only sees the [`Evaluator`] trait. Two implementations ship:
//! [`MaterialEvaluator`] (piece values only) and the default
//! [`PieceSquareEvaluator`] (material, piece-square tables and a bonus for
//! having castled).

use chess_core::{Color, PieceKind, Position};

/// Material values in centipawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [i32; 6] = [100, 320, 330, 500, 900, 0];

/// Bonus for a side that has castled.
pub const CASTLED_BONUS: i32 = 50;

#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

/// Scores a position in centipawns from the side to move's perspective:
/// positive is good for the side to move.
pub trait Evaluator: Send {
    fn evaluate(&self, pos: &Position) -> i32;
}

#[inline]
fn from_side_to_move(pos: &Position, white_score: i32) -> i32 {
    if pos.side_to_move == Color::White {
        white_score
    } else {
        -white_score
    }
}

/// Material only, counted with bitboard popcounts.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, pos: &Position) -> i32 {
        let mut score = 0i32;
        for kind in PieceKind::ALL {
            let white = pos.pieces_of(Color::White, kind).popcount() as i32;
            let black = pos.pieces_of(Color::Black, kind).popcount() as i32;
            score += piece_value(kind) * (white - black);
        }
        from_side_to_move(pos, score)
    }
}

// Piece-square tables from white's point of view, laid out as the board is
// drawn: first row is rank 8, last row is rank 1.
#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

const TABLES: [&[i32; 64]; 6] = [
    &PAWN_TABLE,
    &KNIGHT_TABLE,
    &BISHOP_TABLE,
    &ROOK_TABLE,
    &QUEEN_TABLE,
    &KING_TABLE,
];

/// Table bonus for a piece of `color` and `kind` standing on `sq`.
#[inline]
pub fn square_bonus(color: Color, kind: PieceKind, sq: u8) -> i32 {
    // Tables are drawn rank 8 first, so white flips and black reads directly.
    let idx = match color {
        Color::White => sq ^ 56,
        Color::Black => sq,
    };
    TABLES[kind.idx()][idx as usize]
}

/// Material + piece-square tables + castled bonus.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareEvaluator;

impl Evaluator for PieceSquareEvaluator {
    fn evaluate(&self, pos: &Position) -> i32 {
        let mut score = 0i32;
        for kind in PieceKind::ALL {
            for sq in pos.pieces_of(Color::White, kind) {
                score += piece_value(kind) + square_bonus(Color::White, kind, sq);
            }
            for sq in pos.pieces_of(Color::Black, kind) {
                score -= piece_value(kind) + square_bonus(Color::Black, kind, sq);
            }
        }
        if pos.white_castled {
            score += CASTLED_BONUS;
        }
        if pos.black_castled {
            score -= CASTLED_BONUS;
        }
        from_side_to_move(pos, score)
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;

//! Static move ordering: captures by MVV-LVA, then promotions, then castling,
//! with a penalty for landing on a square an enemy pawn attacks.

use chess_core::{pawn_attacks_set, Bitboard, Move, PieceKind, Position};

use crate::eval::piece_value;

pub const CAPTURE_BASE: i32 = 100_000;
pub const PROMOTION_BASE: i32 = 90_000;
pub const CASTLE_SCORE: i32 = 50_000;
pub const PAWN_ATTACKED_PENALTY: i32 = 1_000;

/// Squares attacked by the pawns of the side not moving `mv`.
fn enemy_pawn_attacks(pos: &Position, mv: &Move) -> Bitboard {
    let enemy = mv.piece.color().other();
    pawn_attacks_set(pos.pieces_of(enemy, PieceKind::Pawn), enemy)
}

pub fn score_move(pos: &Position, mv: &Move) -> i32 {
    score_with(enemy_pawn_attacks(pos, mv), mv)
}

fn score_with(enemy_pawn_attacks: Bitboard, mv: &Move) -> i32 {
    let mut score = if let Some(victim) = mv.captured.filter(|_| mv.is_capture) {
        CAPTURE_BASE + piece_value(victim.kind()) * 10 - piece_value(mv.piece.kind())
    } else if let Some(promoted) = mv.promotion {
        PROMOTION_BASE + piece_value(promoted.kind())
    } else if mv.is_castle() {
        CASTLE_SCORE
    } else {
        0
    };
    if enemy_pawn_attacks.contains(mv.to) {
        score -= PAWN_ATTACKED_PENALTY;
    }
    score
}

/// Sort `moves` by descending score. Ties keep generation order.
pub fn order_moves(pos: &Position, moves: &mut [Move]) {
    let Some(first) = moves.first() else {
        return;
    };
    let attacks = enemy_pawn_attacks(pos, first);
    moves.sort_by_cached_key(|mv| std::cmp::Reverse(score_with(attacks, mv)));
}

/// Move `mv` to the front if present. Returns whether it was found.
pub fn promote_to_front(moves: &mut [Move], mv: Move) -> bool {
    match moves.iter().position(|m| *m == mv) {
        Some(i) => {
            moves[..=i].rotate_right(1);
            true
        }
        None => false,
    }
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;

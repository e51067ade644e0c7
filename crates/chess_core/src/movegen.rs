//! Pseudo-legal and legal move generation.
//!
//! Each piece type has its own generator that turns a source bitboard into
//! destination sets (jump tables, pawn shifts or magic lookups) and emits one
//! [`Move`] per destination. Legality is then decided as cheaply as the
//! situation allows:
//!
//! - double check: only king moves, each verified by make/unmake
//! - single check: every move verified by make/unmake
//! - no check: unpinned non-king moves are kept as is, pinned pieces must stay
//!   on their pin line, king moves and en passant are verified by make/unmake

use crate::attacks::{
    bishop_attacks, king_attacks, knight_attacks, line, pawn_attacks, queen_attacks,
    rook_attacks,
};
use crate::bitboard::Bitboard;
use crate::board::Position;
use crate::types::*;

/// Which moves a generator should produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenKind {
    All,
    /// Captures (en passant included) and promotions
    Tactical,
}

// =============================================================================
// Public entry points
// =============================================================================

/// All legal moves for the side to move, freshly allocated.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    generate_all_moves(pos, pos.side_to_move)
}

/// All legal moves for the side to move into `out`, reusing its allocation.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    let color = pos.side_to_move;
    generate_moves_into(pos, color, GenKind::All, out);
}

/// All legal moves for `color`.
pub fn generate_all_moves(pos: &Position, color: Color) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    generate_moves_into(&mut tmp, color, GenKind::All, &mut out);
    out
}

/// Legal captures and promotions for the side to move.
pub fn generate_tactical_moves(pos: &mut Position, out: &mut Vec<Move>) {
    let color = pos.side_to_move;
    generate_moves_into(pos, color, GenKind::Tactical, out);
}

/// Legal moves for `color` while its king is attacked: every pseudo-legal move
/// is played and kept only if the king is safe afterwards.
pub fn generate_legal_moves_while_in_check(pos: &mut Position, color: Color, out: &mut Vec<Move>) {
    out.clear();
    pseudo_legal_moves(pos, color, GenKind::All, out);
    out.retain(|&mv| leaves_king_safe(pos, mv, color));
}

pub fn is_checkmate(pos: &Position, color: Color) -> bool {
    pos.is_king_checked(color) && generate_all_moves(pos, color).is_empty()
}

pub fn is_stalemate(pos: &Position, color: Color) -> bool {
    !pos.is_king_checked(color) && generate_all_moves(pos, color).is_empty()
}

/// Legal moves of `kind` for `color` into `out`.
pub fn generate_moves_into(pos: &mut Position, color: Color, kind: GenKind, out: &mut Vec<Move>) {
    out.clear();
    match pos.attackers_count(color) {
        0 => {
            pseudo_legal_moves(pos, color, kind, out);
            let pinned = pos.pinned_pieces(color);
            let king = pos.king_square(color);
            out.retain(|&mv| {
                if mv.piece.kind() == PieceKind::King || mv.is_en_passant {
                    leaves_king_safe(pos, mv, color)
                } else if pinned.contains(mv.from) {
                    king.is_some_and(|k| line(k, mv.from).contains(mv.to))
                } else {
                    true
                }
            });
        }
        1 => {
            pseudo_legal_moves(pos, color, kind, out);
            out.retain(|&mv| leaves_king_safe(pos, mv, color));
        }
        _ => {
            let own = pos.occupancy(color);
            let targets = match kind {
                GenKind::All => !own,
                GenKind::Tactical => pos.occupancy(color.other()),
            };
            generate_king_moves(pos, color, targets, out);
            out.retain(|&mv| leaves_king_safe(pos, mv, color));
        }
    }
}

#[inline]
fn leaves_king_safe(pos: &mut Position, mv: Move, color: Color) -> bool {
    pos.make_move(mv);
    let safe = !pos.is_king_checked(color);
    pos.undo_move();
    safe
}

// =============================================================================
// Pseudo-legal generation
// =============================================================================

/// Every pseudo-legal move of `kind` for `color`, appended to `out`.
pub fn pseudo_legal_moves(pos: &Position, color: Color, kind: GenKind, out: &mut Vec<Move>) {
    let targets = match kind {
        GenKind::All => !pos.occupancy(color),
        GenKind::Tactical => pos.occupancy(color.other()),
    };
    generate_pawn_moves(pos, color, kind, out);
    generate_knight_moves(pos, color, targets, out);
    generate_bishop_moves(pos, color, targets, out);
    generate_rook_moves(pos, color, targets, out);
    generate_queen_moves(pos, color, targets, out);
    generate_king_moves(pos, color, targets, out);
    if kind == GenKind::All {
        generate_castling_moves(pos, color, out);
    }
}

fn push_pawn_move(
    pos: &Position,
    from: Square,
    to: Square,
    piece: Piece,
    promo_rank: Bitboard,
    out: &mut Vec<Move>,
) {
    let captured = pos.piece_at(to);
    if promo_rank.contains(to) {
        for kind in PieceKind::PROMOTIONS {
            let promoted = Piece::new(piece.color(), kind);
            out.push(Move::promotion(from, to, piece, captured, promoted));
        }
    } else {
        out.push(Move::new(from, to, piece, captured));
    }
}

/// Pushes, double pushes, captures, promotions and en passant.
pub fn generate_pawn_moves(pos: &Position, color: Color, kind: GenKind, out: &mut Vec<Move>) {
    let piece = Piece::new(color, PieceKind::Pawn);
    let pawns = pos.pieces(piece);
    if pawns.is_empty() {
        return;
    }
    let empty = !pos.occupied();
    let enemy = pos.occupancy(color.other());

    let (single, double, back, promo_rank, ep_rank) = match color {
        Color::White => {
            let single = pawns.north() & empty;
            let double = (single & Bitboard::rank(2)).north() & empty;
            (single, double, -8i8, Bitboard::RANK_8, 5)
        }
        Color::Black => {
            let single = pawns.south() & empty;
            let double = (single & Bitboard::rank(5)).south() & empty;
            (single, double, 8i8, Bitboard::RANK_1, 2)
        }
    };

    let pushes = match kind {
        GenKind::All => single,
        GenKind::Tactical => single & promo_rank,
    };
    for to in pushes {
        let from = (to as i8 + back) as Square;
        push_pawn_move(pos, from, to, piece, promo_rank, out);
    }
    if kind == GenKind::All {
        for to in double {
            let from = (to as i8 + 2 * back) as Square;
            out.push(Move::new(from, to, piece, None));
        }
    }

    for from in pawns {
        for to in pawn_attacks(from, color) & enemy {
            push_pawn_move(pos, from, to, piece, promo_rank, out);
        }
    }

    if let Some(ep) = pos.en_passant {
        let victim_sq = (ep as i8 + back) as Square;
        let victim = Piece::new(color.other(), PieceKind::Pawn);
        // Target must sit behind an enemy pawn on the right rank.
        if ep / 8 == ep_rank && pos.pieces(victim).contains(victim_sq) && !pos.occupied().contains(ep)
        {
            for from in pawn_attacks(ep, color.other()) & pawns {
                out.push(Move::en_passant(from, ep, piece));
            }
        }
    }
}

fn push_targets(
    pos: &Position,
    from: Square,
    piece: Piece,
    destinations: Bitboard,
    out: &mut Vec<Move>,
) {
    for to in destinations {
        out.push(Move::new(from, to, piece, pos.piece_at(to)));
    }
}

pub fn generate_knight_moves(pos: &Position, color: Color, targets: Bitboard, out: &mut Vec<Move>) {
    let piece = Piece::new(color, PieceKind::Knight);
    for from in pos.pieces(piece) {
        push_targets(pos, from, piece, knight_attacks(from) & targets, out);
    }
}

pub fn generate_bishop_moves(pos: &Position, color: Color, targets: Bitboard, out: &mut Vec<Move>) {
    let piece = Piece::new(color, PieceKind::Bishop);
    let occ = pos.occupied();
    for from in pos.pieces(piece) {
        push_targets(pos, from, piece, bishop_attacks(from, occ) & targets, out);
    }
}

pub fn generate_rook_moves(pos: &Position, color: Color, targets: Bitboard, out: &mut Vec<Move>) {
    let piece = Piece::new(color, PieceKind::Rook);
    let occ = pos.occupied();
    for from in pos.pieces(piece) {
        push_targets(pos, from, piece, rook_attacks(from, occ) & targets, out);
    }
}

pub fn generate_queen_moves(pos: &Position, color: Color, targets: Bitboard, out: &mut Vec<Move>) {
    let piece = Piece::new(color, PieceKind::Queen);
    let occ = pos.occupied();
    for from in pos.pieces(piece) {
        push_targets(pos, from, piece, queen_attacks(from, occ) & targets, out);
    }
}

/// King steps only; castling is [`generate_castling_moves`].
pub fn generate_king_moves(pos: &Position, color: Color, targets: Bitboard, out: &mut Vec<Move>) {
    let piece = Piece::new(color, PieceKind::King);
    for from in pos.pieces(piece) {
        push_targets(pos, from, piece, king_attacks(from) & targets, out);
    }
}

pub fn generate_castling_moves(pos: &Position, color: Color, out: &mut Vec<Move>) {
    if pos.can_castle_kingside(color) {
        out.push(Move::castle(color, true));
    }
    if pos.can_castle_queenside(color) {
        out.push(Move::castle(color, false));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;

//! Pre-computed attack tables for move generation and attack detection.
//!
//! This module contains:
//! - Knight, king and pawn jump tables (compile-time constants)
//! - Ray tables per direction, used to build the magic tables and as a
//!   reference implementation in tests
//! - Sliding attacks served from the magic tables in [`crate::magic`]
//! - Geometry helpers (`between`, `line`) for pin and check-ray logic

use crate::bitboard::Bitboard;
use crate::magic::MAGICS;
use crate::types::{Color, Square};

/// Pre-computed knight attacks for each square.
pub static KNIGHT_ATTACKS: [Bitboard; 64] = {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut sq = 0u8;
    while sq < 64 {
        let bb = Bitboard::from_square(sq).0;
        let mut result = 0u64;

        result |= (bb << 17) & Bitboard::NOT_FILE_A.0; // up 2, right 1
        result |= (bb << 15) & Bitboard::NOT_FILE_H.0; // up 2, left 1
        result |= (bb << 10) & Bitboard::NOT_FILE_AB.0; // up 1, right 2
        result |= (bb << 6) & Bitboard::NOT_FILE_GH.0; // up 1, left 2
        result |= (bb >> 6) & Bitboard::NOT_FILE_AB.0; // down 1, right 2
        result |= (bb >> 10) & Bitboard::NOT_FILE_GH.0; // down 1, left 2
        result |= (bb >> 15) & Bitboard::NOT_FILE_A.0; // down 2, right 1
        result |= (bb >> 17) & Bitboard::NOT_FILE_H.0; // down 2, left 1

        attacks[sq as usize] = Bitboard(result);
        sq += 1;
    }
    attacks
};

/// Pre-computed king attacks for each square.
pub static KING_ATTACKS: [Bitboard; 64] = {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut sq = 0u8;
    while sq < 64 {
        let bb = Bitboard::from_square(sq).0;
        let mut result = 0u64;

        result |= bb << 8;
        result |= bb >> 8;
        result |= (bb << 1) & Bitboard::NOT_FILE_A.0;
        result |= (bb >> 1) & Bitboard::NOT_FILE_H.0;
        result |= (bb << 9) & Bitboard::NOT_FILE_A.0;
        result |= (bb << 7) & Bitboard::NOT_FILE_H.0;
        result |= (bb >> 7) & Bitboard::NOT_FILE_A.0;
        result |= (bb >> 9) & Bitboard::NOT_FILE_H.0;

        attacks[sq as usize] = Bitboard(result);
        sq += 1;
    }
    attacks
};

/// Pawn capture targets, indexed by [color][square].
pub static PAWN_ATTACKS: [[Bitboard; 64]; 2] = {
    let mut attacks = [[Bitboard::EMPTY; 64]; 2];
    let mut sq = 0u8;
    while sq < 64 {
        let bb = Bitboard::from_square(sq);
        attacks[0][sq as usize] = Bitboard(bb.north_east().0 | bb.north_west().0);
        attacks[1][sq as usize] = Bitboard(bb.south_east().0 | bb.south_west().0);
        sq += 1;
    }
    attacks
};

#[inline(always)]
pub fn pawn_attacks(sq: Square, color: Color) -> Bitboard {
    PAWN_ATTACKS[color.idx()][sq as usize]
}

/// Union of capture targets for a whole set of pawns.
#[inline(always)]
pub fn pawn_attacks_set(pawns: Bitboard, color: Color) -> Bitboard {
    match color {
        Color::White => pawns.north_east() | pawns.north_west(),
        Color::Black => pawns.south_east() | pawns.south_west(),
    }
}

#[inline(always)]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq as usize]
}

#[inline(always)]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq as usize]
}

/// Rook attacks through the magic tables.
#[inline(always)]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    MAGICS.rook(sq, occupied)
}

/// Bishop attacks through the magic tables.
#[inline(always)]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    MAGICS.bishop(sq, occupied)
}

#[inline(always)]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks(sq, occupied) | bishop_attacks(sq, occupied)
}

/// Squares strictly between `a` and `b` when they share a rank, file or
/// diagonal; empty otherwise.
///
/// Computed as the intersection of the ray cast from `a` toward `b` and the ray
/// cast from `b` toward `a`, each stopped by the other square.
pub fn between(a: Square, b: Square) -> Bitboard {
    let (ba, bb) = (Bitboard::from_square(a), Bitboard::from_square(b));
    if rook_attacks(a, Bitboard::EMPTY).contains(b) {
        rook_attacks(a, bb) & rook_attacks(b, ba)
    } else if bishop_attacks(a, Bitboard::EMPTY).contains(b) {
        bishop_attacks(a, bb) & bishop_attacks(b, ba)
    } else {
        Bitboard::EMPTY
    }
}

/// The full board line through `a` and `b` (both included), or empty when the
/// squares are not aligned.
pub fn line(a: Square, b: Square) -> Bitboard {
    let ends = Bitboard::from_square(a) | Bitboard::from_square(b);
    if rook_attacks(a, Bitboard::EMPTY).contains(b) {
        (rook_attacks(a, Bitboard::EMPTY) & rook_attacks(b, Bitboard::EMPTY)) | ends
    } else if bishop_attacks(a, Bitboard::EMPTY).contains(b) {
        (bishop_attacks(a, Bitboard::EMPTY) & bishop_attacks(b, Bitboard::EMPTY)) | ends
    } else {
        Bitboard::EMPTY
    }
}

// =============================================================================
// Ray tables (classical approach, used to fill the magic tables)
// =============================================================================

/// RAYS[direction][square] gives all squares in that direction from sq (not
/// including sq). Directions: 0=N, 1=NE, 2=E, 3=SE, 4=S, 5=SW, 6=W, 7=NW
pub static RAYS: [[Bitboard; 64]; 8] = {
    const STEPS: [(i8, i8); 8] = [
        (0, 1),
        (1, 1),
        (1, 0),
        (1, -1),
        (0, -1),
        (-1, -1),
        (-1, 0),
        (-1, 1),
    ];
    let mut rays = [[Bitboard::EMPTY; 64]; 8];
    let mut dir = 0;
    while dir < 8 {
        let (df, dr) = STEPS[dir];
        let mut sq = 0u8;
        while sq < 64 {
            let mut bb = 0u64;
            let mut f = (sq % 8) as i8 + df;
            let mut r = (sq / 8) as i8 + dr;
            while f >= 0 && f < 8 && r >= 0 && r < 8 {
                bb |= 1u64 << ((r * 8 + f) as u32);
                f += df;
                r += dr;
            }
            rays[dir][sq as usize] = Bitboard(bb);
            sq += 1;
        }
        dir += 1;
    }
    rays
};

/// Directions whose ray indices grow from the origin (N, NE, E, NW).
const fn is_positive_dir(dir: usize) -> bool {
    matches!(dir, 0 | 1 | 2 | 7)
}

fn ray_attacks(sq: Square, occupied: Bitboard, dirs: [usize; 4]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for dir in dirs {
        let ray = RAYS[dir][sq as usize];
        let blockers = ray & occupied;
        if blockers.is_empty() {
            attacks |= ray;
            continue;
        }
        // First blocker is the nearest one: LSB going up, MSB going down.
        let blocker_sq = if is_positive_dir(dir) {
            blockers.0.trailing_zeros() as Square
        } else {
            63 - blockers.0.leading_zeros() as Square
        };
        attacks |= ray & !RAYS[dir][blocker_sq as usize];
    }
    attacks
}

/// Rook attacks by walking rays; slow, used for table construction.
pub fn rook_attacks_slow(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, [0, 2, 4, 6])
}

/// Bishop attacks by walking rays; slow, used for table construction.
pub fn bishop_attacks_slow(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, [1, 3, 5, 7])
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;

use super::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_knight_attacks() {
    // Knight on e4 (square 28) should attack 8 squares
    let attacks = knight_attacks(28);
    assert_eq!(attacks.popcount(), 8);

    // Knight on a1 (square 0) should attack 2 squares
    let attacks = knight_attacks(0);
    assert_eq!(attacks.popcount(), 2);
    assert!(attacks.contains(10)); // c2
    assert!(attacks.contains(17)); // b3

    // Knight on h1 (square 7) should attack 2 squares
    let attacks = knight_attacks(7);
    assert_eq!(attacks.popcount(), 2);
}

#[test]
fn test_king_attacks() {
    assert_eq!(king_attacks(28).popcount(), 8);
    assert_eq!(king_attacks(0).popcount(), 3);
    assert_eq!(king_attacks(63).popcount(), 3);
}

#[test]
fn test_pawn_attacks() {
    // White pawn on e4 attacks d5 and f5
    let attacks = pawn_attacks(28, Color::White);
    assert_eq!(attacks, Bitboard::from_squares(&[35, 37]));

    // White pawn on a2 attacks only b3
    assert_eq!(pawn_attacks(8, Color::White), Bitboard::from_square(17));

    // Black pawn on h7 attacks only g6
    assert_eq!(pawn_attacks(55, Color::Black), Bitboard::from_square(46));
}

#[test]
fn test_pawn_attacks_set_matches_per_square() {
    let pawns = Bitboard::from_squares(&[8, 12, 15, 33]);
    for color in [Color::White, Color::Black] {
        let expected = pawns.fold(Bitboard::EMPTY, |acc, sq| acc | pawn_attacks(sq, color));
        assert_eq!(pawn_attacks_set(pawns, color), expected);
    }
}

#[test]
fn test_slider_attacks_empty_board() {
    assert_eq!(rook_attacks(28, Bitboard::EMPTY).popcount(), 14);
    assert_eq!(bishop_attacks(28, Bitboard::EMPTY).popcount(), 13);
    assert_eq!(queen_attacks(28, Bitboard::EMPTY).popcount(), 27);
}

#[test]
fn test_rook_attacks_with_blockers() {
    // Rook on a1, blocker on a4
    let occupied = Bitboard::from_square(24); // a4
    let attacks = rook_attacks(0, occupied);
    assert!(attacks.contains(8)); // a2
    assert!(attacks.contains(16)); // a3
    assert!(attacks.contains(24)); // a4 (can capture)
    assert!(!attacks.contains(32)); // a5 (blocked)
    assert!(attacks.contains(1)); // b1
    assert!(attacks.contains(7)); // h1
}

#[test]
fn test_magic_lookup_matches_ray_walk() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..2000 {
        // Sparse occupancies resemble real positions.
        let occ = Bitboard(rng.r#gen::<u64>() & rng.r#gen::<u64>());
        let sq: Square = rng.gen_range(0..64);
        assert_eq!(rook_attacks(sq, occ), rook_attacks_slow(sq, occ), "rook {sq}");
        assert_eq!(bishop_attacks(sq, occ), bishop_attacks_slow(sq, occ), "bishop {sq}");
    }
}

#[test]
fn test_between() {
    // a1..a4 on a file
    assert_eq!(between(0, 24), Bitboard::from_squares(&[8, 16]));
    // a1..d4 on a diagonal
    assert_eq!(between(0, 27), Bitboard::from_squares(&[9, 18]));
    // symmetric
    assert_eq!(between(27, 0), between(0, 27));
    // adjacent squares have nothing between
    assert_eq!(between(0, 1), Bitboard::EMPTY);
    // not aligned (knight jump)
    assert_eq!(between(0, 10), Bitboard::EMPTY);
}

#[test]
fn test_line() {
    // e1 and e4 share the e-file
    assert_eq!(line(4, 28), Bitboard::file(4));
    // a1 and c3 share the long diagonal
    let diag = line(0, 18);
    assert_eq!(diag.popcount(), 8);
    assert!(diag.contains(63));
    assert_eq!(line(0, 10), Bitboard::EMPTY);
}

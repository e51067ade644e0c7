use super::*;

#[test]
fn test_mask_sizes() {
    assert_eq!(rook_mask(0).popcount(), 12); // a1
    assert_eq!(rook_mask(28).popcount(), 10); // e4
    assert_eq!(bishop_mask(0).popcount(), 6); // a1
    assert_eq!(bishop_mask(28).popcount(), 9); // e4
}

#[test]
fn test_rook_mask_excludes_edges() {
    // Rook on a1: a8 and h1 are never blockers that matter.
    let mask = rook_mask(0);
    assert!(!mask.contains(56));
    assert!(!mask.contains(7));
    assert!(mask.contains(48)); // a7
    assert!(mask.contains(6)); // g1
}

#[test]
fn test_lookup_matches_ray_walk_on_every_subset_of_one_square() {
    // Exhaustive check for d4 (27): every subset of its relevant mask.
    let mask = rook_mask(27);
    let mut subset = 0u64;
    loop {
        let occ = Bitboard(subset);
        assert_eq!(MAGICS.rook(27, occ), rook_attacks_slow(27, occ));
        subset = subset.wrapping_sub(mask.0) & mask.0;
        if subset == 0 {
            break;
        }
    }
}

#[test]
fn test_lookup_ignores_irrelevant_bits() {
    // Edge squares behind the ray never change the result.
    let with_edges = Bitboard::RANK_1 | Bitboard::RANK_8 | Bitboard::FILE_A | Bitboard::FILE_H;
    assert_eq!(
        MAGICS.bishop(27, with_edges),
        bishop_attacks_slow(27, with_edges)
    );
    assert_eq!(MAGICS.rook(27, with_edges), rook_attacks_slow(27, with_edges));
}

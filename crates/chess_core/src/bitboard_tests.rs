use super::*;

#[test]
fn test_from_square() {
    assert_eq!(Bitboard::from_square(0).0, 1); // a1
    assert_eq!(Bitboard::from_square(7).0, 128); // h1
    assert_eq!(Bitboard::from_square(63).0, 1 << 63); // h8
}

#[test]
fn test_rank_and_file_masks() {
    assert_eq!(Bitboard::rank(0), Bitboard::RANK_1);
    assert_eq!(Bitboard::rank(7), Bitboard::RANK_8);
    assert_eq!(Bitboard::file(0), Bitboard::FILE_A);
    assert_eq!(Bitboard::file(7), Bitboard::FILE_H);
    assert_eq!(Bitboard::rank(3).popcount(), 8);
}

#[test]
fn test_cardinality_helpers() {
    assert!(!Bitboard::EMPTY.is_single());
    assert!(!Bitboard::EMPTY.more_than_one());
    assert!(Bitboard::from_square(12).is_single());
    assert!(!Bitboard::from_square(12).more_than_one());
    let two = Bitboard::from_squares(&[3, 40]);
    assert!(!two.is_single());
    assert!(two.more_than_one());
}

#[test]
fn test_iterator() {
    let bb = Bitboard(0b1010);
    let squares: Vec<u8> = bb.collect();
    assert_eq!(squares, vec![1, 3]);
}

#[test]
fn test_diagonal_shifts_do_not_wrap() {
    let a1 = Bitboard::from_square(0);
    assert_eq!(a1.north(), Bitboard::from_square(8));
    assert_eq!(a1.north_east(), Bitboard::from_square(9));
    assert_eq!(a1.north_west(), Bitboard::EMPTY);

    let h1 = Bitboard::from_square(7);
    assert_eq!(h1.north_east(), Bitboard::EMPTY);
    assert_eq!(h1.north_west(), Bitboard::from_square(14));
}

#[test]
fn test_display_diagram() {
    let text = Bitboard::from_square(0).to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[7], "x.......");
}

use super::*;

#[test]
fn test_piece_index_is_unique() {
    let mut seen = [false; 12];
    for pc in Piece::ALL {
        assert!(!seen[pc.idx()], "duplicate index for {:?}", pc);
        seen[pc.idx()] = true;
    }
    assert_eq!(Piece::WhitePawn.idx(), 0);
    assert_eq!(Piece::BlackKing.idx(), 11);
}

#[test]
fn test_piece_parts_round_trip() {
    for pc in Piece::ALL {
        assert_eq!(Piece::new(pc.color(), pc.kind()), pc);
        assert_eq!(Piece::from_char(pc.to_char()), Some(pc));
    }
    assert_eq!(Piece::from_char('x'), None);
}

#[test]
fn test_coords() {
    assert_eq!(coord_to_sq("a1"), Some(0));
    assert_eq!(coord_to_sq("h8"), Some(63));
    assert_eq!(coord_to_sq("e4"), Some(28));
    assert_eq!(coord_to_sq("i1"), None);
    assert_eq!(sq_to_coord(28), "e4");
}

#[test]
fn test_castle_move_squares() {
    let wk = Move::castle(Color::White, true);
    assert_eq!((wk.from, wk.to), (4, 6));
    assert!(wk.is_kingside_castle && !wk.is_queenside_castle);

    let bq = Move::castle(Color::Black, false);
    assert_eq!((bq.from, bq.to), (60, 58));
    assert_eq!(bq.piece, Piece::BlackKing);
}

#[test]
fn test_en_passant_move_records_victim() {
    let mv = Move::en_passant(36, 43, Piece::WhitePawn);
    assert!(mv.is_capture);
    assert_eq!(mv.captured, Some(Piece::BlackPawn));
}

#[test]
fn test_move_display() {
    let mv = Move::promotion(52, 60, Piece::WhitePawn, None, Piece::WhiteQueen);
    assert_eq!(mv.to_string(), "e7e8q");
}

//! Property tests over random legal move sequences.

use proptest::prelude::*;

use chess_core::{
    Bitboard, Color, Piece, PieceKind, Position, generate_all_moves, legal_moves, line,
};

const START_FENS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
];

/// Walk a random line: each selector picks one legal move modulo the count.
fn play_line(pos: &mut Position, selectors: &[usize]) -> usize {
    let mut played = 0;
    for &s in selectors {
        let moves = legal_moves(pos);
        if moves.is_empty() {
            break;
        }
        pos.make_move(moves[s % moves.len()]);
        played += 1;
    }
    played
}

fn assert_consistent(pos: &Position) {
    let mut union = Bitboard::EMPTY;
    for pc in Piece::ALL {
        let bb = pos.pieces(pc);
        assert!((union & bb).is_empty(), "{pc:?} overlaps another piece");
        union |= bb;
    }
    assert_eq!(union, pos.occupied());
    assert_eq!(
        pos.occupancy(Color::White) | pos.occupancy(Color::Black),
        pos.occupied()
    );
    assert!((pos.occupancy(Color::White) & pos.occupancy(Color::Black)).is_empty());
    assert_eq!(pos.hash(), pos.compute_hash());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn make_undo_round_trip(
        fen_idx in 0..START_FENS.len(),
        selectors in prop::collection::vec(any::<usize>(), 1..24),
    ) {
        let mut pos = Position::from_fen(START_FENS[fen_idx]).unwrap();
        let original = pos.clone();

        let mut snapshots = vec![pos.clone()];
        let played = play_line(&mut pos, &selectors);
        // Re-walk to collect the intermediate states
        let mut replay = original.clone();
        for &s in selectors.iter().take(played) {
            let moves = legal_moves(&replay);
            replay.make_move(moves[s % moves.len()]);
            snapshots.push(replay.clone());
        }

        for expected in snapshots.iter().rev().skip(1) {
            pos.undo_move();
            prop_assert_eq!(&pos, expected);
        }
        prop_assert_eq!(pos, original);
    }

    #[test]
    fn incremental_hash_matches_full_recompute(
        fen_idx in 0..START_FENS.len(),
        selectors in prop::collection::vec(any::<usize>(), 1..32),
    ) {
        let mut pos = Position::from_fen(START_FENS[fen_idx]).unwrap();
        for &s in &selectors {
            let moves = legal_moves(&pos);
            if moves.is_empty() {
                break;
            }
            pos.make_move(moves[s % moves.len()]);
            assert_consistent(&pos);
        }
        while pos.undo_depth() > 0 {
            pos.undo_move();
            assert_consistent(&pos);
        }
    }

    #[test]
    fn fen_round_trip_along_random_lines(
        fen_idx in 0..START_FENS.len(),
        selectors in prop::collection::vec(any::<usize>(), 0..16),
    ) {
        let mut pos = Position::from_fen(START_FENS[fen_idx]).unwrap();
        play_line(&mut pos, &selectors);
        let fen = pos.to_fen();
        let reparsed = Position::from_fen(&fen).unwrap();
        prop_assert_eq!(reparsed.to_fen(), fen);
        prop_assert_eq!(reparsed.hash(), pos.hash());
    }

    #[test]
    fn legal_moves_never_leave_king_in_check(
        fen_idx in 0..START_FENS.len(),
        selectors in prop::collection::vec(any::<usize>(), 0..16),
    ) {
        let mut pos = Position::from_fen(START_FENS[fen_idx]).unwrap();
        play_line(&mut pos, &selectors);
        let us = pos.side_to_move;
        for mv in legal_moves(&pos) {
            pos.make_move(mv);
            prop_assert!(!pos.is_king_checked(us), "{} leaves king in check", mv);
            pos.undo_move();
        }
    }
}

#[test]
fn pinned_piece_moves_stay_on_pin_line() {
    // Queen d4 pinned by the a7 bishop against the g1 king
    let pos = Position::from_fen("4k3/b7/8/8/3Q4/8/8/6K1 w - - 0 1").unwrap();
    let king = pos.king_square(Color::White).unwrap();
    let pinned = pos.pinned_pieces(Color::White);
    assert_eq!(pinned, Bitboard::from_square(27));

    let queen_moves: Vec<_> = generate_all_moves(&pos, Color::White)
        .into_iter()
        .filter(|m| m.piece.kind() == PieceKind::Queen)
        .collect();
    assert!(!queen_moves.is_empty());
    let pin_line = line(king, 27);
    for mv in queen_moves {
        assert!(pin_line.contains(mv.to), "{mv} leaves the pin line");
    }
}

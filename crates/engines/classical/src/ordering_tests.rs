use super::*;
use chess_core::{legal_moves, parse_move};

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

#[test]
fn test_mvv_lva_scores() {
    // Pawn takes queen beats queen takes queen
    let p = pos("4k3/8/8/3q4/2P1Q3/8/8/4K3 w - - 0 1");
    let pxq = parse_move(&p, "c4d5").unwrap();
    let qxq = parse_move(&p, "e4d5").unwrap();
    assert_eq!(score_move(&p, &pxq), CAPTURE_BASE + 900 * 10 - 100);
    assert_eq!(score_move(&p, &qxq), CAPTURE_BASE + 900 * 10 - 900);
}

#[test]
fn test_promotion_and_castle_scores() {
    let p = pos("4k3/1P6/8/8/8/8/8/4K2R w K - 0 1");
    let promo = parse_move(&p, "b7b8q").unwrap();
    assert_eq!(score_move(&p, &promo), PROMOTION_BASE + 900);
    let under = parse_move(&p, "b7b8n").unwrap();
    assert_eq!(score_move(&p, &under), PROMOTION_BASE + 320);
    let castle = parse_move(&p, "e1g1").unwrap();
    assert_eq!(score_move(&p, &castle), CASTLE_SCORE);
    let quiet = parse_move(&p, "h1h5").unwrap();
    assert_eq!(score_move(&p, &quiet), 0);
}

#[test]
fn test_pawn_attacked_destination_penalty() {
    // Knight to d5 walks into the e6 pawn
    let p = pos("4k3/8/4p3/8/8/2N5/8/4K3 w - - 0 1");
    let nd5 = parse_move(&p, "c3d5").unwrap();
    let nb5 = parse_move(&p, "c3b5").unwrap();
    assert_eq!(score_move(&p, &nd5), -PAWN_ATTACKED_PENALTY);
    assert_eq!(score_move(&p, &nb5), 0);
}

#[test]
fn test_order_moves_sorts_descending() {
    let p = pos("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let mut moves = legal_moves(&p);
    order_moves(&p, &mut moves);
    let scores: Vec<i32> = moves.iter().map(|m| score_move(&p, m)).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    assert!(moves[0].is_capture);
}

#[test]
fn test_promote_to_front() {
    let p = Position::startpos();
    let mut moves = legal_moves(&p);
    let target = moves[7];
    let rest: Vec<Move> = moves.iter().copied().filter(|m| *m != target).collect();
    assert!(promote_to_front(&mut moves, target));
    assert_eq!(moves[0], target);
    assert_eq!(&moves[1..], &rest[..]);

    let absent = parse_move(&pos("4k3/8/8/8/8/8/8/R3K3 w - - 0 1"), "a1a5").unwrap();
    assert!(!promote_to_front(&mut moves, absent));
}

use super::*;
use chess_core::{legal_moves, Position};

fn some_move() -> Move {
    legal_moves(&Position::startpos())[0]
}

#[test]
fn test_size_in_megabytes() {
    let tt = TranspositionTable::new(1);
    let slot = std::mem::size_of::<Option<TTEntry>>();
    assert_eq!(tt.capacity(), 1024 * 1024 / slot);
    assert!(tt.is_empty());
}

#[test]
fn test_exact_hit_and_miss() {
    let mut tt = TranspositionTable::with_capacity(1024);
    let mv = some_move();
    tt.store(42, 3, 17, Bound::Exact, Some(mv));

    let hit = tt.probe(42, 3, -100, 100);
    assert_eq!(hit.score, Some(17));
    assert_eq!(hit.best_move, Some(mv));

    // Different key in another slot
    assert_eq!(tt.probe(43, 0, -100, 100), TTProbe::default());
}

#[test]
fn test_insufficient_depth_still_returns_move() {
    let mut tt = TranspositionTable::with_capacity(1024);
    let mv = some_move();
    tt.store(7, 2, 50, Bound::Exact, Some(mv));
    let probe = tt.probe(7, 4, -100, 100);
    assert_eq!(probe.score, None);
    assert_eq!(probe.best_move, Some(mv));
    assert_eq!(tt.best_move(7), Some(mv));
}

#[test]
fn test_bounds_respect_window() {
    let mut tt = TranspositionTable::with_capacity(1024);
    tt.store(1, 5, 120, Bound::Lower, None);
    assert_eq!(tt.probe(1, 5, 0, 100).score, Some(120));
    assert_eq!(tt.probe(1, 5, 0, 200).score, None);

    tt.store(2, 5, -40, Bound::Upper, None);
    assert_eq!(tt.probe(2, 5, 0, 100).score, Some(-40));
    assert_eq!(tt.probe(2, 5, -50, 100).score, None);
}

#[test]
fn test_collision_overwrites_and_rejects_stale_key() {
    let mut tt = TranspositionTable::with_capacity(16);
    tt.store(3, 9, 1, Bound::Exact, Some(some_move()));
    // 19 maps to the same slot as 3
    tt.store(19, 1, 2, Bound::Exact, None);
    assert_eq!(tt.probe(3, 0, -10, 10), TTProbe::default());
    assert_eq!(tt.probe(19, 1, -10, 10).score, Some(2));
    assert_eq!(tt.len(), 1);
}

#[test]
fn test_clear() {
    let mut tt = TranspositionTable::with_capacity(16);
    tt.store(5, 1, 0, Bound::Exact, None);
    assert!(!tt.is_empty());
    tt.clear();
    assert!(tt.is_empty());
    assert_eq!(tt.get(5), None);
}

use crate::{board::Position, movegen::legal_moves_into, types::Move};

/// Number of leaf positions reachable in exactly `depth` legal plies.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    fn inner(pos: &mut Position, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        legal_moves_into(pos, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            pos.make_move(mv);
            nodes += inner(pos, depth - 1, rest);
            pos.undo_move();
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(pos, depth, &mut layers[..])
}

/// Perft split by root move, sorted by move text. Handy for locating a
/// generator bug against a reference engine.
pub fn perft_divide(pos: &mut Position, depth: u8) -> Vec<(Move, u64)> {
    let mut root = Vec::with_capacity(64);
    legal_moves_into(pos, &mut root);
    let mut out: Vec<(Move, u64)> = root
        .into_iter()
        .map(|mv| {
            pos.make_move(mv);
            let n = perft(pos, depth.saturating_sub(1));
            pos.undo_move();
            (mv, n)
        })
        .collect();
    out.sort_by_key(|(mv, _)| mv.to_string());
    out
}

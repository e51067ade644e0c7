//! Coordinate move notation (`e2e4`, `e7e8q`, `e1g1`).

use crate::board::Position;
use crate::error::NotationError;
use crate::movegen::legal_moves;
use crate::types::*;

pub fn move_to_string(mv: Move) -> String {
    mv.to_string()
}

/// Resolve coordinate text against the legal moves of `pos`, so the returned
/// move carries the generator's capture, castling and en-passant flags.
/// A promotion without a suffix is read as a queen promotion.
pub fn parse_move(pos: &Position, text: &str) -> Option<Move> {
    let text = text.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return None;
    }
    let from = coord_to_sq(&text[0..2])?;
    let to = coord_to_sq(&text[2..4])?;
    let promo = match text[4..].chars().next() {
        None => None,
        Some(c) => match c.to_ascii_lowercase() {
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            _ => return None,
        },
    };

    legal_moves(pos).into_iter().find(|m| {
        m.from == from
            && m.to == to
            && match m.promotion {
                None => promo.is_none(),
                Some(p) => p.kind() == promo.unwrap_or(PieceKind::Queen),
            }
    })
}

/// Play a whitespace-separated list of moves, stopping at the first one that
/// is malformed or illegal.
pub fn play_moves(pos: &mut Position, moves: &str) -> Result<(), NotationError> {
    for text in moves.split_whitespace() {
        let mv = parse_move(pos, text).ok_or_else(|| NotationError::IllegalMove {
            text: text.to_string(),
            fen: pos.to_fen(),
        })?;
        pos.make_move(mv);
    }
    Ok(())
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;

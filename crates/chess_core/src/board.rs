//! Bitboard position with incremental make/unmake.
//!
//! A [`Position`] holds one bitboard per colored piece plus the derived
//! per-color and total occupancy. Every call to [`Position::make_move`] pushes
//! an [`UndoRecord`] onto a stack owned by the position, and
//! [`Position::undo_move`] pops it to restore the exact prior state, hash
//! included.

use std::fmt;

use crate::attacks::{
    between, bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks,
};
use crate::bitboard::Bitboard;
use crate::error::{FenError, FenResult};
use crate::types::*;
use crate::zobrist::ZOBRIST;

pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };
    pub const NONE: CastlingRights = CastlingRights {
        wk: false,
        wq: false,
        bk: false,
        bq: false,
    };

    pub fn kingside(&self, color: Color) -> bool {
        match color {
            Color::White => self.wk,
            Color::Black => self.bk,
        }
    }

    pub fn queenside(&self, color: Color) -> bool {
        match color {
            Color::White => self.wq,
            Color::Black => self.bq,
        }
    }

    /// Drop any right whose king or rook home square is `sq`. Called for both
    /// the origin and the destination of every move, so a right also goes
    /// when its rook is captured at home.
    fn revoke_square(&mut self, sq: Square) {
        match sq {
            0 => self.wq = false,
            4 => {
                self.wk = false;
                self.wq = false;
            }
            7 => self.wk = false,
            56 => self.bq = false,
            60 => {
                self.bk = false;
                self.bq = false;
            }
            63 => self.bk = false,
            _ => {}
        }
    }

    /// XOR of the Zobrist keys of every right still held.
    pub fn hash_key(&self) -> u64 {
        [self.wk, self.wq, self.bk, self.bq]
            .iter()
            .enumerate()
            .filter(|&(_, &held)| held)
            .fold(0, |h, (i, _)| h ^ ZOBRIST.castling_key(i))
    }
}

/// Everything needed to take back one move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UndoRecord {
    pub mv: Move,
    pub captured: Option<Piece>,
    pub en_passant: Option<Square>,
    pub castling: CastlingRights,
    pub side_to_move: Color,
    pub white_castled: bool,
    pub black_castled: bool,
    pub hash: u64,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// Indexed by `Piece::idx()`
    pieces: [Bitboard; 12],
    white: Bitboard,
    black: Bitboard,
    occupied: Bitboard,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    /// Square a pawn skipped over on the previous double push
    pub en_passant: Option<Square>,
    hash: u64,
    pub white_castled: bool,
    pub black_castled: bool,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    undo_stack: Vec<UndoRecord>,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    fn empty() -> Self {
        Position {
            pieces: [Bitboard::EMPTY; 12],
            white: Bitboard::EMPTY,
            black: Bitboard::EMPTY,
            occupied: Bitboard::EMPTY,
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            hash: 0,
            white_castled: false,
            black_castled: false,
            halfmove_clock: 0,
            fullmove_number: 1,
            undo_stack: Vec::with_capacity(64),
        }
    }

    pub fn startpos() -> Self {
        let mut p = Self::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            let f = f as Square;
            p.pieces[Piece::new(Color::White, kind).idx()].set(f);
            p.pieces[Piece::new(Color::Black, kind).idx()].set(56 + f);
            p.pieces[Piece::WhitePawn.idx()].set(8 + f);
            p.pieces[Piece::BlackPawn.idx()].set(48 + f);
        }
        p.castling = CastlingRights::ALL;
        p.update_occupancy();
        p.hash = p.compute_hash();
        p
    }

    /// Parse a FEN string. Only the placement field is required; missing
    /// fields default to `w - - 0 1`.
    pub fn from_fen(fen: &str) -> FenResult<Self> {
        let mut fields = fen.split_whitespace();
        let placement = fields.next().ok_or(FenError::Empty)?;

        let mut p = Self::empty();
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i as u8;
            let mut file: u32 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d;
                    if file > 8 {
                        return Err(FenError::RankTooLong { rank: rank + 1 });
                    }
                    continue;
                }
                if file >= 8 {
                    return Err(FenError::RankTooLong { rank: rank + 1 });
                }
                match Piece::from_char(ch) {
                    Some(pc) => p.pieces[pc.idx()].set(rank * 8 + file as u8),
                    None => log::warn!("FEN: skipping unknown piece '{ch}' on rank {}", rank + 1),
                }
                file += 1;
            }
            if file < 8 {
                log::warn!("FEN: rank {} describes only {file} files", rank + 1);
            }
        }

        p.side_to_move = match fields.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => {
                log::warn!("FEN: unknown side to move '{other}', assuming white");
                Color::White
            }
        };

        if let Some(castling) = fields.next() {
            for c in castling.chars() {
                match c {
                    'K' => p.castling.wk = true,
                    'Q' => p.castling.wq = true,
                    'k' => p.castling.bk = true,
                    'q' => p.castling.bq = true,
                    '-' => {}
                    _ => log::warn!("FEN: skipping unknown castling flag '{c}'"),
                }
            }
        }

        p.en_passant = match fields.next() {
            None | Some("-") => None,
            Some(s) => {
                let ep = coord_to_sq(s);
                if ep.is_none() {
                    log::warn!("FEN: ignoring bad en-passant square '{s}'");
                }
                ep
            }
        };

        p.halfmove_clock = parse_counter(fields.next(), 0, "halfmove clock");
        p.fullmove_number = parse_counter(fields.next(), 1, "fullmove number");

        p.update_occupancy();
        p.hash = p.compute_hash();
        Ok(p)
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);
        for rank in (0..8u8).rev() {
            let mut empty = 0;
            for file in 0..8u8 {
                match self.piece_at(rank * 8 + file) {
                    Some(pc) => {
                        if empty > 0 {
                            fen.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        fen.push(pc.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push(char::from(b'0' + empty));
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(if self.side_to_move.is_white() { 'w' } else { 'b' });

        fen.push(' ');
        let len = fen.len();
        for (held, c) in [
            (self.castling.wk, 'K'),
            (self.castling.wq, 'Q'),
            (self.castling.bk, 'k'),
            (self.castling.bq, 'q'),
        ] {
            if held {
                fen.push(c);
            }
        }
        if fen.len() == len {
            fen.push('-');
        }

        fen.push(' ');
        match self.en_passant {
            Some(sq) => fen.push_str(&sq_to_coord(sq)),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[inline(always)]
    pub fn pieces(&self, piece: Piece) -> Bitboard {
        self.pieces[piece.idx()]
    }

    #[inline(always)]
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces[Piece::new(color, kind).idx()]
    }

    #[inline(always)]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline(always)]
    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if !self.occupied.contains(sq) {
            return None;
        }
        Piece::ALL
            .into_iter()
            .find(|pc| self.pieces[pc.idx()].contains(sq))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color, PieceKind::King).lsb()
    }

    #[inline(always)]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub fn has_castled(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_castled,
            Color::Black => self.black_castled,
        }
    }

    /// Number of moves that can currently be undone.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Hash rebuilt from scratch; always equal to [`Position::hash`].
    pub fn compute_hash(&self) -> u64 {
        let mut h = 0u64;
        for pc in Piece::ALL {
            for sq in self.pieces[pc.idx()] {
                h ^= ZOBRIST.piece_key(pc, sq);
            }
        }
        if self.side_to_move == Color::Black {
            h ^= ZOBRIST.side_to_move;
        }
        h ^= self.castling.hash_key();
        if let Some(ep) = self.en_passant {
            h ^= ZOBRIST.ep_key(ep);
        }
        h
    }

    // =========================================================================
    // Attacks, checks and pins
    // =========================================================================

    /// Pieces of color `by` attacking `sq`, given occupancy `occupied`.
    pub fn attackers_to(&self, sq: Square, by: Color, occupied: Bitboard) -> Bitboard {
        let diag = self.pieces_of(by, PieceKind::Bishop) | self.pieces_of(by, PieceKind::Queen);
        let ortho = self.pieces_of(by, PieceKind::Rook) | self.pieces_of(by, PieceKind::Queen);
        (pawn_attacks(sq, by.other()) & self.pieces_of(by, PieceKind::Pawn))
            | (knight_attacks(sq) & self.pieces_of(by, PieceKind::Knight))
            | (king_attacks(sq) & self.pieces_of(by, PieceKind::King))
            | (bishop_attacks(sq, occupied) & diag)
            | (rook_attacks(sq, occupied) & ortho)
    }

    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        self.attackers_to(sq, by, self.occupied).is_nonempty()
    }

    /// Whether `color`'s king is attacked. A side without a king is never in
    /// check.
    pub fn is_king_checked(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|k| self.is_square_attacked(k, color.other()))
    }

    /// Enemy pieces giving check to `color`'s king.
    pub fn checkers(&self, color: Color) -> Bitboard {
        match self.king_square(color) {
            Some(k) => self.attackers_to(k, color.other(), self.occupied),
            None => Bitboard::EMPTY,
        }
    }

    /// Number of enemy pieces attacking `color`'s king: 0, 1 (check) or 2
    /// (double check).
    pub fn attackers_count(&self, color: Color) -> u32 {
        self.checkers(color).popcount()
    }

    /// `color`'s pieces that are the only blocker between their king and an
    /// enemy slider on the same line.
    pub fn pinned_pieces(&self, color: Color) -> Bitboard {
        let Some(king) = self.king_square(color) else {
            return Bitboard::EMPTY;
        };
        let enemy = color.other();
        let queens = self.pieces_of(enemy, PieceKind::Queen);
        let snipers = (rook_attacks(king, Bitboard::EMPTY)
            & (self.pieces_of(enemy, PieceKind::Rook) | queens))
            | (bishop_attacks(king, Bitboard::EMPTY)
                & (self.pieces_of(enemy, PieceKind::Bishop) | queens));

        let own = self.occupancy(color);
        let mut pinned = Bitboard::EMPTY;
        for sniper in snipers {
            let blockers = between(king, sniper) & self.occupied;
            if blockers.is_single() && (blockers & own).is_nonempty() {
                pinned |= blockers;
            }
        }
        pinned
    }

    // =========================================================================
    // Castling
    // =========================================================================

    pub fn can_castle_kingside(&self, color: Color) -> bool {
        let home = home_rank(color) * 8;
        self.castling.kingside(color)
            && self.castle_path_clear(color, home + 7, &[home + 5, home + 6])
    }

    pub fn can_castle_queenside(&self, color: Color) -> bool {
        let home = home_rank(color) * 8;
        self.castling.queenside(color)
            && self.castle_path_clear(color, home, &[home + 3, home + 2])
    }

    /// King and rook at home, every square between them empty, king not in
    /// check and not crossing or landing on an attacked square.
    fn castle_path_clear(&self, color: Color, rook_sq: Square, king_path: &[Square]) -> bool {
        let king_sq = home_rank(color) * 8 + 4;
        if !self.pieces_of(color, PieceKind::King).contains(king_sq)
            || !self.pieces_of(color, PieceKind::Rook).contains(rook_sq)
        {
            return false;
        }
        if (between(king_sq, rook_sq) & self.occupied).is_nonempty() {
            return false;
        }
        let enemy = color.other();
        !self.is_square_attacked(king_sq, enemy)
            && king_path
                .iter()
                .all(|&sq| !self.is_square_attacked(sq, enemy))
    }

    // =========================================================================
    // Make / undo
    // =========================================================================

    #[inline(always)]
    fn toggle(&mut self, piece: Piece, sq: Square) {
        self.pieces[piece.idx()] ^= Bitboard::from_square(sq);
        self.hash ^= ZOBRIST.piece_key(piece, sq);
    }

    fn update_occupancy(&mut self) {
        self.white = self.pieces[..6]
            .iter()
            .fold(Bitboard::EMPTY, |acc, &bb| acc | bb);
        self.black = self.pieces[6..]
            .iter()
            .fold(Bitboard::EMPTY, |acc, &bb| acc | bb);
        self.occupied = self.white | self.black;
    }

    /// Square of the pawn removed by an en-passant capture landing on `to`.
    fn en_passant_victim(mover: Color, to: Square) -> Square {
        match mover {
            Color::White => to - 8,
            Color::Black => to + 8,
        }
    }

    /// Apply a move produced by the move generator.
    pub fn make_move(&mut self, mv: Move) {
        let us = mv.piece.color();
        let capture_sq = if mv.is_en_passant {
            Self::en_passant_victim(us, mv.to)
        } else {
            mv.to
        };
        let captured = self.piece_at(capture_sq).filter(|pc| pc.color() != us);

        self.undo_stack.push(UndoRecord {
            mv,
            captured,
            en_passant: self.en_passant,
            castling: self.castling,
            side_to_move: self.side_to_move,
            white_castled: self.white_castled,
            black_castled: self.black_castled,
            hash: self.hash,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        });

        if let Some(victim) = captured {
            self.toggle(victim, capture_sq);
        }

        self.toggle(mv.piece, mv.from);
        self.toggle(mv.promotion.unwrap_or(mv.piece), mv.to);

        if mv.is_castle() {
            let home = home_rank(us) * 8;
            let (rook_from, rook_to) = if mv.is_kingside_castle {
                (home + 7, home + 5)
            } else {
                (home, home + 3)
            };
            let rook = Piece::new(us, PieceKind::Rook);
            self.toggle(rook, rook_from);
            self.toggle(rook, rook_to);
            match us {
                Color::White => self.white_castled = true,
                Color::Black => self.black_castled = true,
            }
        }

        self.hash ^= self.castling.hash_key();
        self.castling.revoke_square(mv.from);
        self.castling.revoke_square(mv.to);
        self.hash ^= self.castling.hash_key();

        if let Some(ep) = self.en_passant.take() {
            self.hash ^= ZOBRIST.ep_key(ep);
        }
        if mv.piece.kind() == PieceKind::Pawn && mv.from.abs_diff(mv.to) == 16 {
            let ep = (mv.from + mv.to) / 2;
            self.en_passant = Some(ep);
            self.hash ^= ZOBRIST.ep_key(ep);
        }

        if mv.piece.kind() == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if us == Color::Black {
            self.fullmove_number += 1;
        }

        self.side_to_move = self.side_to_move.other();
        self.hash ^= ZOBRIST.side_to_move;

        self.update_occupancy();
    }

    /// Take back the most recent move.
    ///
    /// # Panics
    /// If no move has been made.
    pub fn undo_move(&mut self) {
        let Some(rec) = self.undo_stack.pop() else {
            panic!("undo_move called with an empty undo stack");
        };
        let mv = rec.mv;
        let us = mv.piece.color();

        self.pieces[mv.promotion.unwrap_or(mv.piece).idx()].clear(mv.to);
        self.pieces[mv.piece.idx()].set(mv.from);

        if mv.is_castle() {
            let home = home_rank(us) * 8;
            let (rook_from, rook_to) = if mv.is_kingside_castle {
                (home + 7, home + 5)
            } else {
                (home, home + 3)
            };
            let rook = Piece::new(us, PieceKind::Rook).idx();
            self.pieces[rook].clear(rook_to);
            self.pieces[rook].set(rook_from);
        }

        if let Some(victim) = rec.captured {
            let sq = if mv.is_en_passant {
                Self::en_passant_victim(us, mv.to)
            } else {
                mv.to
            };
            self.pieces[victim.idx()].set(sq);
        }

        self.en_passant = rec.en_passant;
        self.castling = rec.castling;
        self.side_to_move = rec.side_to_move;
        self.white_castled = rec.white_castled;
        self.black_castled = rec.black_castled;
        self.hash = rec.hash;
        self.halfmove_clock = rec.halfmove_clock;
        self.fullmove_number = rec.fullmove_number;

        self.update_occupancy();
    }
}

fn parse_counter(field: Option<&str>, default: u32, name: &str) -> u32 {
    match field {
        None => default,
        Some(s) => s.parse().unwrap_or_else(|_| {
            log::warn!("FEN: bad {name} '{s}', using {default}");
            default
        }),
    }
}

/// Board diagram, rank 8 at the top, `.` for empty squares.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            for file in 0..8u8 {
                let c = self.piece_at(rank * 8 + file).map_or('.', Piece::to_char);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;

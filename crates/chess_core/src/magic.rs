//! Magic bitboard lookup for rook and bishop attacks.
//!
//! For each square the relevant occupancy (the slider's rays minus the board
//! edge it can't be blocked beyond) is multiplied by a magic number and the top
//! bits select a slot in a per-square attack table. Magics are found once at
//! startup with a seeded RNG, so the tables are identical on every run.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::attacks::{bishop_attacks_slow, rook_attacks_slow};
use crate::bitboard::Bitboard;
use crate::types::Square;

const ROOK_SEED: u64 = 0x5EED_0F_2007;
const BISHOP_SEED: u64 = 0x5EED_0F_B15B;

/// One square's magic parameters.
#[derive(Clone, Copy, Debug, Default)]
struct MagicEntry {
    mask: Bitboard,
    magic: u64,
    shift: u32,
    offset: usize,
}

impl MagicEntry {
    #[inline(always)]
    fn index(&self, occupied: Bitboard) -> usize {
        let relevant = (occupied & self.mask).0;
        self.offset + (relevant.wrapping_mul(self.magic) >> self.shift) as usize
    }
}

/// Attack tables for one slider type.
struct SliderTable {
    entries: [MagicEntry; 64],
    attacks: Vec<Bitboard>,
}

impl SliderTable {
    fn build(
        seed: u64,
        mask_of: fn(Square) -> Bitboard,
        slow: fn(Square, Bitboard) -> Bitboard,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut entries = [MagicEntry::default(); 64];
        let mut attacks = Vec::new();

        for sq in 0..64u8 {
            let mask = mask_of(sq);
            let bits = mask.popcount();

            // Carry-rippler: enumerate every subset of the mask.
            let mut occupancies = Vec::with_capacity(1 << bits);
            let mut references = Vec::with_capacity(1 << bits);
            let mut subset = 0u64;
            loop {
                occupancies.push(subset);
                references.push(slow(sq, Bitboard(subset)));
                subset = subset.wrapping_sub(mask.0) & mask.0;
                if subset == 0 {
                    break;
                }
            }

            let shift = 64 - bits;
            let mut table = vec![Bitboard::EMPTY; 1 << bits];
            let magic = find_magic(&mut rng, mask, shift, &occupancies, &references, &mut table);

            entries[sq as usize] = MagicEntry {
                mask,
                magic,
                shift,
                offset: attacks.len(),
            };
            attacks.extend_from_slice(&table);
        }

        Self { entries, attacks }
    }

    #[inline(always)]
    fn get(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.attacks[self.entries[sq as usize].index(occupied)]
    }
}

/// Try sparse random candidates until one maps every occupancy subset without a
/// destructive collision. Fills `table` for the winning candidate.
fn find_magic(
    rng: &mut StdRng,
    mask: Bitboard,
    shift: u32,
    occupancies: &[u64],
    references: &[Bitboard],
    table: &mut [Bitboard],
) -> u64 {
    let mut used = vec![false; table.len()];
    loop {
        let magic = rng.r#gen::<u64>() & rng.r#gen::<u64>() & rng.r#gen::<u64>();
        // Cheap rejection: a good magic spreads the mask into the top byte.
        if (mask.0.wrapping_mul(magic) & 0xFF00_0000_0000_0000).count_ones() < 6 {
            continue;
        }

        used.iter_mut().for_each(|u| *u = false);
        let mut ok = true;
        for (&occ, &reference) in occupancies.iter().zip(references) {
            let idx = (occ.wrapping_mul(magic) >> shift) as usize;
            if !used[idx] {
                used[idx] = true;
                table[idx] = reference;
            } else if table[idx] != reference {
                ok = false;
                break;
            }
        }
        if ok {
            return magic;
        }
    }
}

/// Rook relevant-occupancy mask: rays without the far edge squares.
pub fn rook_mask(sq: Square) -> Bitboard {
    let rank = Bitboard::rank(sq / 8);
    let file = Bitboard::file(sq % 8);
    let edges = ((Bitboard::RANK_1 | Bitboard::RANK_8) & !rank)
        | ((Bitboard::FILE_A | Bitboard::FILE_H) & !file);
    rook_attacks_slow(sq, Bitboard::EMPTY) & !edges
}

/// Bishop relevant-occupancy mask: diagonals without any edge square.
pub fn bishop_mask(sq: Square) -> Bitboard {
    let edges = Bitboard::RANK_1 | Bitboard::RANK_8 | Bitboard::FILE_A | Bitboard::FILE_H;
    bishop_attacks_slow(sq, Bitboard::EMPTY) & !edges
}

struct MagicTables {
    rook: SliderTable,
    bishop: SliderTable,
}

/// Lazily built rook and bishop tables shared by the whole process.
pub struct Magics {
    tables: OnceLock<MagicTables>,
}

impl Magics {
    const fn new() -> Self {
        Self {
            tables: OnceLock::new(),
        }
    }

    fn tables(&self) -> &MagicTables {
        self.tables.get_or_init(|| {
            let start = std::time::Instant::now();
            let tables = MagicTables {
                rook: SliderTable::build(ROOK_SEED, rook_mask, rook_attacks_slow),
                bishop: SliderTable::build(BISHOP_SEED, bishop_mask, bishop_attacks_slow),
            };
            log::debug!(
                "magic tables ready: {} rook + {} bishop entries in {:?}",
                tables.rook.attacks.len(),
                tables.bishop.attacks.len(),
                start.elapsed()
            );
            tables
        })
    }

    /// Force table construction (otherwise done on first lookup).
    pub fn init(&self) {
        self.tables();
    }

    #[inline(always)]
    pub fn rook(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.tables().rook.get(sq, occupied)
    }

    #[inline(always)]
    pub fn bishop(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.tables().bishop.get(sq, occupied)
    }
}

pub static MAGICS: Magics = Magics::new();

#[cfg(test)]
#[path = "magic_tests.rs"]
mod magic_tests;

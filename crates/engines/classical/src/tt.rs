//! Direct-mapped transposition table keyed by the Zobrist hash.

use chess_core::Move;

/// How a stored score relates to the true value of the position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// Search failed high: true score >= stored score
    Lower,
    /// Search failed low: true score <= stored score
    Upper,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub key: u64,
    pub depth: u8,
    pub score: i32,
    pub bound: Bound,
    pub best_move: Option<Move>,
}

/// Outcome of [`TranspositionTable::probe`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TTProbe {
    /// Score usable as the node's result without searching
    pub score: Option<i32>,
    /// Best move recorded for this exact position, at any depth
    pub best_move: Option<Move>,
}

pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
}

impl TranspositionTable {
    /// Table using roughly `size_mb` MiB (at least one slot).
    pub fn new(size_mb: usize) -> Self {
        let slot = std::mem::size_of::<Option<TTEntry>>();
        let capacity = (size_mb * 1024 * 1024 / slot).max(1);
        Self::with_capacity(capacity)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: vec![None; capacity.max(1)],
        }
    }

    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Option::is_none)
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        (key % self.entries.len() as u64) as usize
    }

    /// Always replaces whatever occupies the slot.
    pub fn store(&mut self, key: u64, depth: u8, score: i32, bound: Bound, best_move: Option<Move>) {
        let idx = self.index(key);
        self.entries[idx] = Some(TTEntry {
            key,
            depth,
            score,
            bound,
            best_move,
        });
    }

    pub fn get(&self, key: u64) -> Option<&TTEntry> {
        self.entries[self.index(key)]
            .as_ref()
            .filter(|e| e.key == key)
    }

    pub fn probe(&self, key: u64, depth: u8, alpha: i32, beta: i32) -> TTProbe {
        let Some(entry) = self.get(key) else {
            return TTProbe::default();
        };
        let usable = entry.depth >= depth
            && match entry.bound {
                Bound::Exact => true,
                Bound::Lower => entry.score >= beta,
                Bound::Upper => entry.score <= alpha,
            };
        TTProbe {
            score: usable.then_some(entry.score),
            best_move: entry.best_move,
        }
    }

    pub fn best_move(&self, key: u64) -> Option<Move> {
        self.get(key).and_then(|e| e.best_move)
    }

    pub fn clear(&mut self) {
        self.entries.fill(None);
    }
}

#[cfg(test)]
#[path = "tt_tests.rs"]
mod tt_tests;

// Per-state chunk statistics.

use std::hash::Hash;

use grouper_fsa::Chunk;
use hashbrown::HashMap;

/// Counters for one state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateStats {
    pub chunks: usize,
    pub symbols: usize,
    pub longest: usize,
}

/// Chunk counts and lengths, grouped by state.
///
/// States are reported in the order they were first seen, so two summaries
/// of the same input always list them identically.
#[derive(Debug, Clone)]
pub struct ChunkSummary<S> {
    slots: HashMap<S, usize>,
    entries: Vec<(S, StateStats)>,
    total_chunks: usize,
    total_symbols: usize,
}

impl<S: Copy + Eq + Hash> ChunkSummary<S> {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            entries: Vec::new(),
            total_chunks: 0,
            total_symbols: 0,
        }
    }

    /// Count one chunk of `len` symbols under `state`.
    pub fn record(&mut self, state: S, len: usize) {
        let slot = *self.slots.entry(state).or_insert_with(|| {
            self.entries.push((state, StateStats::default()));
            self.entries.len() - 1
        });
        let stats = &mut self.entries[slot].1;
        stats.chunks += 1;
        stats.symbols += len;
        stats.longest = stats.longest.max(len);
        self.total_chunks += 1;
        self.total_symbols += len;
    }

    pub fn record_chunk(&mut self, chunk: &Chunk<S>) {
        self.record(chunk.state, chunk.len());
    }

    pub fn get(&self, state: S) -> Option<&StateStats> {
        self.slots.get(&state).map(|&slot| &self.entries[slot].1)
    }

    /// States and their counters in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (S, &StateStats)> + '_ {
        self.entries.iter().map(|(state, stats)| (*state, stats))
    }

    pub fn total_chunks(&self) -> usize {
        self.total_chunks
    }

    pub fn total_symbols(&self) -> usize {
        self.total_symbols
    }

    pub fn is_empty(&self) -> bool {
        self.total_chunks == 0
    }
}

impl<S: Copy + Eq + Hash> Default for ChunkSummary<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Copy + Eq + Hash> Extend<Chunk<S>> for ChunkSummary<S> {
    fn extend<I: IntoIterator<Item = Chunk<S>>>(&mut self, iter: I) {
        for chunk in iter {
            self.record_chunk(&chunk);
        }
    }
}

// Dense transition table and its configuration API.

use std::fmt;
use std::marker::PhantomData;

use crate::grouper::Grouper;
use crate::width::StateIndex;

/// A `STATE_COUNT x SYMBOL_COUNT` matrix of next-state indices.
///
/// Entries are stored row-major (one row per state) in the grouper's
/// [`Index`](Grouper::Index) type. A fresh table is the identity automaton:
/// every state loops to itself on every symbol. The mutation methods move it
/// away from that, with the last write for a `(state, symbol)` pair winning.
/// There is no way to read a single entry back; traversal is the only reader.
///
/// Configuration and traversal are separate phases: mutation needs
/// `&mut self`, traversal `&self`, so a table can be configured once and then
/// shared freely (for instance from a `static LazyLock`).
pub struct TransitionTable<G: Grouper> {
    entries: Box<[G::Index]>,
    _grouper: PhantomData<fn() -> G>,
}

impl<G: Grouper> TransitionTable<G> {
    /// Build the identity automaton for `G`.
    ///
    /// Fails to compile if `G` declares zero states or symbols, or if
    /// `G::Index` cannot represent `STATE_COUNT - 1`.
    pub fn new() -> Self {
        const {
            assert!(G::STATE_COUNT > 0, "a grouper needs at least one state");
            assert!(G::SYMBOL_COUNT > 0, "a grouper needs at least one symbol");
            assert!(
                G::STATE_COUNT - 1 <= <G::Index as StateIndex>::MAX,
                "grouper index type is too narrow for its state count"
            );
            assert!(
                G::STATE_COUNT.checked_mul(G::SYMBOL_COUNT).is_some(),
                "transition table size overflows usize"
            );
        }

        let entries: Box<[G::Index]> = (0..G::STATE_COUNT * G::SYMBOL_COUNT)
            .map(|slot| G::Index::from_index(slot / G::SYMBOL_COUNT))
            .collect();
        let width = <G::Index as StateIndex>::WIDTH;
        tracing::debug!(
            states = G::STATE_COUNT,
            symbols = G::SYMBOL_COUNT,
            width = ?width,
            "built identity transition table"
        );
        Self {
            entries,
            _grouper: PhantomData,
        }
    }

    /// Make `from` move to `to` on `symbol`.
    ///
    /// # Panics
    ///
    /// Panics if any of the three maps outside the grouper's index range.
    pub fn set_transition(&mut self, from: G::State, to: G::State, symbol: G::Symbol) -> &mut Self {
        self.write(G::state_index(from), G::state_index(to), G::symbol_index(symbol));
        self
    }

    /// Like [`set_transition`](Self::set_transition), addressing the symbol by
    /// its dense index instead of its value.
    ///
    /// # Panics
    ///
    /// Panics if `symbol_index >= SYMBOL_COUNT` or a state is out of range.
    pub fn set_transition_by_index(&mut self, from: G::State, to: G::State, symbol_index: usize) -> &mut Self {
        self.write(G::state_index(from), G::state_index(to), symbol_index);
        self
    }

    /// Make `from` move to `to` on every symbol.
    ///
    /// Usually called first to set a catch-all, then refined with the
    /// per-symbol methods.
    pub fn set_all_transitions(&mut self, from: G::State, to: G::State) -> &mut Self {
        let to = self.checked_target(G::state_index(to));
        self.row_mut(G::state_index(from)).fill(to);
        tracing::trace!(from = G::state_index(from), "filled transition row");
        self
    }

    /// Make `from` move to `to` on every symbol whose dense index satisfies
    /// `predicate`.
    ///
    /// The predicate sees indices, not symbol values; with an identity
    /// mapping (byte value == index) byte classifiers can be passed directly.
    pub fn set_transitions_where<F>(&mut self, from: G::State, to: G::State, mut predicate: F) -> &mut Self
    where
        F: FnMut(usize) -> bool,
    {
        let to = self.checked_target(G::state_index(to));
        let row = self.row_mut(G::state_index(from));
        let mut written = 0usize;
        for (symbol, entry) in row.iter_mut().enumerate() {
            if predicate(symbol) {
                *entry = to;
                written += 1;
            }
        }
        tracing::trace!(from = G::state_index(from), written, "set transitions by predicate");
        self
    }

    /// Raw table storage, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.entries[..])
    }

    /// Bytes of memory the entries occupy.
    pub fn footprint(&self) -> usize {
        size_of_val(&*self.entries)
    }

    /// Dense index of the state `state_index` moves to on `symbol_index`.
    ///
    /// Both indices are trusted. Out-of-range values trip a debug assertion;
    /// in release builds they read some other valid entry or panic on the
    /// slice bound.
    #[inline(always)]
    pub(crate) fn next_index(&self, state_index: usize, symbol_index: usize) -> usize {
        debug_assert!(state_index < G::STATE_COUNT, "state index {state_index} out of range");
        debug_assert!(symbol_index < G::SYMBOL_COUNT, "symbol index {symbol_index} out of range");
        self.entries[state_index * G::SYMBOL_COUNT + symbol_index].to_index()
    }

    fn write(&mut self, from: usize, to: usize, symbol: usize) {
        assert!(
            symbol < G::SYMBOL_COUNT,
            "symbol index {symbol} out of range (count {})",
            G::SYMBOL_COUNT
        );
        let to = self.checked_target(to);
        self.row_mut(from)[symbol] = to;
    }

    fn checked_target(&self, to: usize) -> G::Index {
        assert!(
            to < G::STATE_COUNT,
            "state index {to} out of range (count {})",
            G::STATE_COUNT
        );
        G::Index::from_index(to)
    }

    fn row_mut(&mut self, from: usize) -> &mut [G::Index] {
        assert!(
            from < G::STATE_COUNT,
            "state index {from} out of range (count {})",
            G::STATE_COUNT
        );
        let start = from * G::SYMBOL_COUNT;
        &mut self.entries[start..start + G::SYMBOL_COUNT]
    }
}

impl<G: Grouper> Default for TransitionTable<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Grouper> Clone for TransitionTable<G> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            _grouper: PhantomData,
        }
    }
}

impl<G: Grouper> PartialEq for TransitionTable<G> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<G: Grouper> Eq for TransitionTable<G> {}

impl<G: Grouper> fmt::Debug for TransitionTable<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionTable")
            .field("states", &G::STATE_COUNT)
            .field("symbols", &G::SYMBOL_COUNT)
            .field("width", &<G::Index as StateIndex>::WIDTH)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Tiny, Wide};

    fn entry(table: &TransitionTable<Tiny>, from: u8, symbol: u8) -> usize {
        table.next_index(from as usize, symbol as usize)
    }

    #[test]
    fn fresh_table_is_identity() {
        let table = TransitionTable::<Tiny>::new();
        for state in 0..Tiny::STATE_COUNT as u8 {
            for symbol in 0..Tiny::SYMBOL_COUNT as u8 {
                assert_eq!(entry(&table, state, symbol), state as usize);
            }
        }
    }

    #[test]
    fn untouched_entries_stay_identity() {
        let mut table = TransitionTable::<Tiny>::new();
        table.set_transition(0, 2, 1).set_all_transitions(1, 0);

        assert_eq!(entry(&table, 0, 1), 2);
        assert_eq!(entry(&table, 0, 0), 0);
        assert_eq!(entry(&table, 0, 3), 0);
        for symbol in 0..4 {
            assert_eq!(entry(&table, 1, symbol), 0);
            assert_eq!(entry(&table, 2, symbol), 2);
        }
    }

    #[test]
    fn repeated_mutation_is_idempotent() {
        let mut once = TransitionTable::<Tiny>::new();
        once.set_transition(2, 1, 3);
        let mut twice = once.clone();
        twice.set_transition(2, 1, 3);
        assert_eq!(once, twice);

        let mut filled = TransitionTable::<Tiny>::new();
        filled.set_transitions_where(0, 1, |s| s % 2 == 0);
        let snapshot = filled.as_bytes().to_vec();
        filled.set_transitions_where(0, 1, |s| s % 2 == 0);
        assert_eq!(filled.as_bytes(), &snapshot[..]);
    }

    #[test]
    fn later_write_wins() {
        let mut table = TransitionTable::<Tiny>::new();
        table.set_transition(0, 1, 2).set_transition(0, 2, 2);
        assert_eq!(entry(&table, 0, 2), 2);

        table.set_all_transitions(1, 2).set_transition_by_index(1, 0, 3);
        assert_eq!(entry(&table, 1, 3), 0);
        assert_eq!(entry(&table, 1, 0), 2);

        table.set_all_transitions(1, 1);
        assert_eq!(entry(&table, 1, 3), 1);
    }

    #[test]
    fn row_fill_matches_per_symbol_writes() {
        let mut filled = TransitionTable::<Tiny>::new();
        filled.set_all_transitions(2, 0);

        let mut by_hand = TransitionTable::<Tiny>::new();
        for symbol in 0..Tiny::SYMBOL_COUNT {
            by_hand.set_transition_by_index(2, 0, symbol);
        }
        assert_eq!(filled, by_hand);
    }

    #[test]
    fn predicate_sees_dense_indices() {
        let mut seen = Vec::new();
        let mut table = TransitionTable::<Tiny>::new();
        table.set_transitions_where(1, 2, |s| {
            seen.push(s);
            s >= 2
        });
        assert_eq!(seen, [0, 1, 2, 3]);
        assert_eq!(entry(&table, 1, 1), 1);
        assert_eq!(entry(&table, 1, 2), 2);
        assert_eq!(entry(&table, 1, 3), 2);
    }

    #[test]
    fn by_index_and_by_value_agree() {
        let mut by_value = TransitionTable::<Tiny>::new();
        by_value.set_transition(2, 0, 3);
        let mut by_index = TransitionTable::<Tiny>::new();
        by_index.set_transition_by_index(2, 0, 3);
        assert_eq!(by_value, by_index);
    }

    #[test]
    #[should_panic(expected = "symbol index 4 out of range")]
    fn symbol_out_of_range_panics() {
        TransitionTable::<Tiny>::new().set_transition_by_index(0, 1, 4);
    }

    #[test]
    #[should_panic(expected = "state index 3 out of range")]
    fn target_out_of_range_panics() {
        TransitionTable::<Tiny>::new().set_all_transitions(0, 3);
    }

    #[test]
    fn footprint_follows_index_width() {
        let tiny = TransitionTable::<Tiny>::new();
        assert_eq!(tiny.footprint(), 3 * 4);
        assert_eq!(tiny.as_bytes().len(), tiny.footprint());

        let wide = TransitionTable::<Wide>::new();
        assert_eq!(wide.footprint(), Wide::STATE_COUNT * Wide::SYMBOL_COUNT * 2);
    }

    #[test]
    fn wide_identity_survives_narrowing() {
        let table = TransitionTable::<Wide>::new();
        let last = Wide::STATE_COUNT - 1;
        assert_eq!(table.next_index(last, 0), last);
        assert_eq!(table.next_index(256, 1), 256);
    }
}

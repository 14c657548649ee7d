// Single-pass traversal of a symbol stream through a transition table.

use std::iter::FusedIterator;

use crate::GrouperError;
use crate::chunk::{Chunk, Outcome};
use crate::grouper::Grouper;
use crate::table::TransitionTable;

/// Running state of one traversal.
///
/// The raw state drives transitions; `reported` is its folded identity and
/// decides where chunks end.
struct Cursor<G: Grouper> {
    state: G::State,
    state_index: usize,
    reported: G::State,
    chunk_start: usize,
}

impl<G: Grouper> Cursor<G> {
    fn new(start: G::State) -> Self {
        Self {
            state: start,
            state_index: G::state_index(start),
            reported: G::fold_state(start),
            chunk_start: 0,
        }
    }

    /// Move to `next_index` before the symbol at `position` is absorbed.
    ///
    /// Returns the chunk that ends at `position`, if the move crosses a
    /// reported-identity boundary and the running chunk is non-empty.
    #[inline(always)]
    fn advance(&mut self, next_index: usize, position: usize) -> Option<Chunk<G::State>> {
        if next_index == self.state_index {
            return None;
        }
        let next = G::state_at(next_index);
        let next_reported = G::fold_state(next);

        let mut finished = None;
        if next_reported != self.reported && self.chunk_start != position {
            finished = Some(Chunk::new(self.state, self.chunk_start, position));
            self.chunk_start = position;
        }
        self.state = next;
        self.state_index = next_index;
        self.reported = next_reported;
        finished
    }

    /// The trailing chunk of an input of length `end`, if any.
    fn finish(&self, end: usize) -> Option<Chunk<G::State>> {
        (self.chunk_start != end).then(|| Chunk::new(self.state, self.chunk_start, end))
    }
}

impl<G: Grouper> TransitionTable<G> {
    /// Run `input` through the automaton starting at `start`, calling
    /// `on_chunk` once per chunk in input order.
    ///
    /// Returning `false` from `on_chunk` stops the traversal at once: no
    /// further symbols are pulled from `input` and no further callbacks are
    /// made. The return value for the trailing chunk is ignored.
    ///
    /// Chunk positions count symbols from the start of `input`. An empty
    /// input produces no chunks.
    ///
    /// Symbol and state indices are trusted (see [`Grouper`]); use
    /// [`try_traverse`](Self::try_traverse) to have them checked.
    pub fn traverse<I, F>(&self, input: I, start: G::State, mut on_chunk: F) -> Outcome
    where
        I: IntoIterator<Item = G::Symbol>,
        F: FnMut(Chunk<G::State>) -> bool,
    {
        let mut cursor = Cursor::<G>::new(start);
        let mut position = 0;
        for symbol in input {
            let next = self.next_index(cursor.state_index, G::symbol_index(symbol));
            if let Some(chunk) = cursor.advance(next, position) {
                if !on_chunk(chunk) {
                    return Outcome::Cancelled;
                }
            }
            position += 1;
        }
        if let Some(chunk) = cursor.finish(position) {
            on_chunk(chunk);
        }
        Outcome::Completed
    }

    /// [`traverse`](Self::traverse) with every state and symbol index
    /// validated before use.
    ///
    /// On an out-of-range index the traversal stops and the error names the
    /// offending position; chunks delivered before that point stay delivered.
    pub fn try_traverse<I, F>(&self, input: I, start: G::State, mut on_chunk: F) -> Result<Outcome, GrouperError>
    where
        I: IntoIterator<Item = G::Symbol>,
        F: FnMut(Chunk<G::State>) -> bool,
    {
        let start_index = G::state_index(start);
        if start_index >= G::STATE_COUNT {
            return Err(GrouperError::StateOutOfRange {
                index: start_index,
                count: G::STATE_COUNT,
            });
        }

        let mut cursor = Cursor::<G>::new(start);
        let mut position = 0;
        for symbol in input {
            let symbol_index = G::symbol_index(symbol);
            if symbol_index >= G::SYMBOL_COUNT {
                return Err(GrouperError::SymbolOutOfRange {
                    position,
                    index: symbol_index,
                    count: G::SYMBOL_COUNT,
                });
            }
            let next = self.next_index(cursor.state_index, symbol_index);
            if let Some(chunk) = cursor.advance(next, position) {
                if !on_chunk(chunk) {
                    return Ok(Outcome::Cancelled);
                }
            }
            position += 1;
        }
        if let Some(chunk) = cursor.finish(position) {
            on_chunk(chunk);
        }
        Ok(Outcome::Completed)
    }

    /// Iterate over the chunks of `input`, starting at `start`.
    ///
    /// Yields exactly what [`traverse`](Self::traverse) would deliver.
    /// Dropping the iterator early is the pull-style equivalent of returning
    /// `false` from the callback.
    pub fn chunks<'t, 'a>(&'t self, input: &'a [G::Symbol], start: G::State) -> Chunks<'t, 'a, G> {
        Chunks {
            table: self,
            input,
            position: 0,
            cursor: Cursor::new(start),
            finished: false,
        }
    }
}

/// Iterator returned by [`TransitionTable::chunks`].
pub struct Chunks<'t, 'a, G: Grouper> {
    table: &'t TransitionTable<G>,
    input: &'a [G::Symbol],
    position: usize,
    cursor: Cursor<G>,
    finished: bool,
}

impl<'t, 'a, G: Grouper> Chunks<'t, 'a, G> {
    /// Input not yet read.
    pub fn remaining(&self) -> &'a [G::Symbol] {
        &self.input[self.position..]
    }
}

impl<G: Grouper> Iterator for Chunks<'_, '_, G> {
    type Item = Chunk<G::State>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&symbol) = self.input.get(self.position) {
            let next = self
                .table
                .next_index(self.cursor.state_index, G::symbol_index(symbol));
            let boundary = self.cursor.advance(next, self.position);
            self.position += 1;
            if boundary.is_some() {
                return boundary;
            }
        }
        if self.finished {
            return None;
        }
        self.finished = true;
        self.cursor.finish(self.input.len())
    }
}

impl<G: Grouper> FusedIterator for Chunks<'_, '_, G> {}

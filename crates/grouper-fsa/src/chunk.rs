// Chunk and traversal outcome types.

use std::ops::Range;

/// A maximal run of input over which the reported state did not change.
///
/// `start..end` is a half-open range of symbol positions counted from the
/// beginning of the traversed input. `state` is the raw (unfolded) state the
/// automaton was in while the last symbol of the run was absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chunk<S> {
    pub state: S,
    pub start: usize,
    pub end: usize,
}

impl<S> Chunk<S> {
    /// # Panics
    ///
    /// Panics if `start >= end`.
    pub fn new(state: S, start: usize, end: usize) -> Self {
        assert!(start < end, "chunk {start}..{end} is empty");
        Self { state, start, end }
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The chunk's symbols within `input`.
    ///
    /// # Panics
    ///
    /// Panics if `input` is shorter than `end`, i.e. it is not the input the
    /// chunk was produced from.
    #[inline]
    pub fn slice<'a, T>(&self, input: &'a [T]) -> &'a [T] {
        &input[self.range()]
    }
}

/// How a traversal ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The whole input was consumed and every chunk delivered.
    Completed,
    /// The chunk callback returned `false`.
    Cancelled,
}

impl Outcome {
    pub fn is_cancelled(self) -> bool {
        self == Outcome::Cancelled
    }
}

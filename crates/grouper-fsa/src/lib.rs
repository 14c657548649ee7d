//! Table-driven finite automaton for splitting symbol streams into chunks.
//!
//! A [`Grouper`] describes an alphabet and a state set. A
//! [`TransitionTable`] built for it starts as the identity automaton and is
//! configured once through its write-only mutation API; after that, any
//! number of inputs can be traversed against it. Each traversal is a single
//! forward pass with one table lookup per symbol and no allocation, and
//! reports maximal runs of input ([`Chunk`]s) over which the automaton's
//! reported state stayed the same.
//!
//! # Architecture
//!
//! - [`width`] -- Smallest unsigned index width for a state count
//! - [`grouper`] -- The configuration contract
//! - [`table`] -- Dense transition table and mutation API
//! - [`traverse`] -- Callback and iterator traversal
//! - [`chunk`] -- Chunk and outcome types

pub mod chunk;
pub mod grouper;
pub mod table;
pub mod traverse;
pub mod width;

#[cfg(test)]
mod testing;

pub use chunk::{Chunk, Outcome};
pub use grouper::Grouper;
pub use table::TransitionTable;
pub use traverse::Chunks;
pub use width::{IndexWidth, StateIndex};

/// Error type for checked traversal.
#[derive(Debug, thiserror::Error)]
pub enum GrouperError {
    #[error("symbol index {index} at position {position} is out of range (symbol count {count})")]
    SymbolOutOfRange {
        position: usize,
        index: usize,
        count: usize,
    },
    #[error("state index {index} is out of range (state count {count})")]
    StateOutOfRange { index: usize, count: usize },
}

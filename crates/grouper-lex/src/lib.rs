//! Byte-level scanners built on [`grouper_fsa`].
//!
//! - [`splitter`] -- Whitespace / non-whitespace runs (feature `split`)
//! - [`classifier`] -- Numbers, identifiers, whitespace, everything else
//!   (feature `classify`)
//! - [`summary`] -- Per-state chunk statistics
//!
//! The transition tables are built on first use and shared for the life of
//! the process.

#[cfg(feature = "classify")]
pub mod classifier;
#[cfg(feature = "split")]
pub mod splitter;
pub mod summary;

use grouper_core::Token;
use grouper_fsa::{Grouper, TransitionTable};

#[cfg(feature = "classify")]
pub use classifier::{LexState, Lexical, classify, classify_table};
#[cfg(feature = "split")]
pub use splitter::{SpaceSplit, SplitState, split, split_table};
pub use summary::{ChunkSummary, StateStats};

/// Group `bytes` with `table` and copy every chunk out as a [`Token`].
pub fn tokens<G>(table: &TransitionTable<G>, bytes: &[u8], start: G::State) -> Vec<Token<G::State>>
where
    G: Grouper<Symbol = u8>,
{
    table
        .chunks(bytes, start)
        .map(|chunk| Token::from_bytes(chunk.state, bytes, chunk.start, chunk.len()))
        .collect()
}

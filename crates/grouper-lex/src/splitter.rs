// Whitespace splitter: alternating runs of space and non-space bytes.

use std::fmt;
use std::sync::LazyLock;

use grouper_core::Token;
use grouper_core::character::is_space;
use grouper_fsa::{Grouper, TransitionTable};

/// State of the whitespace splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitState {
    Space,
    NotSpace,
}

impl SplitState {
    pub const ALL: [SplitState; 2] = [SplitState::Space, SplitState::NotSpace];

    pub fn name(self) -> &'static str {
        match self {
            SplitState::Space => "SPACE",
            SplitState::NotSpace => "NOT_SPACE",
        }
    }
}

impl fmt::Display for SplitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Grouper over raw bytes (symbol index == byte value).
pub struct SpaceSplit;

impl Grouper for SpaceSplit {
    type Symbol = u8;
    type State = SplitState;
    type Index = u8;

    const STATE_COUNT: usize = SplitState::ALL.len();
    const SYMBOL_COUNT: usize = 256;

    #[inline]
    fn symbol_index(symbol: u8) -> usize {
        symbol as usize
    }

    #[inline]
    fn state_index(state: SplitState) -> usize {
        state as usize
    }

    #[inline]
    fn state_at(index: usize) -> SplitState {
        SplitState::ALL[index]
    }
}

static SPLIT_TABLE: LazyLock<TransitionTable<SpaceSplit>> = LazyLock::new(build_split_table);

fn build_split_table() -> TransitionTable<SpaceSplit> {
    let mut table = TransitionTable::new();
    table
        .set_transitions_where(SplitState::NotSpace, SplitState::Space, is_space)
        .set_transitions_where(SplitState::Space, SplitState::NotSpace, |b| !is_space(b));
    tracing::debug!(bytes = table.footprint(), "built whitespace split table");
    table
}

/// The shared, fully configured splitter table.
pub fn split_table() -> &'static TransitionTable<SpaceSplit> {
    &SPLIT_TABLE
}

/// Split `text` into space and non-space runs.
pub fn split(text: &str) -> Vec<Token<SplitState>> {
    crate::tokens(split_table(), text.as_bytes(), SplitState::NotSpace)
}

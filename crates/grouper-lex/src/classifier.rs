// Toy lexical classifier: numbers, identifiers, whitespace and the rest.

use std::fmt;
use std::sync::LazyLock;

use grouper_core::Token;
use grouper_core::character::{is_digit, is_space, is_symbol_char, is_symbol_start};
use grouper_fsa::{Grouper, TransitionTable};

/// State of the lexical classifier.
///
/// `SymbolStart` is entered on the first byte of an identifier and
/// `Symbol` on every following one. Both are reported as `Symbol`, so an
/// identifier comes out as a single chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexState {
    Undefined,
    Space,
    SymbolStart,
    Symbol,
    Number,
}

impl LexState {
    pub const ALL: [LexState; 5] = [
        LexState::Undefined,
        LexState::Space,
        LexState::SymbolStart,
        LexState::Symbol,
        LexState::Number,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LexState::Undefined => "UNDEFINED",
            LexState::Space => "SPACE",
            LexState::SymbolStart => "SYMBOL_START",
            LexState::Symbol => "SYMBOL",
            LexState::Number => "NUMBER",
        }
    }
}

impl fmt::Display for LexState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Grouper over raw bytes (symbol index == byte value).
pub struct Lexical;

impl Grouper for Lexical {
    type Symbol = u8;
    type State = LexState;
    type Index = u8;

    const STATE_COUNT: usize = LexState::ALL.len();
    const SYMBOL_COUNT: usize = 256;

    #[inline]
    fn symbol_index(symbol: u8) -> usize {
        symbol as usize
    }

    #[inline]
    fn state_index(state: LexState) -> usize {
        state as usize
    }

    #[inline]
    fn state_at(index: usize) -> LexState {
        LexState::ALL[index]
    }

    #[inline]
    fn fold_state(state: LexState) -> LexState {
        match state {
            LexState::SymbolStart => LexState::Symbol,
            other => other,
        }
    }
}

static CLASSIFY_TABLE: LazyLock<TransitionTable<Lexical>> = LazyLock::new(build_classify_table);

// grouper-fsa's test `class_table` mirrors these rules; change both together.
fn build_classify_table() -> TransitionTable<Lexical> {
    let mut table = TransitionTable::new();
    for state in LexState::ALL {
        table
            .set_all_transitions(state, LexState::Undefined)
            .set_transitions_where(state, LexState::Space, is_space)
            .set_transitions_where(state, LexState::Number, is_digit)
            .set_transitions_where(state, LexState::SymbolStart, is_symbol_start);
    }
    // Inside an identifier digits and underscores keep it going.
    table
        .set_transitions_where(LexState::SymbolStart, LexState::Symbol, is_symbol_char)
        .set_transitions_where(LexState::Symbol, LexState::Symbol, is_symbol_char);
    tracing::debug!(bytes = table.footprint(), "built lexical classifier table");
    table
}

/// The shared, fully configured classifier table.
pub fn classify_table() -> &'static TransitionTable<Lexical> {
    &CLASSIFY_TABLE
}

/// Classify `text` into chunks. Token states are raw, so a one-byte
/// identifier carries `SymbolStart`; fold with [`Lexical::fold_state`] to get
/// the reported class.
pub fn classify(text: &str) -> Vec<Token<LexState>> {
    crate::tokens(classify_table(), text.as_bytes(), LexState::Undefined)
}

// Groupers shared by the unit tests.

use grouper_core::character::{is_digit, is_space, is_symbol_char, is_symbol_start};

use crate::{Grouper, TransitionTable};

/// Three states, four symbols, both plain `u8`.
pub struct Tiny;

impl Grouper for Tiny {
    type Symbol = u8;
    type State = u8;
    type Index = u8;

    const STATE_COUNT: usize = 3;
    const SYMBOL_COUNT: usize = 4;

    fn symbol_index(symbol: u8) -> usize {
        symbol as usize
    }

    fn state_index(state: u8) -> usize {
        state as usize
    }

    fn state_at(index: usize) -> u8 {
        index as u8
    }
}

/// More states than a byte can index.
pub struct Wide;

impl Grouper for Wide {
    type Symbol = bool;
    type State = u16;
    type Index = u16;

    const STATE_COUNT: usize = 300;
    const SYMBOL_COUNT: usize = 2;

    fn symbol_index(symbol: bool) -> usize {
        symbol as usize
    }

    fn state_index(state: u16) -> usize {
        state as usize
    }

    fn state_at(index: usize) -> u16 {
        index as u16
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Undefined,
    Space,
    SymbolStart,
    Symbol,
    Number,
}

const CLASSES: [Class; 5] = [
    Class::Undefined,
    Class::Space,
    Class::SymbolStart,
    Class::Symbol,
    Class::Number,
];

/// Byte classifier that reports `SymbolStart` as `Symbol`.
pub struct Folded;

/// Same automaton as [`Folded`] without the folding.
pub struct Unfolded;

macro_rules! byte_class_grouper {
    ($name:ident $(, fold = $fold:expr)?) => {
        impl Grouper for $name {
            type Symbol = u8;
            type State = Class;
            type Index = u8;

            const STATE_COUNT: usize = CLASSES.len();
            const SYMBOL_COUNT: usize = 256;

            fn symbol_index(symbol: u8) -> usize {
                symbol as usize
            }

            fn state_index(state: Class) -> usize {
                state as usize
            }

            fn state_at(index: usize) -> Class {
                CLASSES[index]
            }

            $(
                fn fold_state(state: Class) -> Class {
                    $fold(state)
                }
            )?
        }
    };
}

fn fold_symbol_start(state: Class) -> Class {
    match state {
        Class::SymbolStart => Class::Symbol,
        other => other,
    }
}

byte_class_grouper!(Folded, fold = fold_symbol_start);
byte_class_grouper!(Unfolded);

// Keep in step with `build_classify_table` in grouper-lex's classifier.
pub fn class_table<G>() -> TransitionTable<G>
where
    G: Grouper<Symbol = u8, State = Class>,
{
    let mut table = TransitionTable::<G>::new();
    for class in CLASSES {
        table
            .set_all_transitions(class, Class::Undefined)
            .set_transitions_where(class, Class::Space, is_space)
            .set_transitions_where(class, Class::Number, is_digit)
            .set_transitions_where(class, Class::SymbolStart, is_symbol_start);
    }
    table
        .set_transitions_where(Class::SymbolStart, Class::Symbol, is_symbol_char)
        .set_transitions_where(Class::Symbol, Class::Symbol, is_symbol_char);
    table
}

// The configuration contract a transition table is built from.

use crate::width::StateIndex;

/// Describes an alphabet and a state set dense enough to address a
/// transition table directly.
///
/// Implementors are usually zero-sized marker types: everything the engine
/// needs is an associated type, an associated constant or an associated
/// function. Both counts must be nonzero and `Index` must be wide enough for
/// `STATE_COUNT - 1`; [`TransitionTable::new`](crate::TransitionTable::new)
/// checks both at compile time.
///
/// The mappings must be consistent:
/// - `symbol_index` returns a value in `0..SYMBOL_COUNT` for every symbol
///   the caller feeds into a traversal;
/// - `state_index` returns a value in `0..STATE_COUNT`, and
///   `state_at(state_index(s)) == s` for every state.
///
/// # Example
///
/// ```
/// use grouper_fsa::{Grouper, TransitionTable};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Parity { Even, Odd }
///
/// struct Bits;
///
/// impl Grouper for Bits {
///     type Symbol = bool;
///     type State = Parity;
///     type Index = u8;
///
///     const STATE_COUNT: usize = 2;
///     const SYMBOL_COUNT: usize = 2;
///
///     fn symbol_index(symbol: bool) -> usize { symbol as usize }
///     fn state_index(state: Parity) -> usize { state as usize }
///     fn state_at(index: usize) -> Parity {
///         if index == 0 { Parity::Even } else { Parity::Odd }
///     }
/// }
///
/// let mut table = TransitionTable::<Bits>::new();
/// table
///     .set_transition(Parity::Even, Parity::Odd, true)
///     .set_transition(Parity::Odd, Parity::Even, true);
///
/// let mut runs = Vec::new();
/// table.traverse([false, true, false, true], Parity::Even, |chunk| {
///     runs.push((chunk.state, chunk.len()));
///     true
/// });
/// assert_eq!(runs, [(Parity::Even, 1), (Parity::Odd, 2), (Parity::Even, 1)]);
/// ```
pub trait Grouper {
    /// One element of the input alphabet.
    type Symbol: Copy;
    /// Automaton state.
    type State: Copy + Eq;
    /// Storage type of table entries.
    type Index: StateIndex;

    const STATE_COUNT: usize;
    const SYMBOL_COUNT: usize;

    /// Dense index of a symbol, in `0..SYMBOL_COUNT`.
    fn symbol_index(symbol: Self::Symbol) -> usize;

    /// Dense index of a state, in `0..STATE_COUNT`.
    fn state_index(state: Self::State) -> usize;

    /// Inverse of [`state_index`](Grouper::state_index).
    fn state_at(index: usize) -> Self::State;

    /// Identity under which a state is reported.
    ///
    /// Two states folding to the same value never start a new chunk when the
    /// automaton moves between them. Transitions always use the raw state.
    #[inline]
    fn fold_state(state: Self::State) -> Self::State {
        state
    }
}

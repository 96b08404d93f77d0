use tracing::trace;

use crate::prelude::*;

mod state;
pub use state::State;

/// Defines the fixed transition table of the automaton together with a printable rendering of it.
pub mod table;
pub use table::{describe_table, transition};

/// Executing whole input words and dealing with invalid characters in them.
pub mod run;
pub use run::{Execution, Fault, InvalidInputPolicy, ParsePolicyError};

/// A deterministic Mealy machine over the binary alphabet with three states, of which `q2` is
/// the only accepting one. Each transition emits an output, see [`table::TRANSITIONS`].
///
/// An instance merely holds the current state, it is cheap to copy and all instances are
/// independent of each other. The transition table itself is shared constant data.
///
/// # Example
/// ```
/// use simple_dfa::prelude::*;
///
/// let mut aut = Automaton::new();
/// assert_eq!(aut.step(1), Output::Zero);
/// assert_eq!(aut.step(1), Output::One);
/// assert!(aut.is_accepting());
///
/// // anything outside of {0, 1} poisons the automaton
/// assert_eq!(aut.step(7), Output::Error);
/// assert_eq!(aut.state(), State::Error);
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Default)]
pub struct Automaton {
    state: State,
}

/// Creates a fresh [`Automaton`] in its initial state.
pub fn new_automaton() -> Automaton {
    Automaton::new()
}

impl Automaton {
    /// Creates a new automaton which is in the initial state `q0`.
    pub fn new() -> Self {
        Self::from_state(State::INITIAL)
    }

    /// Creates an automaton that is currently in the given `state`.
    pub fn from_state(state: State) -> Self {
        Self { state }
    }

    /// Returns the current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Puts `self` back into the initial state, this is also the only way to leave the error state.
    pub fn reset(&mut self) {
        trace!("resetting from {} to {}", self.state, State::INITIAL);
        self.state = State::INITIAL;
    }

    pub(crate) fn poison(&mut self) {
        self.state = State::Error;
    }

    /// Consumes a single `symbol` and returns the output of the transition that is taken. If
    /// `symbol` is neither `0` nor `1`, no transition exists. In that case [`Output::Error`] is
    /// returned and the automaton moves to [`State::Error`], from which it does not move anymore
    /// until it is [reset](Automaton::reset).
    pub fn step(&mut self, symbol: i32) -> Output {
        match Symbol::try_from(symbol) {
            Ok(sym) => self.step_symbol(sym),
            Err(e) => {
                trace!("{e}, moving from {} to {}", self.state, State::Error);
                self.poison();
                Output::Error
            }
        }
    }

    /// Same as [`Automaton::step`] but for an input that is already known to be a [`Symbol`].
    /// This only produces [`Output::Error`] if `self` is in the error state.
    pub fn step_symbol(&mut self, symbol: Symbol) -> Output {
        match table::transition(self.state, symbol) {
            Some((target, output)) => {
                trace!("{} --{symbol}|{output}--> {target}", self.state);
                self.state = target;
                output
            }
            None => {
                trace!("no transition from {} on {symbol}", self.state);
                self.poison();
                Output::Error
            }
        }
    }

    /// Returns true if and only if the current state is accepting.
    pub fn is_accepting(&self) -> bool {
        self.state.is_accepting()
    }
}

impl std::fmt::Display for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "state: {}", self.state)
    }
}

impl Show for Automaton {
    fn show(&self) -> String {
        self.state.show()
    }
}

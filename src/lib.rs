//! Simulation of a small deterministic finite automaton (DFA) with outputs.
//!
//! The automaton has the three states $q_0, q_1, q_2$ and reads words over the binary alphabet
//! $\{0, 1\}$. The state $q_0$ is initial and $q_2$ is the only accepting state. Every transition
//! additionally emits an output bit, so the automaton is also a Mealy machine, meaning the output
//! depends on both the current state and the symbol that is read. The transition table is fixed,
//! it can be printed with [`automaton::describe_table`].
//!
//! The central type is [`Automaton`], which only holds its current state. A single symbol is
//! consumed through [`Automaton::step`], which is total over all integers: whenever something
//! outside of the alphabet is fed in, [`Output::Error`] is returned and the automaton enters
//! the poisoned [`automaton::State::Error`]. Whole words are processed by [`Automaton::execute`]
//! which takes an [`automaton::InvalidInputPolicy`] that determines what happens with characters
//! that are not symbols. The result is an [`automaton::Execution`], recording the verdict along
//! with the visited states and the produced outputs.
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use simple_dfa::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        alphabet::{InvalidInput, Letter, Output, Symbol},
        automaton::{
            describe_table, new_automaton, table, transition, Automaton, Execution, Fault,
            InvalidInputPolicy, ParsePolicyError, State,
        },
        Show,
    };
}

/// Module that contains definitions for dealing with the input alphabet and the outputs.
pub mod alphabet;
pub use alphabet::{Output, Symbol};

/// Defines the automaton, its states and transitions as well as runs on words.
pub mod automaton;
pub use automaton::Automaton;

mod show;
pub use show::Show;

use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, trace};

use crate::prelude::*;

/// Determines how [`Automaton::execute`] deals with characters of an input word that are not
/// symbols of the alphabet. There is deliberately no default, every run has to pick one.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum InvalidInputPolicy {
    /// Any invalid character poisons the automaton, it remains in [`State::Error`] and
    /// the run stops immediately.
    RejectAndHalt,
    /// Any invalid character resets the automaton to its initial state, after which the
    /// run continues with the next character.
    ResetAndContinue,
    /// Characters that are not digits are skipped without taking a transition. A digit
    /// other than `0` or `1` resets the automaton to its initial state and stops the run.
    SkipNonDigits,
}

impl InvalidInputPolicy {
    /// All available policies.
    pub const ALL: [InvalidInputPolicy; 3] = [
        InvalidInputPolicy::RejectAndHalt,
        InvalidInputPolicy::ResetAndContinue,
        InvalidInputPolicy::SkipNonDigits,
    ];

    /// The kebab-case name of the policy, as it is accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            InvalidInputPolicy::RejectAndHalt => "reject-and-halt",
            InvalidInputPolicy::ResetAndContinue => "reset-and-continue",
            InvalidInputPolicy::SkipNonDigits => "skip-non-digits",
        }
    }
}

impl std::fmt::Display for InvalidInputPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error that is produced when parsing an unknown [`InvalidInputPolicy`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown invalid input policy \"{0}\", expected one of reject-and-halt, reset-and-continue, skip-non-digits")]
pub struct ParsePolicyError(
    /// The name that could not be parsed.
    pub String,
);

impl FromStr for InvalidInputPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParsePolicyError(s.to_string()))
    }
}

/// An invalid character that was encountered during a run.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Fault {
    /// Position of the character in the input word, counted in characters.
    pub position: usize,
    /// Why the character could not be consumed.
    pub cause: InvalidInput,
}

/// The result of executing an input word, see [`Automaton::execute`]. Apart from the verdict,
/// it records the sequence of visited states, the outputs that were produced along the way
/// and all invalid characters that were met.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Execution {
    pub(crate) states: Vec<State>,
    pub(crate) outputs: Vec<Output>,
    pub(crate) faults: Vec<Fault>,
    pub(crate) halted: bool,
}

impl Execution {
    pub(crate) fn starting_in(state: State) -> Self {
        Self {
            states: vec![state],
            outputs: vec![],
            faults: vec![],
            halted: false,
        }
    }

    /// Returns true if the run ended in an accepting state.
    pub fn accepted(&self) -> bool {
        self.final_state().is_accepting()
    }

    /// The state the run ended in.
    pub fn final_state(&self) -> State {
        // `states` is never empty, it always contains the state the run started in
        self.states.last().copied().unwrap_or(State::Error)
    }

    /// All visited states, beginning with the one in which the run started. Every state
    /// change (including resets) appends one entry.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// The outputs in the order in which they were produced, one per attempted transition.
    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    /// Invalid characters that were encountered, in the order of their appearance.
    pub fn faults(&self) -> &[Fault] {
        &self.faults
    }

    /// Returns true if the run stopped before the end of the input word.
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Decomposes `self` into the verdict and the produced outputs.
    pub fn into_parts(self) -> (bool, Vec<Output>) {
        (self.accepted(), self.outputs)
    }
}

impl Show for Execution {
    fn show(&self) -> String {
        format!(
            "{} {} {}",
            self.states.show(),
            self.outputs.show(),
            self.accepted().show()
        )
    }
}

impl Automaton {
    /// Runs the given word in `self`, starting from the current state. Characters are processed in
    /// order and classified through [`Letter::classify`], invalid ones are dealt with according
    /// to `policy`. The returned [`Execution`] is accepting if and only if the automaton
    /// ends up in an accepting state.
    pub fn execute(&mut self, word: &str, policy: InvalidInputPolicy) -> Execution {
        let mut run = Execution::starting_in(self.state());

        for (position, c) in word.chars().enumerate() {
            let letter = Letter::classify(c);
            let Some(digit) = letter.digit() else {
                debug!("input '{c}' at position {position} is not a digit");
                match policy {
                    InvalidInputPolicy::SkipNonDigits => {
                        trace!("skipping '{c}'");
                        continue;
                    }
                    InvalidInputPolicy::RejectAndHalt => {
                        run.faults.push(Fault {
                            position,
                            cause: InvalidInput::NonDigitCharacter(c),
                        });
                        self.poison();
                        run.states.push(self.state());
                        run.halted = true;
                        debug!("halting in {}", self.state());
                        break;
                    }
                    InvalidInputPolicy::ResetAndContinue => {
                        run.faults.push(Fault {
                            position,
                            cause: InvalidInput::NonDigitCharacter(c),
                        });
                        self.reset();
                        run.states.push(self.state());
                        continue;
                    }
                }
            };

            let output = self.step(digit);
            run.outputs.push(output);
            run.states.push(self.state());
            if !output.is_error() {
                continue;
            }

            let cause = match letter {
                Letter::Symbol(_) => InvalidInput::Poisoned,
                _ => InvalidInput::InvalidSymbol(digit),
            };
            debug!("input {digit} at position {position} rejected: {cause}");
            run.faults.push(Fault { position, cause });
            match policy {
                InvalidInputPolicy::RejectAndHalt => {
                    run.halted = true;
                    debug!("halting in {}", self.state());
                    break;
                }
                InvalidInputPolicy::ResetAndContinue => {
                    self.reset();
                    run.states.push(self.state());
                }
                InvalidInputPolicy::SkipNonDigits => {
                    self.reset();
                    run.states.push(self.state());
                    run.halted = true;
                    debug!("halting after reset to {}", self.state());
                    break;
                }
            }
        }

        trace!("run on \"{word}\" produced {}", run.show());
        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Output::{One as I, Zero as O};
    use crate::automaton::State::{Q0, Q1, Q2};

    fn run(word: &str, policy: InvalidInputPolicy) -> (Automaton, Execution) {
        let mut aut = Automaton::new();
        let execution = aut.execute(word, policy);
        (aut, execution)
    }

    #[test_log::test]
    fn accepting_word() {
        for policy in InvalidInputPolicy::ALL {
            let (aut, execution) = run("010111", policy);
            assert!(execution.accepted());
            assert!(aut.is_accepting());
            assert_eq!(execution.states(), &[Q0, Q0, Q1, Q1, Q2, Q2, Q2]);
            assert_eq!(execution.outputs(), &[I, O, O, I, O, O]);
            assert!(execution.faults().is_empty());
            assert!(!execution.halted());
        }
    }

    #[test_log::test]
    fn rejecting_word() {
        // the last two symbols lead from q2 back to q0 and then on to q1
        let (aut, execution) = run("0101101", InvalidInputPolicy::RejectAndHalt);
        assert!(!execution.accepted());
        assert_eq!(aut.state(), Q1);
        assert_eq!(execution.states(), &[Q0, Q0, Q1, Q1, Q2, Q2, Q0, Q1]);
        assert_eq!(execution.outputs(), &[I, O, O, I, O, I, O]);
    }

    #[test_log::test]
    fn reject_and_halt_on_invalid_digit() {
        let (aut, execution) = run("010141", InvalidInputPolicy::RejectAndHalt);
        assert!(!execution.accepted());
        assert!(execution.halted());
        assert_eq!(aut.state(), State::Error);
        assert_eq!(execution.outputs(), &[I, O, O, I, Output::Error]);
        assert_eq!(execution.states(), &[Q0, Q0, Q1, Q1, Q2, State::Error]);
        assert_eq!(
            execution.faults(),
            &[Fault {
                position: 4,
                cause: InvalidInput::InvalidSymbol(4)
            }]
        );
    }

    #[test_log::test]
    fn reject_and_halt_on_non_digit() {
        let (aut, execution) = run("1b111", InvalidInputPolicy::RejectAndHalt);
        assert!(!execution.accepted());
        assert!(execution.halted());
        assert_eq!(aut.state(), State::Error);
        assert_eq!(execution.outputs(), &[O]);
        assert_eq!(execution.states(), &[Q0, Q1, State::Error]);
        assert_eq!(
            execution.faults(),
            &[Fault {
                position: 1,
                cause: InvalidInput::NonDigitCharacter('b')
            }]
        );

        let (_, execution) = run("b", InvalidInputPolicy::RejectAndHalt);
        assert!(execution.outputs().is_empty());
        assert!(!execution.accepted());
    }

    #[test_log::test]
    fn reset_and_continue() {
        let (aut, execution) = run("010141", InvalidInputPolicy::ResetAndContinue);
        assert!(!execution.halted());
        assert!(!execution.accepted());
        assert_eq!(aut.state(), Q1);
        assert_eq!(execution.outputs(), &[I, O, O, I, Output::Error, O]);
        assert_eq!(
            execution.states(),
            &[Q0, Q0, Q1, Q1, Q2, State::Error, Q0, Q1]
        );

        let (aut, execution) = run("1b111", InvalidInputPolicy::ResetAndContinue);
        assert!(execution.accepted());
        assert_eq!(aut.state(), Q2);
        assert_eq!(execution.states(), &[Q0, Q1, Q0, Q1, Q2, Q2]);
        assert_eq!(execution.faults().len(), 1);
    }

    #[test_log::test]
    fn skip_non_digits() {
        let (aut, execution) = run("1b111", InvalidInputPolicy::SkipNonDigits);
        assert!(execution.accepted());
        assert!(execution.faults().is_empty());
        assert_eq!(aut.state(), Q2);
        assert_eq!(execution.outputs(), &[O, I, O, O]);

        let (aut, execution) = run("010141", InvalidInputPolicy::SkipNonDigits);
        assert!(!execution.accepted());
        assert!(execution.halted());
        assert_eq!(aut.state(), Q0);
        assert_eq!(execution.outputs(), &[I, O, O, I, Output::Error]);
        assert_eq!(execution.faults().len(), 1);
    }

    #[test_log::test]
    fn poisoned_automaton() {
        let (mut aut, _) = run("2", InvalidInputPolicy::RejectAndHalt);
        assert_eq!(aut.state(), State::Error);

        let execution = aut.execute("11", InvalidInputPolicy::RejectAndHalt);
        assert!(execution.halted());
        assert_eq!(execution.outputs(), &[Output::Error]);
        assert_eq!(execution.faults()[0].cause, InvalidInput::Poisoned);

        let execution = aut.execute("11", InvalidInputPolicy::ResetAndContinue);
        assert!(!execution.halted());
        assert_eq!(execution.outputs(), &[Output::Error, O]);
        assert_eq!(aut.state(), Q1);
    }

    #[test]
    fn empty_word() {
        for policy in InvalidInputPolicy::ALL {
            let (aut, execution) = run("", policy);
            assert_eq!(aut.state(), Q0);
            assert!(!execution.accepted());
            assert_eq!(execution.into_parts(), (false, vec![]));
        }
    }

    #[test]
    fn repeated_runs_agree() {
        for word in ["010111", "0101101", "010141", "1b111", "11x0 21"] {
            for policy in InvalidInputPolicy::ALL {
                let (_, first) = run(word, policy);
                let (_, second) = run(word, policy);
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn verdict_matches_final_state() {
        for word in ["", "1", "11", "110", "1101", "4", "x11", "11x", "1141"] {
            for policy in InvalidInputPolicy::ALL {
                let (aut, execution) = run(word, policy);
                assert_eq!(execution.accepted(), aut.is_accepting());
                assert_eq!(execution.final_state(), aut.state());
            }
        }
    }

    #[test]
    fn parse_policies() {
        for policy in InvalidInputPolicy::ALL {
            assert_eq!(policy.to_string().parse::<InvalidInputPolicy>(), Ok(policy));
        }
        assert_eq!(
            "Reset-And-Continue".parse::<InvalidInputPolicy>(),
            Ok(InvalidInputPolicy::ResetAndContinue)
        );
        assert_eq!(
            "ignore".parse::<InvalidInputPolicy>(),
            Err(ParsePolicyError("ignore".to_string()))
        );
    }
}

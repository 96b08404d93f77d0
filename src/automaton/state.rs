use crate::Show;

/// The finite set of states $Q = \{q_0, q_1, q_2\}$ together with a sentinel [`State::Error`]
/// which the automaton enters once it is fed something that is not part of the alphabet.
/// The error state has no outgoing transitions, it can only be left by resetting the automaton.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum State {
    /// The initial state.
    #[default]
    Q0,
    /// The intermediate state.
    Q1,
    /// The only accepting state.
    Q2,
    /// Poisoned state, reached after an invalid input.
    Error,
}

impl State {
    /// The designated initial state.
    pub const INITIAL: State = State::Q0;

    /// All proper states, i.e. every state except for [`State::Error`].
    pub const PROPER: [State; 3] = [State::Q0, State::Q1, State::Q2];

    /// The set of accepting states $F = \{q_2\}$.
    pub const ACCEPTING: [State; 1] = [State::Q2];

    /// Returns true if and only if `self` is in the set of accepting states.
    pub fn is_accepting(self) -> bool {
        Self::ACCEPTING.contains(&self)
    }

    /// Returns true if and only if `self` is the initial state.
    pub fn is_initial(self) -> bool {
        self == Self::INITIAL
    }

    /// Returns true if `self` is the poisoned error state.
    pub fn is_error(self) -> bool {
        matches!(self, State::Error)
    }

    /// Gives the row of `self` in the transition table, `None` for the error state.
    pub fn index(self) -> Option<usize> {
        match self {
            State::Q0 => Some(0),
            State::Q1 => Some(1),
            State::Q2 => Some(2),
            State::Error => None,
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            State::Q0 => write!(f, "q0"),
            State::Q1 => write!(f, "q1"),
            State::Q2 => write!(f, "q2"),
            State::Error => write!(f, "error"),
        }
    }
}

impl Show for State {
    fn show(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::State;
    use crate::Show;

    #[test]
    fn accepting_states() {
        assert!(State::Q2.is_accepting());
        for q in [State::Q0, State::Q1, State::Error] {
            assert!(!q.is_accepting());
        }
        assert_eq!(State::default(), State::INITIAL);
        assert!(State::Q0.is_initial());
    }

    #[test]
    fn state_rows() {
        assert_eq!(
            State::PROPER.iter().map(|q| q.index()).collect::<Vec<_>>(),
            vec![Some(0), Some(1), Some(2)]
        );
        assert_eq!(State::Error.index(), None);
        assert_eq!(State::PROPER.to_vec().show(), "{q0, q1, q2}");
    }
}

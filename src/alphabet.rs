use thiserror::Error;

use crate::Show;

/// Represents one of the two symbols of the binary input alphabet $\Sigma = \{0, 1\}$.
/// Any other value is not a symbol at all and thus has no transition.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Symbol {
    /// The symbol `0`.
    Zero,
    /// The symbol `1`.
    One,
}

impl Symbol {
    /// All symbols of the alphabet, in ascending order.
    pub const ALL: [Symbol; 2] = [Symbol::Zero, Symbol::One];

    /// Returns the position of the symbol in the alphabet, which coincides with its value.
    pub fn index(self) -> usize {
        match self {
            Symbol::Zero => 0,
            Symbol::One => 1,
        }
    }

    /// Returns the integer value of the symbol.
    pub fn value(self) -> i32 {
        self.index() as i32
    }
}

impl TryFrom<i32> for Symbol {
    type Error = InvalidInput;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Symbol::Zero),
            1 => Ok(Symbol::One),
            other => Err(InvalidInput::InvalidSymbol(other)),
        }
    }
}

impl From<Symbol> for i32 {
    fn from(value: Symbol) -> Self {
        value.value()
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}

impl Show for Symbol {
    fn show(&self) -> String {
        self.to_string()
    }

    fn show_collection<'a, I>(iter: I) -> String
    where
        Self: 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        format!("\"{}\"", iter.into_iter().map(|s| s.to_string()).collect::<String>())
    }
}

/// The output that is emitted by a single transition. A Mealy machine produces exactly one
/// output per consumed input, which is either a bit or the distinguished [`Output::Error`]
/// marker if the input could not be consumed.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Output {
    /// Emits a `0`.
    Zero,
    /// Emits a `1`.
    One,
    /// The input had no transition.
    Error,
}

impl Output {
    /// Returns the emitted bit, or `None` for [`Output::Error`].
    pub fn bit(self) -> Option<u8> {
        match self {
            Output::Zero => Some(0),
            Output::One => Some(1),
            Output::Error => None,
        }
    }

    /// Returns true if and only if `self` is the error marker.
    pub fn is_error(self) -> bool {
        matches!(self, Output::Error)
    }

    /// Returns the integer value of the output, where the error marker is mapped to `-1`.
    pub fn value(self) -> i32 {
        self.bit().map(i32::from).unwrap_or(-1)
    }
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.bit() {
            Some(b) => write!(f, "{b}"),
            None => write!(f, "!"),
        }
    }
}

impl Show for Output {
    fn show(&self) -> String {
        self.to_string()
    }

    fn show_collection<'a, I>(iter: I) -> String
    where
        Self: 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        format!("\"{}\"", iter.into_iter().map(|o| o.to_string()).collect::<String>())
    }
}

/// Classification of a single character of an input word.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Letter {
    /// The character is the ASCII digit `0` or `1`.
    Symbol(Symbol),
    /// The character is an ASCII digit other than `0` and `1`, the contained value is that digit.
    InvalidDigit(i32),
    /// The character is not an ASCII digit at all.
    NonDigit(char),
}

impl Letter {
    /// Classifies the given character. Only ASCII digits are considered to be digits.
    pub fn classify(c: char) -> Self {
        match c.to_digit(10) {
            Some(d) => {
                let d = d as i32;
                Symbol::try_from(d)
                    .map(Letter::Symbol)
                    .unwrap_or(Letter::InvalidDigit(d))
            }
            None => Letter::NonDigit(c),
        }
    }

    /// Returns the integer that is fed into the automaton for this letter, if it is a digit.
    pub fn digit(self) -> Option<i32> {
        match self {
            Letter::Symbol(sym) => Some(sym.value()),
            Letter::InvalidDigit(d) => Some(d),
            Letter::NonDigit(_) => None,
        }
    }
}

impl From<char> for Letter {
    fn from(value: char) -> Self {
        Letter::classify(value)
    }
}

impl TryFrom<Letter> for Symbol {
    type Error = InvalidInput;

    fn try_from(value: Letter) -> Result<Self, Self::Error> {
        match value {
            Letter::Symbol(sym) => Ok(sym),
            Letter::InvalidDigit(d) => Err(InvalidInput::InvalidSymbol(d)),
            Letter::NonDigit(c) => Err(InvalidInput::NonDigitCharacter(c)),
        }
    }
}

/// The ways in which an input can fail to be part of the alphabet.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidInput {
    /// A value that is not `0` or `1` was presented as a symbol.
    #[error("input {0} is not a valid symbol of the alphabet")]
    InvalidSymbol(i32),
    /// A character of an input word is not a digit.
    #[error("input '{0}' is not a digit")]
    NonDigitCharacter(char),
    /// The automaton is in its error state and refuses any further input.
    #[error("automaton is in the error state")]
    Poisoned,
}

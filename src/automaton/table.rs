use owo_colors::OwoColorize;

use crate::prelude::*;

/// The transition table, indexed first by the row of the source state and then by the symbol.
/// Each entry holds the successor state together with the output that is emitted.
///
/// | state          | input 0        | input 1        |
/// |----------------|----------------|----------------|
/// | q0 (start)     | q0, output 1   | q1, output 0   |
/// | q1             | q1, output 0   | q2, output 1   |
/// | q2 (accepting) | q0, output 1   | q2, output 0   |
pub const TRANSITIONS: [[(State, Output); 2]; 3] = [
    [(State::Q0, Output::One), (State::Q1, Output::Zero)],
    [(State::Q1, Output::Zero), (State::Q2, Output::One)],
    [(State::Q0, Output::One), (State::Q2, Output::Zero)],
];

/// Looks up the transition for `state` on `symbol`, returning the successor and the emitted
/// output. The error state has no outgoing transitions, so `None` is returned for it.
pub fn transition(state: State, symbol: Symbol) -> Option<(State, Output)> {
    state
        .index()
        .map(|row| TRANSITIONS[row][symbol.index()])
}

/// Iterates over all six defined transitions as tuples `(source, symbol, target, output)`.
pub fn transitions() -> impl Iterator<Item = (State, Symbol, State, Output)> {
    State::PROPER.into_iter().flat_map(|q| {
        Symbol::ALL.into_iter().filter_map(move |a| {
            let (p, o) = transition(q, a)?;
            Some((q, a, p, o))
        })
    })
}

fn state_label(q: State) -> String {
    if q.is_initial() {
        format!("{q} (start)")
    } else if q.is_accepting() {
        format!("{q} (accepting)")
    } else {
        q.to_string()
    }
}

fn render(colored: bool) -> String {
    let mut b = tabled::builder::Builder::default();
    b.push_record(
        std::iter::once("DFA state".to_string())
            .chain(Symbol::ALL.iter().map(|a| format!("input: {a}"))),
    );

    for q in State::PROPER {
        let mut row = vec![if colored {
            state_label(q).bold().to_string()
        } else {
            state_label(q)
        }];
        row.extend(Symbol::ALL.iter().filter_map(|a| {
            let (p, o) = transition(q, *a)?;
            Some(if colored {
                format!("{}, output: {}", p.blue(), o.purple())
            } else {
                format!("{p}, output: {o}")
            })
        }));
        b.push_record(row);
    }

    b.build().with(tabled::settings::Style::ascii()).to_string()
}

/// Produces a printable representation of the transition table, mainly for documentation
/// and demonstration purposes.
pub fn describe_table() -> String {
    render(false)
}

/// Same as [`describe_table`] but highlights states and outputs with ANSI colors.
pub fn describe_table_colored() -> String {
    render(true)
}

use owo_colors::OwoColorize;
use simple_dfa::automaton::table::describe_table_colored;
use simple_dfa::prelude::*;

use tracing::{debug, error, info, trace};
use tracing_subscriber::{filter, prelude::*};

use clap::{Arg, ArgAction, ArgMatches, Command};

const DEFAULT_WORDS: [&str; 4] = ["010111", "0101101", "010141", "1b111"];

fn cli() -> clap::Command {
    Command::new("simple-dfa")
        .about("Runs input words through a three state DFA with outputs and reports whether they are accepted")
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .num_args(0..=1)
                .require_equals(true)
                .value_parser(["info", "debug", "trace"])
                .default_missing_value("info"),
        )
        .arg(
            Arg::new("policy")
                .short('p')
                .long("policy")
                .required(true)
                .help("how characters that are not symbols of the alphabet are treated")
                .value_parser(InvalidInputPolicy::ALL.map(|p| p.name())),
        )
        .arg(
            Arg::new("table")
                .short('t')
                .long("table")
                .action(ArgAction::SetTrue)
                .help("print the transition table before running the words"),
        )
        .arg(
            Arg::new("words")
                .num_args(0..)
                .help("input words, the four example words are used if none are given"),
        )
}

fn setup_logging(matches: &ArgMatches) {
    let Ok(Some(verbosity)) = matches.try_get_one::<String>("verbosity") else {
        return;
    };

    let level = match verbosity.as_str() {
        "trace" => filter::LevelFilter::TRACE,
        "debug" => filter::LevelFilter::DEBUG,
        _ => filter::LevelFilter::INFO,
    };

    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(level))
        .init();

    trace!("setup {level} logging");
}

fn narrate(word: &str, policy: InvalidInputPolicy) -> Automaton {
    let mut aut = new_automaton();
    println!("======================");
    println!("Run {word} ({policy})");
    println!("======================");
    println!("Start {aut}");

    let start = std::time::Instant::now();
    let execution = aut.execute(word, policy);
    info!(
        "executing \"{word}\" took {}µs",
        start.elapsed().as_micros()
    );

    println!("states:  {}", execution.states().show());
    println!("outputs: {}", execution.outputs().show());
    for fault in execution.faults() {
        println!(
            "{} at position {}: {}",
            "invalid input".yellow(),
            fault.position,
            fault.cause
        );
    }
    if execution.halted() {
        println!("{}", "run halted".red());
    }
    println!("State after run: {aut}");

    let verdict = if execution.accepted() {
        "accepted".green().bold().to_string()
    } else {
        "not accepted".red().bold().to_string()
    };
    println!("\nInput word {word} is {verdict}!\n");
    aut
}

pub fn main() {
    let matches = cli().get_matches();

    setup_logging(&matches);

    let policy = match matches
        .get_one::<String>("policy")
        .map(|p| p.parse::<InvalidInputPolicy>())
    {
        Some(Ok(policy)) => policy,
        Some(Err(e)) => {
            error!("{e}");
            eprintln!("{e}");
            std::process::exit(2);
        }
        None => {
            eprintln!("an invalid input policy has to be given");
            std::process::exit(2);
        }
    };
    debug!("using policy {policy}");

    if matches.get_flag("table") {
        println!("{}", describe_table_colored());
    }

    let words: Vec<String> = match matches.get_many::<String>("words") {
        Some(words) => words.cloned().collect(),
        None => DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
    };

    let runs: Vec<_> = words.iter().map(|w| narrate(w, policy)).collect();

    println!("######################");
    println!("States of all automata:");
    for (idx, aut) in runs.iter().enumerate() {
        println!("Automaton {idx}: {aut}");
    }
}

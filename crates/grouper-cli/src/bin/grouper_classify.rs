// grouper-classify: classify text into numbers, identifiers, whitespace
// and undefined runs.
//
// Reads text from stdin (or --input FILE) and prints one line per chunk,
// labelled NUMBER, SYMBOL, SPACE or UNDEFINED.
//
// Usage:
//   grouper-classify [OPTIONS]

use clap::{Parser, ValueEnum};
use grouper_cli::CommonArgs;
use grouper_lex::{LexState, classify_table};

/// Classify text into numbers, identifiers, whitespace and everything else.
#[derive(Parser, Debug)]
#[command(name = "grouper-classify", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// State the automaton starts in
    #[arg(long, value_enum, default_value = "undefined")]
    start: StartState,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum StartState {
    Undefined,
    Space,
    Symbol,
    Number,
}

impl From<StartState> for LexState {
    fn from(start: StartState) -> Self {
        match start {
            StartState::Undefined => LexState::Undefined,
            StartState::Space => LexState::Space,
            StartState::Symbol => LexState::Symbol,
            StartState::Number => LexState::Number,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    grouper_cli::init_logging(cli.common.verbose);
    tracing::debug!(?cli, "parsed arguments");

    if let Err(e) = grouper_cli::run(&cli.common, classify_table(), cli.start.into()) {
        grouper_cli::fatal(&e.to_string());
    }
}

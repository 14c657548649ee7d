// grouper-split: split text into whitespace and non-whitespace runs.
//
// Reads text from stdin (or --input FILE) and prints one line per chunk:
//   NOT_SPACE     [   0..   4]: some
//   SPACE         [   4..   7]:
//
// Usage:
//   grouper-split [OPTIONS]

use clap::Parser;
use grouper_cli::CommonArgs;
use grouper_lex::{SplitState, split_table};

/// Split text into whitespace and non-whitespace runs.
#[derive(Parser, Debug)]
#[command(name = "grouper-split", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let cli = Cli::parse();
    grouper_cli::init_logging(cli.common.verbose);
    tracing::debug!(?cli, "parsed arguments");

    if let Err(e) = grouper_cli::run(&cli.common, split_table(), SplitState::NotSpace) {
        grouper_cli::fatal(&e.to_string());
    }
}

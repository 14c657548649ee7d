// grouper-cli: shared plumbing for the command-line tools.

use std::fmt;
use std::hash::Hash;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Args};
use grouper_core::Token;
use grouper_fsa::{Grouper, Outcome, TransitionTable};
use grouper_lex::ChunkSummary;

/// Error type for the command-line tools.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Options shared by every tool.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Read text from FILE instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Stop after N chunks
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,

    /// Print per-state chunk statistics after the chunks
    #[arg(short, long)]
    pub summary: bool,

    /// Do not print individual chunks
    #[arg(short, long)]
    pub quiet: bool,

    /// Log more (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Install a stderr `tracing` subscriber.
///
/// `RUST_LOG` wins over `verbose` when set.
pub fn init_logging(verbose: u8) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Read the whole input, from `path` or stdin.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>, CliError> {
    match path {
        Some(path) => std::fs::read(path).map_err(|source| CliError::ReadFile {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut input = Vec::new();
            io::stdin()
                .read_to_end(&mut input)
                .map_err(CliError::Stdin)?;
            Ok(input)
        }
    }
}

/// Read the input named by `args`, group it and print the result to stdout.
pub fn run<G>(args: &CommonArgs, table: &TransitionTable<G>, start: G::State) -> Result<(), CliError>
where
    G: Grouper<Symbol = u8>,
    G::State: fmt::Display + Hash,
{
    let input = read_input(args.input.as_deref())?;
    tracing::debug!(bytes = input.len(), "read input");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render(args, table, start, &input, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Group `input` and write one line per chunk (unless `quiet`), then the
/// summary if requested.
///
/// Chunks are labelled with their reported (folded) state.
pub fn render<G, W>(
    args: &CommonArgs,
    table: &TransitionTable<G>,
    start: G::State,
    input: &[u8],
    out: &mut W,
) -> Result<Outcome, CliError>
where
    G: Grouper<Symbol = u8>,
    G::State: fmt::Display + Hash,
    W: Write,
{
    let mut summary = ChunkSummary::new();
    let mut delivered = 0usize;
    let mut write_result = Ok(());

    // A zero limit allows no chunks, so nothing is read at all.
    let outcome = if args.limit == Some(0) {
        Outcome::Cancelled
    } else {
        table.traverse(input.iter().copied(), start, |chunk| {
            let reported = G::fold_state(chunk.state);
            summary.record(reported, chunk.len());
            delivered += 1;
            if !args.quiet {
                let token = Token::from_bytes(reported, input, chunk.start, chunk.len());
                if let Err(e) = write_token(out, &token) {
                    write_result = Err(e);
                    return false;
                }
            }
            args.limit.is_none_or(|limit| delivered < limit)
        })
    };
    write_result?;

    tracing::info!(
        chunks = delivered,
        bytes = input.len(),
        cancelled = outcome.is_cancelled(),
        "traversal finished"
    );

    if args.summary {
        if !args.quiet {
            writeln!(out)?;
        }
        write_summary(out, &summary)?;
    }
    Ok(outcome)
}

fn write_token<S: fmt::Display, W: Write>(out: &mut W, token: &Token<S>) -> io::Result<()> {
    writeln!(
        out,
        "{:13} [{:>4}..{:>4}]: {}",
        token.state,
        token.pos,
        token.end(),
        token.escaped_text()
    )
}

fn write_summary<S, W>(out: &mut W, summary: &ChunkSummary<S>) -> io::Result<()>
where
    S: Copy + Eq + Hash + fmt::Display,
    W: Write,
{
    writeln!(out, "=== Summary ===")?;
    for (state, stats) in summary.iter() {
        writeln!(
            out,
            "{state:13} chunks {:>6}  bytes {:>8}  longest {:>6}",
            stats.chunks, stats.symbols, stats.longest
        )?;
    }
    writeln!(
        out,
        "{:13} chunks {:>6}  bytes {:>8}",
        "TOTAL",
        summary.total_chunks(),
        summary.total_symbols()
    )
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

//! Headless replay harness (default binary).
//!
//! Reads a command script, applies it to a fresh engine and prints the board
//! after every command, ghost overlay included. There is no terminal UI and no
//! clock: every gravity step is a `tick` line in the script.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use blockfall::core::{BagSequencer, Board, GameState, PieceSource, Sequencer};
use blockfall::engine::{parse_script, replay, Step};
use blockfall::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Policy {
    /// Fixed seven-shape cycle
    Cyclic,
    /// Seeded shuffled bags of seven
    Bag,
}

#[derive(Debug, Parser)]
#[command(name = "blockfall", version, about = "Replay a command script against the engine")]
struct Args {
    /// Board width in columns
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Board height in rows
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Starting board in text form (overrides --width/--height)
    #[arg(long)]
    board: Option<PathBuf>,

    /// Command script; read from stdin when omitted
    #[arg(long)]
    script: Option<PathBuf>,

    /// Piece sequencing policy
    #[arg(long, value_enum, default_value_t = Policy::Cyclic)]
    policy: Policy,

    /// Seed for the bag policy
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Only print the final board and summary
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match args.policy {
        Policy::Cyclic => run(GameState::with_sequencer(Sequencer::new()), &args),
        Policy::Bag => run(GameState::with_sequencer(BagSequencer::new(args.seed)), &args),
    }
}

fn run<S: PieceSource>(mut state: GameState<S>, args: &Args) -> Result<()> {
    match &args.board {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading board {}", path.display()))?;
            let board = Board::parse(&text)
                .with_context(|| format!("parsing board {}", path.display()))?;
            state.reset_with_board(board)?;
        }
        None => state.reset(args.width, args.height)?,
    }

    let script = match &args.script {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading script from stdin")?;
            text
        }
    };
    let commands = parse_script(&script).context("parsing script")?;
    info!(commands = commands.len(), "script loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut write_error = None;

    let summary = replay(&mut state, &commands, |state, step| {
        if args.quiet || write_error.is_some() {
            return;
        }
        if let Err(err) = print_step(&mut out, state, step) {
            write_error = Some(err);
        }
    })?;
    if let Some(err) = write_error {
        return Err(err).context("writing to stdout");
    }

    info!(
        applied = summary.applied,
        lines = summary.lines_cleared,
        score = summary.score,
        topped_out = summary.topped_out,
        "replay finished"
    );

    writeln!(out, "{}", state.snapshot())?;
    if summary.topped_out {
        writeln!(out, "game over")?;
    }
    writeln!(
        out,
        "commands: {}  lines: {}  score: {}",
        summary.applied, summary.lines_cleared, summary.score
    )?;
    Ok(())
}

fn print_step<S: PieceSource>(
    out: &mut impl Write,
    state: &GameState<S>,
    step: Step<'_>,
) -> io::Result<()> {
    writeln!(out, "#{} {}", step.index + 1, step.command.as_str())?;
    if !step.cleared.is_empty() {
        writeln!(out, "cleared rows: {:?}", step.cleared.as_slice())?;
    }
    writeln!(out, "{}", state.snapshot())
}

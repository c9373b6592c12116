//! The gridfill command line binary.
//!
//! Reads a puzzle file, solves it, and writes the solution next to the
//! input. Diagnostic output goes through `env_logger`, so `RUST_LOG=debug`
//! shows every forced move and guess as the solver takes them.

use std::{
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use gridfill_core::{Digit, DigitGrid, Grid, Guess};
use gridfill_solver::{SolveObserver, SolveStatus, Solver};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle file: nine lines, digits 1-9 for givens and 'X' for blanks.
    input: PathBuf,

    /// Where to write the solved grid. Defaults to "<INPUT>.sln.txt".
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

/// Forwards solver progress to the `log` facade.
struct LogObserver;

impl SolveObserver for LogObserver {
    fn cell_committed(&mut self, row: usize, col: usize, digit: Digit) {
        log::debug!("committed {digit} at ({row}, {col})");
    }

    fn guess_taken(&mut self, guess: Guess, depth: usize) {
        log::debug!(
            "guessing {} at ({}, {}), depth {depth}",
            guess.digit,
            guess.row,
            guess.col
        );
    }

    fn guess_failed(&mut self, guess: Guess, depth: usize) {
        log::debug!(
            "guess {} at ({}, {}) failed, depth {depth}",
            guess.digit,
            guess.row,
            guess.col
        );
    }
}

fn solution_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(".sln.txt");
    PathBuf::from(name)
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    let text = match std::fs::read_to_string(&args.input) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("cannot read {}: {err}", args.input.display());
            process::exit(2);
        }
    };

    let givens = match text.parse::<DigitGrid>() {
        Ok(givens) => givens,
        Err(err) => {
            eprintln!("invalid puzzle in {}: {err}", args.input.display());
            process::exit(2);
        }
    };

    let mut grid = match Grid::build(&givens) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("invalid puzzle in {}: {err}", args.input.display());
            process::exit(2);
        }
    };

    log::info!(
        "solving {} ({} givens)",
        args.input.display(),
        givens.given_count()
    );

    let status = match Solver::with_observer(LogObserver).solve(&mut grid) {
        Ok(status) => status,
        Err(err) => {
            eprintln!("internal error: {err}");
            process::exit(3);
        }
    };

    if status == SolveStatus::Contradiction {
        eprintln!("{}: puzzle is unsolvable", args.input.display());
        process::exit(1);
    }

    let output = args.output.unwrap_or_else(|| solution_path(&args.input));
    if let Err(err) = std::fs::write(&output, grid.to_digit_grid().to_string()) {
        eprintln!("cannot write {}: {err}", output.display());
        process::exit(2);
    }
    log::info!("solution written to {}", output.display());
}

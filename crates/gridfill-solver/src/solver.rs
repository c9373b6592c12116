//! The propagation-then-guess solving loop.

use gridfill_core::{Grid, Guess, InvariantError};

use crate::observer::{NullObserver, SolveObserver};

/// Outcome of a solving attempt.
///
/// The result space is deliberately two-valued: a grid either fills
/// completely or some cell runs out of candidates. The guess loop cannot
/// exit any other way, so there is no third "gave up" status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Every cell holds a committed digit.
    Solved,
    /// Some cell ran out of candidates. At the top level this means the
    /// puzzle is unsolvable; inside a guess it just means that guess was
    /// wrong.
    Contradiction,
}

/// The solving attempt had to be aborted because the engine contradicted
/// itself.
///
/// Distinct from [`SolveStatus::Contradiction`], which is the normal fate of
/// a wrong guess: this error means the constraint bookkeeping is defective
/// and the attempt's results cannot be trusted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolverError {
    /// The grid's bookkeeping broke an engine invariant.
    #[display("solver aborted: {_0}")]
    Invariant(InvariantError),
}

/// Solves grids by forced-move propagation and backtracking search.
///
/// Propagation repeatedly commits every cell whose candidate set has shrunk
/// to one digit. When a full pass commits nothing and blank cells remain,
/// the solver guesses: it takes the first blank cell in row-major order,
/// tries its smallest remaining candidate by solving a deep copy of the grid
/// with that digit committed, and on failure excludes the digit and tries
/// the next. The copy-per-guess strategy means a failed guess leaves the
/// original grid untouched apart from the accumulated exclusion, with no
/// undo bookkeeping anywhere.
///
/// # Examples
///
/// ```
/// use gridfill_core::Grid;
/// use gridfill_solver::{SolveStatus, Solver};
///
/// let mut grid = Grid::build(&"
/// 53XX7XXXX
/// 6XX195XXX
/// X98XXXX6X
/// 8XXX6XXX3
/// 4XX8X3XX1
/// 7XXX2XXX6
/// X6XXXX28X
/// XXX419XX5
/// XXXX8XX79"
///     .trim_start()
///     .parse()?)?;
///
/// assert_eq!(Solver::new().solve(&mut grid)?, SolveStatus::Solved);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver<O = NullObserver> {
    observer: O,
}

impl Solver<NullObserver> {
    /// Creates a solver that reports no progress events.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            observer: NullObserver,
        }
    }
}

impl<O: SolveObserver> Solver<O> {
    /// Creates a solver that reports progress to the given observer.
    pub const fn with_observer(observer: O) -> Self {
        Self { observer }
    }

    /// Consumes the solver and returns its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Runs a full solving attempt on the grid.
    ///
    /// On [`SolveStatus::Solved`], every cell of `grid` holds a committed
    /// digit. On [`SolveStatus::Contradiction`], the grid keeps whatever
    /// forced moves were committed before the dead end; the puzzle has no
    /// solution reachable from its givens.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Invariant`] if the engine's bookkeeping turns
    /// out to be inconsistent. This is a defect signal, not a property of
    /// the puzzle.
    pub fn solve(&mut self, grid: &mut Grid) -> Result<SolveStatus, SolverError> {
        self.solve_attempt(grid, 0)
    }

    /// One solving attempt on one grid instance, recursing per guess.
    ///
    /// The recursion is bounded by one frame per cell that is blank at the
    /// time of guessing: a child either succeeds, ending its branch, or the
    /// parent excludes the tried digit and never revisits it.
    fn solve_attempt(&mut self, grid: &mut Grid, depth: usize) -> Result<SolveStatus, SolverError> {
        loop {
            self.propagate(grid)?;

            let Some((row, col)) = grid.first_blank() else {
                return Ok(SolveStatus::Solved);
            };

            loop {
                let Some(digit) = grid.first_candidate(row, col) else {
                    return Ok(SolveStatus::Contradiction);
                };
                let guess = Guess { row, col, digit };
                // A child starts with its constructing guess already
                // committed, so its own guess phase lands on a later cell.
                debug_assert!(
                    grid.pending_guess() != Some(guess),
                    "a grid cannot re-derive the guess that built it"
                );

                self.observer.guess_taken(guess, depth);
                let mut child = grid.child_with_guess(guess);
                match self.solve_attempt(&mut child, depth + 1)? {
                    SolveStatus::Solved => {
                        // Only the guessed digit comes back; the parent
                        // re-derives the rest itself.
                        if !grid.commit(row, col, digit) {
                            return Err(InvariantError::GroupConflict { row, col, digit }.into());
                        }
                        self.observer.cell_committed(row, col, digit);
                        break;
                    }
                    SolveStatus::Contradiction => {
                        grid.exclude(row, col, digit);
                        self.observer.guess_failed(guess, depth);
                    }
                }
            }
        }
    }

    /// Commits forced cells until a full pass over the grid commits nothing.
    fn propagate(&mut self, grid: &mut Grid) -> Result<(), SolverError> {
        let mut progressed = true;
        while progressed {
            progressed = false;
            for row in 0..9 {
                for col in 0..9 {
                    if grid.refresh_candidates(row, col) == 1 {
                        let digit = grid.commit_only_candidate(row, col)?;
                        self.observer.cell_committed(row, col, digit);
                        progressed = true;
                    }
                }
            }
        }
        Ok(())
    }
}

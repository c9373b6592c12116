//! Observer hooks for watching a solve in progress.

use gridfill_core::{Digit, Guess};

/// Callbacks the solver invokes at its interesting moments.
///
/// The engine itself produces no diagnostic output; callers that want
/// visibility implement this trait and hand the observer to
/// [`Solver::with_observer`](crate::Solver::with_observer). The CLI uses it
/// to bridge solve progress onto the `log` facade; tests use it to assert on
/// how a solution was reached.
///
/// All methods default to doing nothing, so implementations only override
/// the events they care about.
pub trait SolveObserver {
    /// A cell received a committed digit, either as a forced move during
    /// propagation or when a successful guess was adopted.
    fn cell_committed(&mut self, _row: usize, _col: usize, _digit: Digit) {}

    /// The solver is about to recurse into a copy of the grid with this
    /// guess committed. `depth` counts enclosing guesses, starting at 0.
    fn guess_taken(&mut self, _guess: Guess, _depth: usize) {}

    /// The recursion for this guess ended in a contradiction; the digit has
    /// been excluded for that cell and the next candidate will be tried.
    fn guess_failed(&mut self, _guess: Guess, _depth: usize) {}
}

impl<O: SolveObserver + ?Sized> SolveObserver for &mut O {
    fn cell_committed(&mut self, row: usize, col: usize, digit: Digit) {
        (**self).cell_committed(row, col, digit);
    }

    fn guess_taken(&mut self, guess: Guess, depth: usize) {
        (**self).guess_taken(guess, depth);
    }

    fn guess_failed(&mut self, guess: Guess, depth: usize) {
        (**self).guess_failed(guess, depth);
    }
}

/// An observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SolveObserver for NullObserver {}

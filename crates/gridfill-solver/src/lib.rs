//! Propagation-and-backtracking solver for gridfill.
//!
//! The solver alternates two phases over a [`Grid`](gridfill_core::Grid):
//! forced-move propagation commits every cell whose candidate set has shrunk
//! to a single digit, and when propagation stalls the guess phase tries the
//! smallest candidate of the first blank cell by recursively solving a deep
//! copy of the grid. A failed guess excludes that digit in the original grid
//! and moves on to the next candidate; a cell left with no candidates is a
//! contradiction.
//!
//! # Examples
//!
//! ```
//! use gridfill_core::{DigitGrid, Grid};
//! use gridfill_solver::{SolveStatus, Solver};
//!
//! let givens: DigitGrid = "
//! 53XX7XXXX
//! 6XX195XXX
//! X98XXXX6X
//! 8XXX6XXX3
//! 4XX8X3XX1
//! 7XXX2XXX6
//! X6XXXX28X
//! XXX419XX5
//! XXXX8XX79"
//!     .trim_start()
//!     .parse()?;
//!
//! let mut grid = Grid::build(&givens)?;
//! let status = Solver::new().solve(&mut grid)?;
//! assert_eq!(status, SolveStatus::Solved);
//! assert!(grid.is_complete());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod observer;
pub mod solver;

pub use self::{
    observer::{NullObserver, SolveObserver},
    solver::{SolveStatus, Solver, SolverError},
};

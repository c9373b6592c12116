//! Core data structures for the gridfill Sudoku engine.
//!
//! This crate holds the puzzle data model shared by the solver and the CLI:
//!
//! - [`Digit`]: type-safe Sudoku digit 1-9
//! - [`DigitSet`]: a nine-digit bitset, used for candidate masks and
//!   used-digit tracking
//! - [`Group`]: the used digits of one row, column, or 3×3 block
//! - [`Cell`]: a committed value plus a monotonic exclusion mask
//! - [`Grid`]: the 9×9 board owning all cells and groups, with the
//!   constraint bookkeeping the solver drives
//! - [`DigitGrid`]: a plain 9×9 array of optional digits with the text
//!   format used for puzzle files
//!
//! # Examples
//!
//! ```
//! use gridfill_core::{DigitGrid, Grid};
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
//! let grid = Grid::build(&givens)?;
//! assert_eq!(grid.value(0, 0).map(|d| d.value()), Some(5));
//! assert_eq!(grid.value(0, 2), None);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cell;
pub mod digit;
pub mod digit_grid;
pub mod digit_set;
pub mod grid;
pub mod group;

pub use self::{
    cell::Cell,
    digit::Digit,
    digit_grid::{DigitGrid, ParseError},
    digit_set::DigitSet,
    grid::{BuildError, Grid, Guess, InvariantError},
    group::Group,
};

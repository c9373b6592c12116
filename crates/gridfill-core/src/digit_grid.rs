//! A plain 9×9 array of optional digits with the puzzle text format.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::digit::Digit;

/// A 9×9 array of optional digits.
///
/// This is the hand-off type between the I/O layer and the engine: parsing a
/// puzzle file yields a `DigitGrid`, [`Grid::build`](crate::Grid::build)
/// consumes one, and a solved [`Grid`](crate::Grid) renders back into one
/// for output.
///
/// # Text format
///
/// Nine lines, one row per line. The first nine characters of each line are
/// read: `'1'`-`'9'` is a given digit, `'X'` is a blank. Anything else in
/// those nine columns is an error, as is a line shorter than nine characters
/// or input with fewer than nine lines. Characters past the ninth column and
/// lines past the ninth are ignored.
///
/// ```
/// use gridfill_core::DigitGrid;
///
/// let grid: DigitGrid = "
/// X12345678
/// XXXXXXXXX
/// XXXXXXXXX
/// XXXXXXXXX
/// XXXXXXXXX
/// XXXXXXXXX
/// XXXXXXXXX
/// XXXXXXXXX
/// XXXXXXXXX"
///     .trim_start()
///     .parse()?;
///
/// assert_eq!(grid.get(0, 0), None);
/// assert_eq!(grid.get(0, 1).map(|d| d.value()), Some(1));
/// # Ok::<(), gridfill_core::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitGrid {
    cells: [[Option<Digit>; 9]; 9],
}

/// Failure to read a puzzle from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// A character other than `'1'`-`'9'` or `'X'` in the first nine
    /// columns of a row.
    #[display("unexpected character {ch:?} at row {}, column {}", row + 1, col + 1)]
    UnexpectedCharacter {
        /// Row index (0-8) of the offending character.
        row: usize,
        /// Column index (0-8) of the offending character.
        col: usize,
        /// The character found.
        ch: char,
    },
    /// A row with fewer than nine characters.
    #[display("row {} has only {len} characters, expected at least 9", row + 1)]
    LineTooShort {
        /// Row index (0-8) of the short line.
        row: usize,
        /// Number of characters on the line.
        len: usize,
    },
    /// Input ended before nine rows were read.
    #[display("expected 9 rows, found {found}")]
    MissingRows {
        /// Number of rows present.
        found: usize,
    },
}

impl DigitGrid {
    /// Creates a grid with every cell blank.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; 9]; 9],
        }
    }

    /// The digit at `(row, col)`, or `None` for a blank.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> Option<Digit> {
        self.cells[row][col]
    }

    /// Sets or blanks the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    pub const fn set(&mut self, row: usize, col: usize, digit: Option<Digit>) {
        self.cells[row][col] = digit;
    }

    /// Number of cells holding a digit.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }
}

impl FromStr for DigitGrid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let mut grid = Self::new();
        let mut lines = s.lines();
        for row in 0..9 {
            let Some(line) = lines.next() else {
                return Err(ParseError::MissingRows { found: row });
            };
            let mut chars = line.chars();
            for col in 0..9 {
                let Some(ch) = chars.next() else {
                    return Err(ParseError::LineTooShort {
                        row,
                        len: line.chars().count(),
                    });
                };
                match ch {
                    'X' => {}
                    '1'..='9' => {
                        grid.cells[row][col] = ch
                            .to_digit(10)
                            .and_then(|value| u8::try_from(value).ok())
                            .and_then(Digit::try_from_value);
                    }
                    _ => return Err(ParseError::UnexpectedCharacter { row, col, ch }),
                }
            }
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                match cell {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_char('X')?,
                }
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

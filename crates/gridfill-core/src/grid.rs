//! The 9×9 grid owning all cells and constraint groups.

use crate::{cell::Cell, digit::Digit, digit_grid::DigitGrid, group::Group};

/// A tentative placement: which cell, which digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess {
    /// Row index (0-8) of the guessed cell.
    pub row: usize,
    /// Column index (0-8) of the guessed cell.
    pub col: usize,
    /// The digit being tried.
    pub digit: Digit,
}

/// Failure to build a grid from given digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BuildError {
    /// Two givens share a digit within one row, column, or block.
    #[display("given digit {digit} at row {}, column {} repeats within its row, column, or block", row + 1, col + 1)]
    DuplicateDigit {
        /// Row index (0-8) of the second occurrence.
        row: usize,
        /// Column index (0-8) of the second occurrence.
        col: usize,
        /// The repeated digit.
        digit: Digit,
    },
}

/// The engine's bookkeeping contradicted itself.
///
/// These conditions are never produced by an unsolvable puzzle; propagation
/// only commits a cell it has just verified to have exactly one candidate,
/// and that candidate cannot conflict with groups the verification already
/// consulted. Seeing one of these means the grid's constraint tracking is
/// defective, so the solving attempt is aborted rather than treated as a
/// normal contradiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvariantError {
    /// A cell was committed as forced while holding other than one
    /// candidate.
    #[display("cell at row {}, column {} was treated as forced but has {remaining} candidates", row + 1, col + 1)]
    NotForced {
        /// Row index (0-8) of the cell.
        row: usize,
        /// Column index (0-8) of the cell.
        col: usize,
        /// Candidates the cell actually had.
        remaining: usize,
    },
    /// A forced commit collided with a group that already held the digit.
    #[display("forced digit {digit} at row {}, column {} conflicts with a group that already holds it", row + 1, col + 1)]
    GroupConflict {
        /// Row index (0-8) of the cell.
        row: usize,
        /// Column index (0-8) of the cell.
        col: usize,
        /// The conflicting digit.
        digit: Digit,
    },
}

/// A 9×9 Sudoku grid with full constraint bookkeeping.
///
/// The grid owns its 81 [`Cell`]s and all 27 [`Group`]s (9 rows, 9 columns,
/// 9 blocks). Cells never hold references to their groups; every operation
/// goes through the grid, which resolves a cell's owners from its
/// coordinates. That single-owner shape is what makes the recursive solver's
/// copy-per-guess strategy safe: cloning a grid clones a completely
/// self-contained constraint state, with no aliasing between parent and
/// child.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: [[Cell; 9]; 9],
    rows: [Group; 9],
    cols: [Group; 9],
    blocks: [[Group; 3]; 3],
    pending_guess: Option<Guess>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates a grid with every cell blank.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::new(); 9]; 9],
            rows: [Group::new(); 9],
            cols: [Group::new(); 9],
            blocks: [[Group::new(); 3]; 3],
            pending_guess: None,
        }
    }

    /// Builds a grid from given digits, committing each one.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::DuplicateDigit`] if two givens share a digit
    /// within one row, column, or block. Solving is pointless in that case;
    /// the input itself is broken.
    pub fn build(givens: &DigitGrid) -> Result<Self, BuildError> {
        let mut grid = Self::new();
        for row in 0..9 {
            for col in 0..9 {
                if let Some(digit) = givens.get(row, col) {
                    if !grid.commit(row, col, digit) {
                        return Err(BuildError::DuplicateDigit { row, col, digit });
                    }
                }
            }
        }
        Ok(grid)
    }

    /// Commits a digit into the cell at `(row, col)`.
    ///
    /// Returns `false` if any of the cell's three owning groups already held
    /// the digit. See [`Cell::commit`] for the no-rollback contract.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    pub fn commit(&mut self, row: usize, col: usize, digit: Digit) -> bool {
        self.cells[row][col].commit(
            digit,
            &mut self.rows[row],
            &mut self.cols[col],
            &mut self.blocks[row / 3][col / 3],
        )
    }

    /// Refreshes the exclusion mask of the cell at `(row, col)` from its
    /// owning groups and returns the number of remaining candidates.
    ///
    /// Returns 0 for a cell that already has a value.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    pub fn refresh_candidates(&mut self, row: usize, col: usize) -> usize {
        self.cells[row][col].refresh_candidates(
            &self.rows[row],
            &self.cols[col],
            &self.blocks[row / 3][col / 3],
        )
    }

    /// Commits the sole remaining candidate of the cell at `(row, col)`.
    ///
    /// The caller must have just observed [`Self::refresh_candidates`]
    /// return exactly 1 for this cell; the count is re-derived here and
    /// anything other than a clean single-candidate commit is an engine
    /// defect, not an unsolvable puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError::NotForced`] if the cell does not have
    /// exactly one candidate, and [`InvariantError::GroupConflict`] if the
    /// commit collides with an owning group.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    pub fn commit_only_candidate(&mut self, row: usize, col: usize) -> Result<Digit, InvariantError> {
        let remaining = self.refresh_candidates(row, col);
        if remaining != 1 {
            return Err(InvariantError::NotForced {
                row,
                col,
                remaining,
            });
        }
        let Some(digit) = self.cells[row][col].first_candidate() else {
            return Err(InvariantError::NotForced {
                row,
                col,
                remaining: 0,
            });
        };
        if !self.commit(row, col, digit) {
            return Err(InvariantError::GroupConflict { row, col, digit });
        }
        Ok(digit)
    }

    /// Rules a digit out for the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    pub const fn exclude(&mut self, row: usize, col: usize, digit: Digit) {
        self.cells[row][col].exclude(digit);
    }

    /// The smallest digit not yet excluded for the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    #[must_use]
    pub const fn first_candidate(&self, row: usize, col: usize) -> Option<Digit> {
        self.cells[row][col].first_candidate()
    }

    /// The committed digit at `(row, col)`, or `None` for a blank.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    #[must_use]
    pub const fn value(&self, row: usize, col: usize) -> Option<Digit> {
        self.cells[row][col].value()
    }

    /// The first blank cell in row-major order, or `None` if the grid is
    /// complete.
    #[must_use]
    pub fn first_blank(&self) -> Option<(usize, usize)> {
        for row in 0..9 {
            for col in 0..9 {
                if self.cells[row][col].value().is_none() {
                    return Some((row, col));
                }
            }
        }
        None
    }

    /// Returns `true` if every cell has a committed value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.first_blank().is_none()
    }

    /// The guess this grid was constructed to try, if it is a recursion
    /// child.
    #[must_use]
    pub const fn pending_guess(&self) -> Option<Guess> {
        self.pending_guess
    }

    /// Builds the child grid for trying a guess.
    ///
    /// The child starts from fresh groups and replays only this grid's
    /// committed values; exclusion masks are deliberately not carried over,
    /// since the child re-derives them from its own propagation. The guessed
    /// digit is then committed and the guess recorded as pending.
    ///
    /// The replayed values came out of this grid's own duplicate checking
    /// and the guessed digit out of a candidate mask that reflects the
    /// groups, so neither commit can report a conflict here.
    #[must_use]
    pub fn child_with_guess(&self, guess: Guess) -> Self {
        let mut child = Self::new();
        for row in 0..9 {
            for col in 0..9 {
                if let Some(digit) = self.cells[row][col].value() {
                    child.commit(row, col, digit);
                }
            }
        }
        let placed = child.commit(guess.row, guess.col, guess.digit);
        debug_assert!(placed, "guessed digit must be open in the copied grid");
        child.pending_guess = Some(guess);
        child
    }

    /// Snapshots the committed values into a plain [`DigitGrid`].
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for row in 0..9 {
            for col in 0..9 {
                grid.set(row, col, self.cells[row][col].value());
            }
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::digit::Digit::*;

    use super::*;

    fn givens(rows: &[&str; 9]) -> DigitGrid {
        DigitGrid::from_str(&rows.join("\n")).unwrap()
    }

    const BLANK: &str = "XXXXXXXXX";

    #[test]
    fn build_commits_givens_into_groups() {
        let grid = Grid::build(&givens(&[
            "5XXXXXXXX", BLANK, BLANK, BLANK, BLANK, BLANK, BLANK, BLANK, "XXXXXXXX7",
        ]))
        .unwrap();

        assert_eq!(grid.value(0, 0), Some(D5));
        assert_eq!(grid.value(8, 8), Some(D7));
        assert_eq!(grid.value(4, 4), None);
    }

    #[test]
    fn build_rejects_row_duplicates() {
        let err = Grid::build(&givens(&[
            "5XXXXXXX5", BLANK, BLANK, BLANK, BLANK, BLANK, BLANK, BLANK, BLANK,
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            BuildError::DuplicateDigit {
                row: 0,
                col: 8,
                digit: D5
            }
        );
    }

    #[test]
    fn build_rejects_column_duplicates() {
        let err = Grid::build(&givens(&[
            "3XXXXXXXX", BLANK, BLANK, BLANK, BLANK, BLANK, BLANK, BLANK, "3XXXXXXXX",
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            BuildError::DuplicateDigit {
                row: 8,
                col: 0,
                digit: D3
            }
        );
    }

    #[test]
    fn build_rejects_block_duplicates() {
        // (0, 0) and (2, 2) share the top-left block but no row or column.
        let err = Grid::build(&givens(&[
            "9XXXXXXXX", BLANK, "XX9XXXXXX", BLANK, BLANK, BLANK, BLANK, BLANK, BLANK,
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            BuildError::DuplicateDigit {
                row: 2,
                col: 2,
                digit: D9
            }
        );
    }

    #[test]
    fn refresh_consults_all_three_groups() {
        let mut grid = Grid::build(&givens(&[
            "12XXXXXXX", "X3XXXXXXX", BLANK, "4XXXXXXXX", BLANK, BLANK, BLANK, BLANK, BLANK,
        ]))
        .unwrap();

        // Cell (0, 2): row has 1 and 2, block adds 3, column nothing.
        assert_eq!(grid.refresh_candidates(0, 2), 6);
        assert_eq!(grid.first_candidate(0, 2), Some(D4));

        // Cell (1, 0): row has 3, column has 1 and 4, block adds 2.
        assert_eq!(grid.refresh_candidates(1, 0), 5);
        assert_eq!(grid.first_candidate(1, 0), Some(D5));
    }

    #[test]
    fn commit_only_candidate_commits_a_forced_cell() {
        // Row 0 holds 1-8, so (0, 8) is forced to 9.
        let mut grid = Grid::build(&givens(&[
            "12345678X", BLANK, BLANK, BLANK, BLANK, BLANK, BLANK, BLANK, BLANK,
        ]))
        .unwrap();

        assert_eq!(grid.refresh_candidates(0, 8), 1);
        assert_eq!(grid.commit_only_candidate(0, 8), Ok(D9));
        assert_eq!(grid.value(0, 8), Some(D9));
    }

    #[test]
    fn commit_only_candidate_rejects_unforced_cells() {
        let mut grid = Grid::build(&givens(&[
            "1234567XX", BLANK, BLANK, BLANK, BLANK, BLANK, BLANK, BLANK, BLANK,
        ]))
        .unwrap();

        assert_eq!(
            grid.commit_only_candidate(0, 8),
            Err(InvariantError::NotForced {
                row: 0,
                col: 8,
                remaining: 2
            })
        );
        assert_eq!(grid.value(0, 8), None);
    }

    #[test]
    fn first_blank_scans_row_major() {
        let grid = Grid::build(&givens(&[
            "123456789", "45X789123", BLANK, BLANK, BLANK, BLANK, BLANK, BLANK, BLANK,
        ]))
        .unwrap();
        assert_eq!(grid.first_blank(), Some((1, 2)));
    }

    #[test]
    fn child_copies_values_but_not_exclusions() {
        let mut parent = Grid::build(&givens(&[
            "5XXXXXXXX", BLANK, BLANK, BLANK, BLANK, BLANK, BLANK, BLANK, BLANK,
        ]))
        .unwrap();
        parent.exclude(0, 1, D7);

        let guess = Guess {
            row: 0,
            col: 1,
            digit: D1,
        };
        let child = parent.child_with_guess(guess);

        assert_eq!(child.value(0, 0), Some(D5));
        assert_eq!(child.value(0, 1), Some(D1));
        assert_eq!(child.pending_guess(), Some(guess));
        // The parent's failed-guess exclusion stayed behind.
        assert!(!child.cells[0][1].excluded().contains(D7));
        // The parent is untouched apart from its own exclusion record.
        assert_eq!(parent.value(0, 1), None);
        assert!(parent.cells[0][1].excluded().contains(D7));
    }

    #[test]
    fn to_digit_grid_round_trips_givens() {
        let source = givens(&[
            "53XX7XXXX", "6XX195XXX", "X98XXXX6X", "8XXX6XXX3", "4XX8X3XX1", "7XXX2XXX6",
            "X6XXXX28X", "XXX419XX5", "XXXX8XX79",
        ]);
        let grid = Grid::build(&source).unwrap();
        assert_eq!(grid.to_digit_grid(), source);
    }
}

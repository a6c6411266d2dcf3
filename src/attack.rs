//! Attack-line bookkeeping for a board filled one column at a time.
//!
//! Every row and every diagonal is an attack line with a single "free" flag.
//! Diagonal ids compress all squares on the same diagonal to one flag:
//! - up diagonal through `(column, row)`: `size - 1 + column - row`
//! - down diagonal through `(column, row)`: `column + row`
//!
//! Both ranges are `0..2 * size - 1`.

use crate::error::{validate_size, QueensError};

/// Free rows and diagonals for a partially filled `size` x `size` board.
///
/// Queens are placed column by column, so the column itself never needs a
/// flag: `column` is the next column to fill and every column before it
/// holds exactly one queen.
#[derive(Debug, Clone)]
pub struct AttackState {
    size: usize,
    row_free: Vec<bool>,
    diag_up_free: Vec<bool>,
    diag_down_free: Vec<bool>,
    column: usize,
}

impl AttackState {
    /// Creates an empty board with every attack line free.
    pub fn new(n: i64) -> Result<Self, QueensError> {
        let size = validate_size(n)?;
        let diagonals = 2 * size - 1;
        Ok(Self {
            size,
            row_free: vec![true; size],
            diag_up_free: vec![true; diagonals],
            diag_down_free: vec![true; diagonals],
            column: 0,
        })
    }

    /// Board dimension.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Index of the column the next queen goes into (`size` once full).
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    #[inline(always)]
    fn diag_up(&self, row: usize) -> usize {
        self.size - 1 + self.column - row
    }

    #[inline(always)]
    fn diag_down(&self, row: usize) -> usize {
        self.column + row
    }

    /// Returns true if a queen at `row` of the current column is not attacked.
    #[inline]
    pub fn is_free(&self, row: usize) -> bool {
        debug_assert!(row < self.size, "row {row} out of range");
        debug_assert!(!self.is_full(), "no column left to fill");
        self.row_free[row]
            && self.diag_up_free[self.diag_up(row)]
            && self.diag_down_free[self.diag_down(row)]
    }

    /// Returns the lowest free row in the current column at or after `from`.
    #[inline]
    pub fn next_free_row(&self, from: usize) -> Option<usize> {
        (from..self.size).find(|&row| self.is_free(row))
    }

    /// Places a queen at `row` of the current column and advances to the next column.
    ///
    /// The caller must have just checked `is_free(row)`.
    #[inline]
    pub fn place(&mut self, row: usize) {
        debug_assert!(self.is_free(row), "row {row} is attacked");
        let (up, down) = (self.diag_up(row), self.diag_down(row));
        self.row_free[row] = false;
        self.diag_up_free[up] = false;
        self.diag_down_free[down] = false;
        self.column += 1;
    }

    /// Undoes the most recent `place(row)`.
    ///
    /// Placements and removals must nest: `row` is the queen of the last
    /// filled column.
    #[inline]
    pub fn remove(&mut self, row: usize) {
        debug_assert!(self.column > 0, "no queen to remove");
        self.column -= 1;
        let (up, down) = (self.diag_up(row), self.diag_down(row));
        debug_assert!(!self.row_free[row], "row {row} holds no queen");
        self.row_free[row] = true;
        self.diag_up_free[up] = true;
        self.diag_down_free[down] = true;
    }

    /// Returns true once every column holds a queen.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.column == self.size
    }
}

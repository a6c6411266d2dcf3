//! Lazy enumeration of every N-Queens solution.
//!
//! Same traversal as the counter, but each placement also records its row in
//! a per-column assignment buffer, and every full board is copied out as a
//! [`Solution`] before backtracking touches the buffer again.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Deref;

use rustc_hash::FxHashSet;

use crate::attack::AttackState;

/// One complete board: the 1-indexed row of the queen in each column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Solution(Vec<usize>);

impl Solution {
    pub fn new(rows: Vec<usize>) -> Self {
        Self(rows)
    }

    /// Row of the queen in each column, 1-indexed.
    pub fn rows(&self) -> &[usize] {
        &self.0
    }

    pub fn into_rows(self) -> Vec<usize> {
        self.0
    }

    /// Returns true if no two queens share a row or a diagonal.
    ///
    /// Rows must be a permutation of `1..=n`.
    pub fn is_valid(&self) -> bool {
        let n = self.0.len();
        let mut seen_rows: FxHashSet<usize> = FxHashSet::default();
        if !self
            .0
            .iter()
            .all(|&row| (1..=n).contains(&row) && seen_rows.insert(row))
        {
            return false;
        }

        self.0.iter().enumerate().all(|(i, &row_i)| {
            self.0[i + 1..]
                .iter()
                .enumerate()
                .all(|(offset, &row_j)| row_i.abs_diff(row_j) != offset + 1)
        })
    }
}

impl Deref for Solution {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

/// Solver-mode line: every row followed by a single space.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.0 {
            write!(f, "{} ", row)?;
        }
        Ok(())
    }
}

/// Depth-first producer of solutions in ascending-row order.
///
/// Each call to `next` resumes the search where the previous solution was
/// found. Dropping the iterator early is the only way to stop the search.
pub struct Solutions {
    state: AttackState,
    /// `assignment[column] = row + 1`, valid for columns below `state.column()`.
    assignment: Vec<usize>,
    /// Next row to try for each column on the current path.
    next_rows: Vec<usize>,
    emitted: u64,
    finished: bool,
}

impl Solutions {
    pub fn new(state: AttackState) -> Self {
        let size = state.size();
        let mut next_rows = Vec::with_capacity(size);
        next_rows.push(0);
        Self {
            state,
            assignment: vec![0; size],
            next_rows,
            emitted: 0,
            finished: false,
        }
    }

    /// Board size being enumerated.
    pub fn size(&self) -> usize {
        self.state.size()
    }
}

impl Iterator for Solutions {
    type Item = Solution;

    fn next(&mut self) -> Option<Solution> {
        if self.finished {
            return None;
        }

        while let Some(cursor) = self.next_rows.last_mut() {
            match self.state.next_free_row(*cursor) {
                Some(row) => {
                    *cursor = row + 1;
                    self.assignment[self.state.column()] = row + 1;
                    self.state.place(row);

                    if self.state.is_full() {
                        let solution = Solution(self.assignment.clone());
                        self.state.remove(row);
                        debug_assert!(solution.is_valid());
                        self.emitted += 1;
                        return Some(solution);
                    }
                    self.next_rows.push(0);
                }
                None => {
                    self.next_rows.pop();
                    if let Some(&parent) = self.next_rows.last() {
                        self.state.remove(parent - 1);
                    }
                }
            }
        }

        self.finished = true;
        log::debug!(
            "enumerated {} solutions for n={}",
            self.emitted,
            self.state.size()
        );
        None
    }
}

impl FusedIterator for Solutions {}

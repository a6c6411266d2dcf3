//! Exhaustive placement and solution counter.
//!
//! Walks the full search tree in ascending-row order and counts every
//! committed queen placement (including those later undone by backtracking)
//! and every completed board.

use std::fmt;

use crate::attack::AttackState;

/// Totals for one full search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountResult {
    /// Queens placed anywhere in the search tree.
    pub placements: u64,
    /// Complete non-attacking boards found.
    pub solutions: u64,
    /// Board size.
    pub n: usize,
}

impl fmt::Display for CountResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The {}-Queens problem required {} queen placements to find all {} solutions",
            self.n, self.placements, self.solutions
        )
    }
}

/// Depth-first counter over an owned attack state.
pub struct CountingSearch {
    state: AttackState,
    placements: u64,
    solutions: u64,
}

impl CountingSearch {
    pub fn new(state: AttackState) -> Self {
        Self {
            state,
            placements: 0,
            solutions: 0,
        }
    }

    /// Explores every placement and returns the totals.
    ///
    /// Uses an explicit stack with one cursor per filled column instead of
    /// recursion, so the native stack depth does not grow with the board.
    /// The cursor holds the next row to try; the queen sitting in that column
    /// is always at `cursor - 1`.
    pub fn run(mut self) -> CountResult {
        let mut next_rows: Vec<usize> = Vec::with_capacity(self.state.size());
        next_rows.push(0);

        while let Some(cursor) = next_rows.last_mut() {
            match self.state.next_free_row(*cursor) {
                Some(row) => {
                    *cursor = row + 1;
                    self.state.place(row);
                    self.placements += 1;

                    if self.state.is_full() {
                        self.solutions += 1;
                        self.state.remove(row);
                    } else {
                        next_rows.push(0);
                    }
                }
                None => {
                    // column exhausted; lift the queen of the parent column
                    next_rows.pop();
                    if let Some(&parent) = next_rows.last() {
                        self.state.remove(parent - 1);
                    }
                }
            }
        }

        let result = CountResult {
            placements: self.placements,
            solutions: self.solutions,
            n: self.state.size(),
        };
        log::debug!(
            "counted {} solutions with {} placements for n={}",
            result.solutions,
            result.placements,
            result.n
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(n: i64) -> CountResult {
        CountingSearch::new(AttackState::new(n).unwrap()).run()
    }

    #[test]
    fn test_known_solution_counts() {
        let expected = [1, 0, 0, 2, 10, 4, 40, 92];
        for (n, &solutions) in (1..).zip(expected.iter()) {
            assert_eq!(count(n).solutions, solutions, "wrong solution count for n={n}");
        }
    }

    #[test]
    fn test_placements_count_every_committed_queen() {
        let expected = [1, 2, 5, 16, 53, 152, 551, 2056];
        for (n, &placements) in (1..).zip(expected.iter()) {
            let result = count(n);
            assert_eq!(result.placements, placements, "wrong placement count for n={n}");
            assert!(result.placements >= result.solutions);
        }
    }

    #[test]
    fn test_single_queen() {
        assert_eq!(
            count(1),
            CountResult {
                placements: 1,
                solutions: 1,
                n: 1
            }
        );
    }

    #[test]
    fn test_output_template() {
        assert_eq!(
            count(4).to_string(),
            "The 4-Queens problem required 16 queen placements to find all 2 solutions"
        );
    }
}

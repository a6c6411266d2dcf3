//! N-Queens Placement Counter and Solver Library
//!
//! Column-by-column backtracking over attack lines (rows and both diagonal
//! directions). Two engines share the same [`AttackState`]:
//! - [`count`] walks the whole search tree and reports how many queens were
//!   placed and how many complete boards were found.
//! - [`enumerate`] lazily yields every complete board in ascending-row order.
//!
//! Neither entry point performs I/O.

pub mod attack;
pub mod board;
pub mod counter;
pub mod error;
pub mod solver;

pub use attack::AttackState;
pub use counter::{CountResult, CountingSearch};
pub use error::{validate_size, QueensError};
pub use solver::{Solution, Solutions};

/// Counts placements and solutions for the `n`-Queens problem.
pub fn count(n: i64) -> Result<CountResult, QueensError> {
    let state = AttackState::new(n)?;
    Ok(CountingSearch::new(state).run())
}

/// Returns a lazy iterator over every `n`-Queens solution.
///
/// Solutions come out in depth-first order, lowest row first, so the
/// sequence is sorted lexicographically by column.
pub fn enumerate(n: i64) -> Result<Solutions, QueensError> {
    let state = AttackState::new(n)?;
    Ok(Solutions::new(state))
}

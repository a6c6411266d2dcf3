//! Text rendering of solutions as chess boards.

use crate::solver::Solution;

/// Formats a solution as an N x N board.
///
/// Rows run from row N at the top down to row 1, columns left to right.
/// Queens show as 'Q', empty squares as '.'.
pub fn format_board(solution: &Solution) -> String {
    let n = solution.len();
    let mut output = String::with_capacity(n * 2 * n);

    for row in (1..=n).rev() {
        for (column, &queen_row) in solution.iter().enumerate() {
            if column > 0 {
                output.push(' ');
            }
            output.push(if queen_row == row { 'Q' } else { '.' });
        }
        output.push('\n');
    }

    output
}

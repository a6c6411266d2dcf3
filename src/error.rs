//! Error type for the N-Queens engines.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueensError {
    #[error("N must be a positive value for N-Queens problems (got {0})")]
    InvalidSize(i64),
}

/// Checks the `N >= 1` precondition and converts the size to a board dimension.
pub fn validate_size(n: i64) -> Result<usize, QueensError> {
    if n <= 0 {
        return Err(QueensError::InvalidSize(n));
    }
    usize::try_from(n).map_err(|_| QueensError::InvalidSize(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_sizes_are_accepted() {
        assert_eq!(validate_size(1), Ok(1));
        assert_eq!(validate_size(8), Ok(8));
    }

    #[test]
    fn test_non_positive_sizes_are_rejected() {
        assert_eq!(validate_size(0), Err(QueensError::InvalidSize(0)));
        assert_eq!(validate_size(-1), Err(QueensError::InvalidSize(-1)));
        assert_eq!(
            QueensError::InvalidSize(-3).to_string(),
            "N must be a positive value for N-Queens problems (got -3)"
        );
    }
}

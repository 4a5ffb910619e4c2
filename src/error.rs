// src/error.rs
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PercolationError {
    /// A size or count that must be positive was zero.
    #[error("Invalid argument: {name} must be positive (got {value})")]
    InvalidArgument { name: &'static str, value: usize },

    /// A coordinate or element index fell outside the inclusive range `[low, high]`.
    #[error("Index out of range: {index} is not in [{low}, {high}]")]
    IndexOutOfRange {
        index: usize,
        low: usize,
        high: usize,
    },
}

pub type Result<T> = std::result::Result<T, PercolationError>;

impl PercolationError {
    /// Rejects zero for a value that must be positive.
    ///
    /// # Errors
    /// Returns `InvalidArgument` when `value == 0`.
    pub fn require_positive(name: &'static str, value: usize) -> Result<usize> {
        if value == 0 {
            return Err(Self::InvalidArgument { name, value });
        }
        Ok(value)
    }

    /// True for `InvalidArgument`; used by the CLI to pick an exit code.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

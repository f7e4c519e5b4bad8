//! Error types for lumr

use thiserror::Error;

/// Result type alias using lumr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lumr operations
///
/// The factorization itself never fails; both variants are raised by
/// operations consuming an existing decomposition. Faults inside parallel
/// elimination workers propagate as panics through the fork-join barrier
/// (see [`crate::parallel`]) and deliberately have no variant here.
#[derive(Error, Debug)]
pub enum Error {
    /// Row/column counts violate an operation's contract
    #[error("Dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// The factored matrix has a zero diagonal entry in U
    #[error("Matrix is singular")]
    Singular,
}

impl Error {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::DimensionMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }
}

//! Matrix decomposition algorithms
//!
//! # Module Structure
//!
//! - `lu`: pivoted LU factorization engine and its derived operations
//!   (factor extraction, determinant, linear solve, inverse)
//! - `solve`: forward/back substitution kernels over the combined
//!   triangular storage

mod lu;
mod solve;

pub use lu::LuDecomposition;

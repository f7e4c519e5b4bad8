//! # lumr
//!
//! **Dense pivoted LU factorization for Rust with multi-threaded elimination.**
//!
//! lumr factors a dense m×n matrix into a unit lower triangular L, an upper
//! triangular U, and a row permutation so that `A[piv, :] = L * U`, then uses
//! the factors to compute determinants and solve linear systems.
//!
//! ## Why lumr?
//!
//! - **Always succeeds**: partial pivoting guarantees a factorization exists
//!   even for singular or rectangular input; singularity is detected lazily
//!   by the consumers that require nonsingular factors
//! - **Parallel elimination**: the independent per-row column updates inside
//!   the factorization fan out across a Rayon worker pool
//! - **Deterministic**: parallel runs produce factors bit-identical to
//!   serial runs
//! - **Pure Rust**: no LAPACK/BLAS wrappers, single binary deployment
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lumr::prelude::*;
//!
//! let a = DenseMatrix::from_slice(&[4.0, 3.0, 6.0, 3.0], 2, 2);
//! let b = DenseMatrix::from_slice(&[1.0, 1.0], 2, 1);
//!
//! let lu = LuDecomposition::compute(&a);
//! let det = lu.det()?;          // -6.0
//! let x = lu.solve(&b)?;        // [[0.0], [1.0 / 3.0]]
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Multi-threaded column elimination

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod decompose;
pub mod element;
pub mod error;
pub mod matrix;
pub mod parallel;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::decompose::LuDecomposition;
    pub use crate::element::Element;
    pub use crate::error::{Error, Result};
    pub use crate::matrix::{DenseMatrix, MatrixView};
}

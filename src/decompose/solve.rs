//! Triangular substitution kernels over combined L/U storage
//!
//! Both kernels update the right-hand side in place. `lu` is the m×n
//! combined factor storage with row stride `n`; `x` is an m-row right-hand
//! side with row stride `nx` whose rows have already been reordered by the
//! pivot permutation. Only the leading n rows of `x` participate, matching
//! the n unknowns of the triangular systems.

use crate::element::Element;

/// Solve L·Y = X in place, where L is the unit lower triangle of `lu`.
///
/// The unit diagonal is implicit and never divided.
pub(crate) fn forward_substitute<T: Element>(lu: &[T], n: usize, x: &mut [T], nx: usize) {
    for k in 0..n {
        for i in k + 1..n {
            let lik = lu[i * n + k];
            for j in 0..nx {
                x[i * nx + j] = x[i * nx + j] - x[k * nx + j] * lik;
            }
        }
    }
}

/// Solve U·X = Y in place, where U is the upper triangle of `lu`.
///
/// Divides row k by the diagonal entry U\[k\]\[k\] before eliminating the
/// rows above it; callers must have verified the diagonal is nonzero.
pub(crate) fn back_substitute<T: Element>(lu: &[T], n: usize, x: &mut [T], nx: usize) {
    for k in (0..n).rev() {
        let ukk = lu[k * n + k];
        for j in 0..nx {
            x[k * nx + j] = x[k * nx + j] / ukk;
        }
        for i in 0..k {
            let uik = lu[i * n + k];
            for j in 0..nx {
                x[i * nx + j] = x[i * nx + j] - x[k * nx + j] * uik;
            }
        }
    }
}

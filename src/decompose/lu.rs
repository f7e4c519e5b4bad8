//! Pivoted LU factorization engine
//!
//! For an m×n matrix A with m >= n, the factorization is an m×n unit lower
//! triangular matrix L, an n×n upper triangular matrix U, and a permutation
//! vector `piv` of length m so that `A[piv, :] = L * U`. The factorization
//! with partial pivoting always exists, even when the matrix is singular, so
//! [`LuDecomposition::compute`] never fails; operations that require
//! nonsingular factors ([`LuDecomposition::solve`],
//! [`LuDecomposition::inverse`]) check lazily and report
//! [`Error::Singular`](crate::error::Error::Singular).

use super::solve;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::matrix::{DenseMatrix, MatrixView};
use crate::parallel;

/// Pivoted LU factorization of a dense matrix: `A[piv, :] = L * U`
///
/// L is unit lower triangular (diagonal implied, not stored), U is upper
/// triangular; both live in a single combined m×n storage grid in the cells
/// that originally held A. The value is an immutable snapshot of the
/// factorization outcome: accessors return fresh copies every call.
pub struct LuDecomposition<T> {
    /// Combined storage: cell (i, j) holds L\[i\]\[j\] for i > j and
    /// U\[i\]\[j\] for i <= j
    lu: DenseMatrix<T>,
    /// Which original row of A occupies each row of the storage
    piv: Vec<usize>,
    /// Parity of the permutation, +1 or -1
    pivot_sign: i32,
}

impl<T: Element> LuDecomposition<T> {
    /// Factor `a` using left-looking, dot-product Crout elimination with
    /// partial pivoting.
    ///
    /// Never fails: singular and rectangular inputs factor too, with zero
    /// diagonal entries in U marking the singular columns.
    ///
    /// For each column, the per-row updates below the diagonal are mutually
    /// independent and fan out across the worker pool (see
    /// [`crate::parallel`]); columns are processed strictly in order since
    /// each reads the already-scaled columns before it.
    pub fn compute(a: &impl MatrixView<T>) -> Self {
        let m = a.nrows();
        let n = a.ncols();
        let mut lu = a.to_dense();
        let mut piv: Vec<usize> = (0..m).collect();
        let mut pivot_sign = 1i32;

        // Scratch copy of the active column, localizing the dot products
        let mut col_j = vec![T::zero(); m];

        for j in 0..n {
            let data = lu.as_mut_slice();

            for (i, c) in col_j.iter_mut().enumerate() {
                *c = data[i * n + j];
            }

            // Rows 0..=j form a sequential recurrence through the scratch
            // column: row i reads entries finalized by the rows before it.
            let head = m.min(j + 1);
            for i in 0..head {
                let kmax = i.min(j);
                let row = &data[i * n..i * n + kmax];
                let mut s = T::zero();
                for (k, &r) in row.iter().enumerate() {
                    s = s + r * col_j[k];
                }
                let v = col_j[i] - s;
                col_j[i] = v;
                data[i * n + j] = v;
            }

            // Rows below the diagonal read only the finalized scratch
            // prefix; each writes its own row and its own scratch cell.
            let (done, tail_cells) = col_j.split_at_mut(head);
            let ctx = &done[..j.min(head)];
            let (_, tail_rows) = data.split_at_mut(head * n);
            parallel::for_each_row(tail_rows, n, tail_cells, |_, row, cell| {
                let mut s = T::zero();
                for k in 0..j {
                    s = s + row[k] * ctx[k];
                }
                let v = *cell - s;
                *cell = v;
                row[j] = v;
            });

            if j < m {
                // Partial pivot: largest magnitude below the diagonal,
                // first index wins on ties.
                let mut p = j;
                for i in j + 1..m {
                    if col_j[i].abs_val() > col_j[p].abs_val() {
                        p = i;
                    }
                }
                if p != j {
                    for k in 0..n {
                        data.swap(p * n + k, j * n + k);
                    }
                    piv.swap(p, j);
                    pivot_sign = -pivot_sign;
                }

                // Compute multipliers. A zero pivot leaves the column as
                // computed, marking the matrix singular in this column.
                let pivot = data[j * n + j];
                if pivot != T::zero() {
                    for i in j + 1..m {
                        data[i * n + j] = data[i * n + j] / pivot;
                    }
                }
            }
        }

        Self {
            lu,
            piv,
            pivot_sign,
        }
    }

    /// Number of rows of the factored matrix
    #[inline]
    pub fn nrows(&self) -> usize {
        self.lu.nrows()
    }

    /// Number of columns of the factored matrix
    #[inline]
    pub fn ncols(&self) -> usize {
        self.lu.ncols()
    }

    /// Is the factored matrix nonsingular?
    ///
    /// True iff every diagonal entry of U is nonzero. A wide matrix
    /// (m < n) is always reported singular since the trailing diagonal
    /// entries of its n×n U are structurally zero.
    pub fn is_nonsingular(&self) -> bool {
        let m = self.lu.nrows();
        let n = self.lu.ncols();
        (0..n).all(|j| j < m && self.lu.get(j, j) != T::zero())
    }

    /// Return the lower triangular factor L as a new m×n matrix
    ///
    /// Unit diagonal, sub-diagonal values from the factorization, zero
    /// above the diagonal.
    pub fn l(&self) -> DenseMatrix<T> {
        let m = self.lu.nrows();
        let n = self.lu.ncols();
        DenseMatrix::from_fn(m, n, |i, j| {
            if i > j {
                self.lu.get(i, j)
            } else if i == j {
                T::one()
            } else {
                T::zero()
            }
        })
    }

    /// Return the upper triangular factor U as a new n×n matrix
    ///
    /// Factorization values on and above the diagonal, zero below; rows
    /// beyond the storage row count (wide matrices) are zero.
    pub fn u(&self) -> DenseMatrix<T> {
        let m = self.lu.nrows();
        let n = self.lu.ncols();
        DenseMatrix::from_fn(n, n, |i, j| {
            if i <= j && i < m {
                self.lu.get(i, j)
            } else {
                T::zero()
            }
        })
    }

    /// Return a copy of the pivot permutation vector
    ///
    /// Entry i is the original row of A that occupies row i of the
    /// factor storage; always a permutation of `0..m`.
    pub fn pivot(&self) -> Vec<usize> {
        self.piv.clone()
    }

    /// Return the pivot permutation vector as element values
    pub fn pivot_values(&self) -> Vec<T> {
        self.piv.iter().map(|&p| T::from_f64(p as f64)).collect()
    }

    /// Determinant of the factored matrix
    ///
    /// Pivot sign times the product of U's diagonal entries. The product
    /// carries no overflow guard; very large or small determinants saturate
    /// to infinity or zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the matrix is not square.
    pub fn det(&self) -> Result<T> {
        let m = self.lu.nrows();
        let n = self.lu.ncols();
        if m != n {
            return Err(Error::dimension_mismatch(&[m, m], &[m, n]));
        }
        let mut d = T::from_f64(f64::from(self.pivot_sign));
        for j in 0..n {
            d = d * self.lu.get(j, j);
        }
        Ok(d)
    }

    /// Solve `A * X = B`, returning X so that `L * U * X = B[piv, :]`
    ///
    /// B may have any number of columns; each is solved independently via
    /// forward and back substitution after the pivot permutation is applied
    /// to B's rows. The result is a new matrix with no link to the
    /// factorization's internal storage.
    ///
    /// # Errors
    ///
    /// - [`Error::DimensionMismatch`] if `b.nrows()` differs from the
    ///   factored matrix's row count (checked before any computation)
    /// - [`Error::Singular`] if U has a zero diagonal entry; no partial
    ///   result is produced
    pub fn solve(&self, b: &impl MatrixView<T>) -> Result<DenseMatrix<T>> {
        let m = self.lu.nrows();
        let n = self.lu.ncols();
        if b.nrows() != m {
            return Err(Error::dimension_mismatch(
                &[m, b.ncols()],
                &[b.nrows(), b.ncols()],
            ));
        }
        if !self.is_nonsingular() {
            return Err(Error::Singular);
        }

        // Copy the right-hand side with pivoting, then solve in place
        let mut x = b.select_rows(&self.piv);
        let nx = x.ncols();
        solve::forward_substitute(self.lu.as_slice(), n, x.as_mut_slice(), nx);
        solve::back_substitute(self.lu.as_slice(), n, x.as_mut_slice(), nx);
        Ok(x)
    }

    /// Inverse of the factored matrix, solved column-by-column against the
    /// identity
    ///
    /// # Errors
    ///
    /// - [`Error::DimensionMismatch`] if the matrix is not square
    /// - [`Error::Singular`] if the matrix is singular
    pub fn inverse(&self) -> Result<DenseMatrix<T>> {
        let m = self.lu.nrows();
        let n = self.lu.ncols();
        if m != n {
            return Err(Error::dimension_mismatch(&[m, m], &[m, n]));
        }
        self.solve(&DenseMatrix::identity(m))
    }
}

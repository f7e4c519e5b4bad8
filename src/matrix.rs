//! Dense matrix storage and the read-only matrix view contract
//!
//! The decomposition engine consumes any [`MatrixView`] and copies it into
//! its own [`DenseMatrix`] working storage, so callers can hand in views
//! backed by arbitrary storage without the engine taking ownership of them.

use crate::element::Element;
use crate::error::{Error, Result};

/// Read access to an m×n numeric matrix.
///
/// This is the input contract of the decomposition engine: row/column
/// counts, element reads, and row-subset extraction with reordering (used
/// to apply a pivot permutation to a right-hand side).
pub trait MatrixView<T: Element> {
    /// Number of rows
    fn nrows(&self) -> usize;

    /// Number of columns
    fn ncols(&self) -> usize;

    /// Read the element at (`row`, `col`)
    ///
    /// # Panics
    ///
    /// Panics if `row >= nrows()` or `col >= ncols()`.
    fn get(&self, row: usize, col: usize) -> T;

    /// Copy the view into owned dense storage
    fn to_dense(&self) -> DenseMatrix<T> {
        DenseMatrix::from_fn(self.nrows(), self.ncols(), |i, j| self.get(i, j))
    }

    /// Extract the rows listed in `order`, in that order, as a new matrix
    ///
    /// Indices may repeat or omit rows; the result has `order.len()` rows.
    ///
    /// # Panics
    ///
    /// Panics if any index in `order` is out of bounds.
    fn select_rows(&self, order: &[usize]) -> DenseMatrix<T> {
        DenseMatrix::from_fn(order.len(), self.ncols(), |i, j| self.get(order[i], j))
    }
}

/// Dense matrix with row-major storage.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Element> DenseMatrix<T> {
    /// Create a matrix from a row-major slice of data
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal `rows * cols`.
    pub fn from_slice(data: &[T], rows: usize, cols: usize) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "DenseMatrix::from_slice: data length {} does not match {}x{}",
            data.len(),
            rows,
            cols
        );
        Self {
            data: data.to_vec(),
            rows,
            cols,
        }
    }

    /// Create a matrix by evaluating `f(row, col)` for every cell
    pub fn from_fn<F: FnMut(usize, usize) -> T>(rows: usize, cols: usize, mut f: F) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { data, rows, cols }
    }

    /// Create a matrix filled with zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// Create an n×n identity matrix
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Number of rows
    #[inline]
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Read the element at (`row`, `col`)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Write the element at (`row`, `col`)
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Borrow row `i` as a slice
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Borrow the full row-major storage
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutably borrow the full row-major storage
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Copy the storage into a flat row-major vector
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Matrix product `self * rhs`
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `self.ncols() != rhs.nrows()`.
    pub fn matmul(&self, rhs: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        if self.cols != rhs.rows {
            return Err(Error::dimension_mismatch(
                &[self.cols, rhs.cols],
                &[rhs.rows, rhs.cols],
            ));
        }
        let mut out = DenseMatrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let aik = self.data[i * self.cols + k];
                for j in 0..rhs.cols {
                    out.data[i * rhs.cols + j] =
                        out.data[i * rhs.cols + j] + aik * rhs.data[k * rhs.cols + j];
                }
            }
        }
        Ok(out)
    }
}

impl<T: Element> MatrixView<T> for DenseMatrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> T {
        DenseMatrix::get(self, row, col)
    }

    fn to_dense(&self) -> DenseMatrix<T> {
        self.clone()
    }
}

//! Fork-join execution of independent per-row updates
//!
//! The elimination step of the factorization updates a block of matrix rows
//! where every row can be processed independently: row i writes only to row
//! i's own storage and to its own scratch cell, and reads only data that was
//! finalized before the block was dispatched. [`for_each_row`] fans those
//! updates out across the Rayon worker pool and returns only after every row
//! has completed — a barrier, not fire-and-forget.
//!
//! Disjointness is structural: the storage is split into non-overlapping
//! row chunks and zipped with per-row scratch cells, so two tasks can never
//! alias a row or a cell. No completion order is guaranteed between rows.
//!
//! A panic inside any row task is rethrown on the calling thread once the
//! parallel call unwinds; it is never swallowed, and the caller's
//! factorization state is abandoned with it.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Parallelization threshold: skip Rayon below this many rows (overhead > benefit)
const PARALLEL_THRESHOLD: usize = 64;

/// Run `op(i, row, cell)` for every `row_len`-sized row of `data`, pairing
/// row i with `cells[i]`, across the worker pool.
///
/// Blocks until all rows complete. Falls back to a serial loop on the
/// calling thread for small row counts or when the `rayon` feature is
/// disabled; both paths apply `op` to identical inputs, so results do not
/// depend on which path ran.
///
/// # Panics
///
/// Panics if `data.len() != row_len * cells.len()`, or if `row_len` is zero
/// while `cells` is not empty, or propagates any panic raised by `op`.
pub fn for_each_row<T, F>(data: &mut [T], row_len: usize, cells: &mut [T], op: F)
where
    T: Send + Sync,
    F: Fn(usize, &mut [T], &mut T) + Send + Sync,
{
    assert_eq!(
        data.len(),
        row_len * cells.len(),
        "for_each_row: data length {} does not match {} rows of length {}",
        data.len(),
        cells.len(),
        row_len
    );
    if cells.is_empty() {
        return;
    }

    #[cfg(feature = "rayon")]
    if cells.len() >= PARALLEL_THRESHOLD {
        data.par_chunks_mut(row_len)
            .zip(cells.par_iter_mut())
            .enumerate()
            .for_each(|(i, (row, cell))| op(i, row, cell));
        return;
    }

    for (i, (row, cell)) in data.chunks_mut(row_len).zip(cells.iter_mut()).enumerate() {
        op(i, row, cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_row_visited_once_serial() {
        let mut data = vec![0.0f64; 5 * 3];
        let mut cells = vec![0.0f64; 5];
        for_each_row(&mut data, 3, &mut cells, |i, row, cell| {
            for v in row.iter_mut() {
                *v = *v + 1.0;
            }
            *cell = i as f64;
        });
        assert!(data.iter().all(|&v| v == 1.0));
        assert_eq!(cells, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_every_row_visited_once_parallel() {
        // Large enough to cross the threshold and take the Rayon path
        let rows = 500;
        let mut data = vec![0.0f64; rows * 4];
        let mut cells = vec![0.0f64; rows];
        for_each_row(&mut data, 4, &mut cells, |i, row, cell| {
            for (k, v) in row.iter_mut().enumerate() {
                *v = (i * 4 + k) as f64;
            }
            *cell = i as f64;
        });
        for i in 0..rows {
            assert_eq!(cells[i], i as f64);
            for k in 0..4 {
                assert_eq!(data[i * 4 + k], (i * 4 + k) as f64);
            }
        }
    }

    #[test]
    fn test_empty_range_is_noop() {
        let mut data: Vec<f64> = vec![];
        let mut cells: Vec<f64> = vec![];
        for_each_row(&mut data, 7, &mut cells, |_, _, _| {
            panic!("op must not run for an empty range");
        });
    }

    #[test]
    #[should_panic]
    fn test_worker_panic_propagates() {
        let rows = 200;
        let mut data = vec![0.0f64; rows];
        let mut cells = vec![0.0f64; rows];
        for_each_row(&mut data, 1, &mut cells, |i, _, _| {
            if i == 157 {
                panic!("worker fault");
            }
        });
    }
}

//! Dense row-major matrices.

use crate::error::{ComputeError, ComputeResult};

/// Rectangular matrix as a sequence of equal-length rows.
pub type Matrix = Vec<Vec<f64>>;

const TASK: &str = "matrix_multiply";

/// Rows and columns of `m`, rejecting empty and ragged matrices.
pub fn shape(m: &[Vec<f64>]) -> ComputeResult<(usize, usize)> {
    let rows = m.len();
    let cols = m.first().map(Vec::len).unwrap_or(0);
    if rows == 0 || cols == 0 {
        return Err(ComputeError::invalid(TASK, "matrix must be non-empty"));
    }
    if let Some((i, row)) = m.iter().enumerate().find(|(_, r)| r.len() != cols) {
        return Err(ComputeError::invalid(
            TASK,
            format!("row {} has length {}, expected {}", i, row.len(), cols),
        ));
    }
    Ok((rows, cols))
}

/// Standard matrix product: `result[i][j] = Σ_k a[i][k] * b[k][j]`.
pub fn matrix_multiply(a: &[Vec<f64>], b: &[Vec<f64>]) -> ComputeResult<Matrix> {
    let (rows_a, cols_a) = shape(a)?;
    let (rows_b, cols_b) = shape(b)?;
    if cols_a != rows_b {
        return Err(ComputeError::DimensionMismatch {
            left_cols: cols_a,
            right_rows: rows_b,
        });
    }

    let mut result = vec![vec![0.0; cols_b]; rows_a];
    for (out_row, a_row) in result.iter_mut().zip(a) {
        // i-k-j order keeps the inner loop walking contiguous rows of `b`.
        for (&a_ik, b_row) in a_row.iter().zip(b) {
            for (out, &b_kj) in out_row.iter_mut().zip(b_row) {
                *out += a_ik * b_kj;
            }
        }
    }
    Ok(result)
}

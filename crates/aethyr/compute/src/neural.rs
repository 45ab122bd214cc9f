//! Single stochastic dense layer.

use crate::error::{ComputeError, ComputeResult};
use rand::Rng;

/// `tanh(v · W + b)` for a square `W` and bias `b` drawn uniformly from `[0, 1)`.
///
/// `W` and `b` are redrawn from `rng` on every call and never retained.
/// Output length always equals input length.
pub fn neural_layer<R: Rng + ?Sized>(input: &[f64], rng: &mut R) -> ComputeResult<Vec<f64>> {
    if let Some(i) = input.iter().position(|v| !v.is_finite()) {
        return Err(ComputeError::invalid(
            "neural_simulation",
            format!("element {} is not a finite number", i),
        ));
    }

    let len = input.len();
    let weights: Vec<f64> = (0..len * len).map(|_| rng.gen::<f64>()).collect();
    let bias: Vec<f64> = (0..len).map(|_| rng.gen::<f64>()).collect();

    // weights is row-major: row i holds W[i][0..len].
    let mut pre = bias;
    for (&v_i, w_row) in input.iter().zip(weights.chunks_exact(len.max(1))) {
        for (acc, &w_ij) in pre.iter_mut().zip(w_row) {
            *acc += v_i * w_ij;
        }
    }
    Ok(pre.into_iter().map(f64::tanh).collect())
}

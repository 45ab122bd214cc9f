//! Integer routines: prime search and square-free counting.

use crate::error::{ComputeError, ComputeResult};

/// The n-th prime, 1-indexed (`nth_prime(1) == 2`).
///
/// Candidates are tested incrementally against the primes accepted so far,
/// stopping at the first prime whose square exceeds the candidate.
pub fn nth_prime(n: u64) -> ComputeResult<u64> {
    if n < 1 {
        return Err(ComputeError::invalid("nth_prime", "n must be >= 1"));
    }
    let target = usize::try_from(n)
        .map_err(|_| ComputeError::invalid("nth_prime", format!("n = {} is too large", n)))?;

    let mut primes: Vec<u64> = Vec::with_capacity(target.min(1 << 20));
    let mut candidate: u64 = 2;
    loop {
        let is_prime = primes
            .iter()
            .take_while(|&&p| p <= candidate / p)
            .all(|&p| candidate % p != 0);
        if is_prime {
            primes.push(candidate);
            if primes.len() == target {
                return Ok(candidate);
            }
        }
        candidate += 1;
    }
}

/// Whether `x` is divisible by no perfect square greater than 1.
/// 0 and 1 count as square-free.
pub fn is_square_free(x: u64) -> bool {
    let mut i: u64 = 2;
    while i <= x / i {
        if x % (i * i) == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Count of square-free integers in `[1, limit]`.
pub fn square_free_count(limit: u64) -> ComputeResult<u64> {
    if limit < 1 {
        return Err(ComputeError::invalid(
            "square_free_count",
            "limit must be >= 1",
        ));
    }
    Ok((1..=limit).filter(|&x| is_square_free(x)).count() as u64)
}

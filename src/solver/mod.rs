//! Ribbon-count solver

pub mod engine;
pub mod input;
pub mod types;

pub use types::SolverError;

use engine::CoverEngine;
use input::InputValidator;
use log::debug;

/// Computes the minimum number of ribbons needed to cover the range `[1..n]`.
///
/// Pure and deterministic: the same `n` always yields the same count, and the
/// count never decreases as `n` grows.
///
/// # Errors
/// * [`SolverError::InvalidInput`] if `n` is zero.
/// * [`SolverError::Overflow`] if the uncovered sum `n * (n + 1) / 2` does
///   not fit in `u64`.
pub fn solve(n: u64) -> Result<u64, SolverError> {
    InputValidator::validate(n)?;
    let count = CoverEngine::cover_count(n)?;
    debug!("Covered range [1..{}] with {} ribbons", n, count);
    Ok(count)
}

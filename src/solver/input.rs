//! Input validation

use super::types::SolverError;

/// Validator for range lengths
pub struct InputValidator;

impl InputValidator {
    /// Reject range lengths the greedy loop is not defined for.
    ///
    /// The loop bounds and the `n = 1` special case assume `n >= 1`, so zero
    /// is signaled to the caller instead of being given a convention.
    pub fn validate(n: u64) -> Result<(), SolverError> {
        if n == 0 {
            return Err(SolverError::InvalidInput(
                "Range length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

//! Minimum ribbon counts for covering a numeric range.
//!
//! The crate exposes a single entry point, [`solve`], which computes how many
//! ribbons a greedy subtraction scheme needs to cover the range `[1..N]`.
//! Candidate ribbon sizes start at `N + 1` and count down; each candidate is
//! either consumed against the uncovered sum or cut to finish the job.
//!
//! Reading inputs and printing results is left to callers; the library is the
//! bare computation.

pub mod solver;

pub use solver::SolverError;
pub use solver::solve;

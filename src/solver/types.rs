//! Error definitions

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
}

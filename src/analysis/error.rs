// Error types for the spike-frequency analysis core
//
// Two failure classes, mirrored by every public operation:
// - InvalidInput: malformed data (empty groups, non-finite values, bad duration)
// - DegenerateInput: well-formed data that cannot support a t-test

use thiserror::Error;

/// Errors for spike-frequency analysis operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Input data failed validation before any statistics ran
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Data was structurally valid but the t-test is undefined on it
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

use thiserror::Error;

/// Core error type shared across Fixtura crates.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller-supplied input failed a precondition check.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Convenience alias for results returned by Fixtura crates.
pub type Result<T> = std::result::Result<T, Error>;

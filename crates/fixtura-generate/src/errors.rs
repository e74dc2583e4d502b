use thiserror::Error;

/// Errors emitted by the generation facade.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Malformed caller input (bad count, bad range).
    #[error(transparent)]
    Validation(#[from] fixtura_core::Error),
    /// A bulk or dispatch call named a generator that is not registered.
    #[error("unknown generator '{0}'")]
    UnknownGenerator(String),
    /// The options object carried a value the generator cannot use.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

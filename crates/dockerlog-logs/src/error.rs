use thiserror::Error;

/// Errors raised while setting up or driving an extraction run
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A built-in pattern failed to compile
    #[error("invalid event pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Reading input or writing output failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

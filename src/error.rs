use thiserror::Error;

#[derive(Debug, Error)]
pub enum Cuid2Error {
    /// Configured identifier length cannot be produced by the generator
    #[error("Invalid cuid2 length: {0}")]
    InvalidLength(usize),

    /// Generator returned an identifier of the wrong width
    #[error("cuid2 generation failed: expected {expected} characters, got {actual}")]
    Generation { expected: usize, actual: usize },
}

/// Result type for identifier generation
pub type Result<T> = std::result::Result<T, Cuid2Error>;

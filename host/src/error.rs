use rlp_canon_lib::RlpError;

/// The standardized error returned by the host.
#[derive(thiserror::Error, Debug)]
pub enum HostError {
    /// For errors from the encoder, including unsupported input values.
    #[error("There was an encoding error: {0}")]
    Rlp(#[from] RlpError),

    /// For invalid command line or config arguments.
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    /// For I/O errors.
    #[error("There was a I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// For Serde errors.
    #[error("There was a deserialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A catch-all error for any other error type.
    #[error("There was an unexpected error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// A type alias for the standardized result type returned by the host.
pub type HostResult<T> = Result<T, HostError>;

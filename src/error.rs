//! Error types.

/// Error type for delivery-filter.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Config is invalid: {0}")]
    Config(#[from] serini::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Input ended early, expected {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("Invalid {what}: {token:?} is not an integer")]
    InvalidInteger { what: &'static str, token: String },
    #[error("Message count {declared} exceeds the configured maximum of {max}")]
    TooManyMessages { declared: usize, max: usize },
    #[error("Timestamp {current} at index {index} is earlier than the previous one ({previous})")]
    UnsortedTimestamps {
        index: usize,
        previous: i64,
        current: i64,
    },
}

//! Error types shared by every fallible operation in the crate.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Invalid layer list, learning rate, activation name or training setting.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A vector or matrix does not have the shape the network expects.
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    Dimension {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// A loss or activation went to NaN / infinity.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn dimension(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        Error::Dimension {
            context: context.into(),
            expected,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_error_names_context_and_sizes() {
        let err = Error::dimension("input vector", 3, 2);
        assert_eq!(
            err.to_string(),
            "dimension mismatch in input vector: expected 3, got 2"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}

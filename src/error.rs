use thiserror::Error;

/// Error type for storage-unit operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("division by zero")]
    DivisionByZero,
    #[error("invalid format pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
    #[error("invalid storage quantity: {0}")]
    InvalidQuantity(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        Error::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_quantity(msg: impl Into<String>) -> Self {
        Error::InvalidQuantity(msg.into())
    }

    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

/// Result type for storage-unit operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_error_names_pattern_and_reason() {
        let err = Error::invalid_pattern("0.0.0", "multiple decimal separators");
        assert_eq!(
            err.to_string(),
            "invalid format pattern '0.0.0': multiple decimal separators"
        );
    }

    #[test]
    fn test_division_by_zero_message() {
        assert_eq!(Error::DivisionByZero.to_string(), "division by zero");
    }
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Input is not a real calendar date written as `YYYY-MM-DD`
    #[error("invalid date format: {0:?}")]
    InvalidFormat(String),
}

/// Convenience type alias for Results with DateError
pub type Result<T> = std::result::Result<T, DateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DateError::InvalidFormat("2023-13-01".to_string());
        assert_eq!(err.to_string(), "invalid date format: \"2023-13-01\"");
    }

    #[test]
    fn test_error_keeps_raw_input() {
        let err = DateError::InvalidFormat(" 2023-01-01".to_string());
        let DateError::InvalidFormat(raw) = err;
        assert_eq!(raw, " 2023-01-01");
    }
}

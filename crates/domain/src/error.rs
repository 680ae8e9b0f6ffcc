//! Unified error type for the domain layer.
//!
//! Nothing in this core is fatal to the host: errors surface as log lines
//! and a negative verdict, never as a panic. The error type exists for the
//! persistence boundary, where malformed save data still has to be reported.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Parse error (for value objects and persisted keys)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Persisted data could not be read back
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DomainError {
    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a serialization error
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("bad applied key: 7");
        assert!(matches!(err, DomainError::Parse(_)));
        assert_eq!(err.to_string(), "Parse error: bad applied key: 7");
    }
}

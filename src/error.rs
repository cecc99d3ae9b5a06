//! Custom error types for BudgetPro
//!
//! This module defines the error hierarchy for the ledger and its front end
//! using thiserror for ergonomic error definitions.

use thiserror::Error;

/// The main error type for BudgetPro operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Amount was non-numeric, zero, negative, or non-finite
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Description (or income source) was blank after trimming
    #[error("Description cannot be empty")]
    EmptyDescription,

    /// Category key is not part of the configured categories
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// A replay row could not be applied
    #[error("Import error on line {line}: {reason}")]
    Import { line: u64, reason: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create an "invalid amount" error from anything displayable
    pub fn invalid_amount(value: impl std::fmt::Display) -> Self {
        Self::InvalidAmount(value.to_string())
    }

    /// Create an "unknown category" error
    pub fn unknown_category(key: impl Into<String>) -> Self {
        Self::UnknownCategory(key.into())
    }

    /// Check if this is a caller-correctable input error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_) | Self::EmptyDescription | Self::UnknownCategory(_)
        )
    }

    /// Check if this is an "unknown category" error
    pub fn is_unknown_category(&self) -> bool {
        matches!(self, Self::UnknownCategory(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for LedgerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        Self::Import {
            line,
            reason: err.to_string(),
        }
    }
}

/// Result type alias for BudgetPro operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_unknown_category_error() {
        let err = LedgerError::unknown_category("groceries");
        assert_eq!(err.to_string(), "Unknown category: groceries");
        assert!(err.is_unknown_category());
        assert!(err.is_validation());
    }

    #[test]
    fn test_validation_kinds() {
        assert!(LedgerError::EmptyDescription.is_validation());
        assert!(LedgerError::invalid_amount("NaN").is_validation());
        assert!(!LedgerError::Io("disk".into()).is_validation());
    }

    #[test]
    fn test_import_error_display() {
        let err = LedgerError::Import {
            line: 3,
            reason: "Unknown category: pets".into(),
        };
        assert_eq!(
            err.to_string(),
            "Import error on line 3: Unknown category: pets"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LedgerError = io_err.into();
        assert!(matches!(err, LedgerError::Io(_)));
    }
}

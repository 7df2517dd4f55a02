//! Error type for exceptional calls

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// Expected outcomes (full table, plan limit hit, unknown table) are not
/// errors; they come back as result values. `AppError` covers the rest:
/// unparsable plan names, unknown guest ids passed to mutating helpers,
/// bad configuration.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create a guest not found error
    pub fn guest_not_found(guest_id: impl Into<String>) -> Self {
        let id = guest_id.into();
        Self::with_message(ErrorCode::GuestNotFound, format!("Guest {} not found", id))
            .with_detail("guest_id", id)
    }

    /// Create an unknown plan error
    pub fn unknown_plan(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self::with_message(ErrorCode::PlanUnknown, format!("Unknown plan: {:?}", raw))
            .with_detail("plan", raw)
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigError, msg)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::TableNotFound);
        assert_eq!(err.code, ErrorCode::TableNotFound);
        assert_eq!(err.message, "Table not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::new(ErrorCode::DuplicateTableNumber)
            .with_detail("table_number", 4)
            .with_detail("count", 2);

        assert_eq!(err.code, ErrorCode::DuplicateTableNumber);
        let details = err.details.unwrap();
        assert_eq!(details.get("table_number").unwrap(), 4);
        assert_eq!(details.get("count").unwrap(), 2);
    }

    #[test]
    fn test_app_error_convenience_constructors() {
        let err = AppError::guest_not_found("g-42");
        assert_eq!(err.code, ErrorCode::GuestNotFound);
        assert_eq!(err.message, "Guest g-42 not found");
        assert_eq!(err.details.as_ref().unwrap().get("guest_id").unwrap(), "g-42");

        let err = AppError::unknown_plan("GOLD");
        assert_eq!(err.code, ErrorCode::PlanUnknown);
        assert!(err.message.contains("GOLD"));

        let err = AppError::config("DEFAULT_TABLE_CAPACITY must be positive");
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::TableFull, "Table 3 is full");
        assert_eq!(format!("{}", err), "Table 3 is full");
    }
}

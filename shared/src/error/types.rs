//! Application error type

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// Raised locally (form validation, configuration) before anything reaches
/// the network. Carries:
/// - a standardized [`ErrorCode`]
/// - a human-readable message
/// - optional structured details (missing field names and similar)
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

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Names of the fields listed under the `fields` detail, if any
    pub fn fields(&self) -> Vec<String> {
        self.details
            .as_ref()
            .and_then(|d| d.get("fields"))
            .and_then(Value::as_array)
            .map(|arr| {
                arr.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    // ==================== Convenience constructors ====================

    /// Create a missing-required-fields error listing every empty field
    pub fn required_fields(fields: &[&str]) -> Self {
        let names: Vec<Value> = fields.iter().map(|f| Value::from(*f)).collect();
        Self::new(ErrorCode::RequiredField).with_detail("fields", names)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::NotFound);
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Resource not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::new(ErrorCode::GeoScopeIncomplete)
            .with_detail("field", "name")
            .with_detail("reason", "required");

        assert_eq!(err.code, ErrorCode::GeoScopeIncomplete);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "name");
        assert_eq!(details.get("reason").unwrap(), "required");
    }

    #[test]
    fn test_required_fields_lists_names() {
        let err = AppError::required_fields(&["country", "name"]);
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.fields(), vec!["country".to_string(), "name".to_string()]);
        assert_eq!(
            err.to_string(),
            "Please fill all the required fields before submitting."
        );
    }
}

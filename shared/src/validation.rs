//! Required-field checks for form payloads
//!
//! Presence is the only rule enforced before a payload is sent; everything
//! else is the backend's call.

use crate::error::{AppError, AppResult};

/// Collects the names of empty required fields
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text must contain something other than whitespace
    pub fn text(mut self, field: &'static str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.missing.push(field);
        }
        self
    }

    /// A foreign key must be chosen
    pub fn id(mut self, field: &'static str, value: Option<i64>) -> Self {
        if value.is_none() {
            self.missing.push(field);
        }
        self
    }

    /// Only checked when `when` holds (e.g. password on create)
    pub fn text_if(self, when: bool, field: &'static str, value: Option<&str>) -> Self {
        if when {
            self.text(field, value.unwrap_or_default())
        } else {
            self
        }
    }

    pub fn missing(&self) -> &[&'static str] {
        &self.missing
    }

    pub fn finish(self) -> AppResult<()> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::required_fields(&self.missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_all_present() {
        let result = RequiredFields::new()
            .text("name", "North Zone")
            .id("country", Some(1))
            .finish();
        assert!(result.is_ok());
    }

    #[test]
    fn test_blank_text_and_missing_id_are_reported_in_order() {
        let err = RequiredFields::new()
            .id("country", None)
            .text("name", "   ")
            .id("state", Some(2))
            .finish()
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.fields(), vec!["country", "name"]);
    }

    #[test]
    fn test_conditional_text() {
        let checks = RequiredFields::new()
            .text_if(false, "password", None)
            .text_if(true, "email", None);
        assert_eq!(checks.missing(), ["email"]);
    }
}

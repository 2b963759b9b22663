//! What a view hands back to its host: notices, navigation and
//! confirmation prompts

use serde::Serialize;
use shared::error::{AppError, ErrorCode};
use shared::resource::ResourceKind;
use std::fmt;
use std::time::Duration;

/// How long a success notice stays up
pub const SUCCESS_DISMISS: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// A user-facing notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// `Some` for transient notices
    #[serde(skip)]
    pub auto_dismiss: Option<Duration>,
}

impl Notice {
    /// Transient success notice
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            text: None,
            auto_dismiss: Some(SUCCESS_DISMISS),
        }
    }

    pub fn warning(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: title.into(),
            text: Some(text.into()),
            auto_dismiss: None,
        }
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            text: Some(text.into()),
            auto_dismiss: None,
        }
    }

    /// Warning for a payload that failed local checks
    pub fn from_validation(err: &AppError) -> Self {
        let title = match err.code {
            ErrorCode::RequiredField => "Missing Fields",
            ErrorCode::GeoScopeIncomplete => "Geography Incomplete",
            _ => "Invalid Input",
        };
        let fields = err.fields();
        let text = if err.code == ErrorCode::RequiredField && !fields.is_empty() {
            format!("{}\nMissing: {}", err.message, fields.join(", "))
        } else {
            err.message.clone()
        };
        Self::warning(title, text)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{}: {}", self.title, text),
            None => f.write_str(&self.title),
        }
    }
}

/// Navigation target inside the console
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Route(String);

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn list(kind: ResourceKind) -> Self {
        Self::new(kind.list_route())
    }

    pub fn new_form(kind: ResourceKind) -> Self {
        Self::new(kind.new_route())
    }

    pub fn edit_form(kind: ResourceKind, id: i64) -> Self {
        Self::new(kind.edit_route(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Blocking yes/no prompt before destructive actions
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_notice_lists_fields() {
        let notice = Notice::from_validation(&AppError::required_fields(&["country", "name"]));
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.title, "Missing Fields");
        assert_eq!(
            notice.text.as_deref(),
            Some("Please fill all the required fields before submitting.\nMissing: country, name")
        );
        assert_eq!(notice.auto_dismiss, None);
    }

    #[test]
    fn test_geography_notice() {
        let notice = Notice::from_validation(&AppError::new(ErrorCode::GeoScopeIncomplete));
        assert_eq!(notice.title, "Geography Incomplete");
        assert_eq!(notice.text.as_deref(), Some("Select City (and Zone if applicable)."));
    }

    #[test]
    fn test_success_auto_dismisses() {
        let notice = Notice::success("Added successfully!");
        assert_eq!(notice.auto_dismiss, Some(Duration::from_millis(1500)));
        assert_eq!(notice.to_string(), "Added successfully!");
    }

    #[test]
    fn test_routes_and_closure_confirm() {
        assert_eq!(Route::list(ResourceKind::Zone).as_str(), "/masters/zones");
        assert_eq!(
            Route::edit_form(ResourceKind::Ward, 3).to_string(),
            "/masters/wards/3/edit"
        );
        let always = |_: &str| true;
        assert!(always.confirm("Delete this Zone?"));
    }
}

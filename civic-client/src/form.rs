//! Create / edit form controller
//!
//! One controller serves every resource: local required-field checks, POST
//! or PUT depending on the mode, then a notice and a route back to the list.

use crate::api::AdminApi;
use crate::error::ClientError;
use crate::http::HttpClient;
use crate::view::{Notice, Route};
use shared::resource::{FormMode, Resource, ResourceKind, Validate};

pub const SAVE_FAILED_TITLE: &str = "Save failed";
pub const SAVE_FALLBACK_TEXT: &str = "Something went wrong while saving.";
pub const LOAD_FALLBACK_TEXT: &str = "Something went wrong!";

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Persisted; show the notice and go to the list
    Saved { notice: Notice, navigate_to: Route },
    /// Blocked before any request was sent
    Rejected(Notice),
    /// The backend refused or the request failed
    Failed(Notice),
}

impl SubmitOutcome {
    pub fn notice(&self) -> &Notice {
        match self {
            Self::Saved { notice, .. } | Self::Rejected(notice) | Self::Failed(notice) => notice,
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }
}

/// Form state for one resource
#[derive(Debug, Clone)]
pub struct ResourceForm<R: Resource> {
    mode: FormMode,
    pub payload: R::Payload,
}

impl<R: Resource> ResourceForm<R> {
    /// Blank form (create) or placeholder awaiting [`load`](Self::load) (edit)
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            payload: R::Payload::default(),
        }
    }

    pub fn with_payload(mode: FormMode, payload: R::Payload) -> Self {
        Self { mode, payload }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// "Add Zone" / "Edit Zone"
    pub fn title(&self) -> String {
        let verb = if self.mode.is_edit() { "Edit" } else { "Add" };
        format!("{} {}", verb, R::KIND.label())
    }

    /// Fetch the stored record in edit mode and copy it into the payload
    ///
    /// Returns the record so the caller can pre-populate dependent selects.
    pub async fn load<C: HttpClient>(&mut self, api: &AdminApi<C>) -> Result<Option<R>, Notice> {
        let FormMode::Edit(id) = self.mode else {
            return Ok(None);
        };
        match api.get::<R>(id).await {
            Ok(record) => {
                self.payload = record.to_payload();
                Ok(Some(record))
            }
            Err(e) => {
                tracing::error!(
                    kind = %R::KIND,
                    id,
                    code = %e.code(),
                    category = e.code().category().name(),
                    error = %e,
                    "failed to load record"
                );
                Err(Notice::error(
                    format!("Failed to load {}", R::KIND.label().to_lowercase()),
                    e.detail().unwrap_or_else(|| LOAD_FALLBACK_TEXT.to_string()),
                ))
            }
        }
    }

    /// Validate locally, then POST (create) or PUT (edit)
    pub async fn submit<C: HttpClient>(&self, api: &AdminApi<C>) -> SubmitOutcome {
        if let Err(err) = self.payload.validate(self.mode) {
            tracing::debug!(kind = %R::KIND, fields = ?err.fields(), "submit blocked");
            return SubmitOutcome::Rejected(Notice::from_validation(&err));
        }

        let (result, done) = match self.mode {
            FormMode::Create => (api.create::<R>(&self.payload).await, "Added successfully!"),
            FormMode::Edit(id) => (
                api.update::<R>(id, &self.payload).await,
                "Updated successfully!",
            ),
        };

        match result {
            Ok(_) => {
                tracing::info!(kind = %R::KIND, mode = ?self.mode, "saved");
                SubmitOutcome::Saved {
                    notice: Notice::success(done),
                    navigate_to: Route::list(R::KIND),
                }
            }
            Err(e) => {
                tracing::error!(
                    kind = %R::KIND,
                    code = %e.code(),
                    category = e.code().category().name(),
                    error = %e,
                    "failed to save"
                );
                SubmitOutcome::Failed(save_failure_notice(R::KIND, &e))
            }
        }
    }
}

// ========== Duplicate detection ==========
//
// The backend has no dedicated duplicate error; uniqueness violations are
// recognized by their wording. Brittle: a reworded server message falls
// through to the generic "Save failed" notice.

/// Substrings (lowercase) that mark a uniqueness violation
const DUPLICATE_MARKERS: [&str; 3] = ["must make a unique set", "already exists", "duplicate"];

/// Resource-specific wording, first match wins
const DUPLICATE_RULES: &[(ResourceKind, &str, &str)] = &[
    (
        ResourceKind::Zone,
        "city, name must make a unique set",
        "Zone name already exists for the selected city.",
    ),
    (
        ResourceKind::Zone,
        "state, name must make a unique set",
        "Zone name already exists for the selected state.",
    ),
    (
        ResourceKind::Ward,
        "",
        "Ward name already exists in the selected scope.",
    ),
    (ResourceKind::UserType, "", "User type name already exists!"),
    (ResourceKind::User, "username", "Username already exists!"),
];

/// Warning text when `text` reads like a uniqueness violation for `kind`
pub fn duplicate_warning(kind: ResourceKind, text: &str) -> Option<Notice> {
    let lower = text.to_lowercase();
    if !DUPLICATE_MARKERS.iter().any(|m| lower.contains(m)) {
        return None;
    }
    let message = DUPLICATE_RULES
        .iter()
        .find(|(k, marker, _)| *k == kind && lower.contains(marker))
        .map(|(_, _, message)| (*message).to_string())
        .unwrap_or_else(|| format!("{} already exists.", kind.label()));
    Some(Notice::warning(format!("Duplicate {}", kind.label()), message))
}

/// Notice for a failed POST/PUT
pub fn save_failure_notice(kind: ResourceKind, err: &ClientError) -> Notice {
    match err.display_text() {
        Some(text) => duplicate_warning(kind, &text)
            .unwrap_or_else(|| Notice::error(SAVE_FAILED_TITLE, text)),
        None => Notice::error(SAVE_FAILED_TITLE, SAVE_FALLBACK_TEXT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::NoticeLevel;
    use http::StatusCode;

    #[test]
    fn test_zone_duplicate_wording_depends_on_scope() {
        let by_city = duplicate_warning(
            ResourceKind::Zone,
            "non_field_errors: The fields city, name must make a unique set.",
        )
        .unwrap();
        assert_eq!(by_city.title, "Duplicate Zone");
        assert_eq!(
            by_city.text.as_deref(),
            Some("Zone name already exists for the selected city.")
        );

        let by_state = duplicate_warning(
            ResourceKind::Zone,
            "non_field_errors: The fields state, name must make a unique set.",
        )
        .unwrap();
        assert_eq!(
            by_state.text.as_deref(),
            Some("Zone name already exists for the selected state.")
        );
    }

    #[test]
    fn test_generic_duplicate_and_non_duplicate() {
        let notice = duplicate_warning(ResourceKind::Fuel, "fuel_type: DUPLICATE entry").unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.text.as_deref(), Some("Fuel already exists."));

        assert!(duplicate_warning(ResourceKind::Fuel, "name: may not be blank").is_none());
    }

    #[test]
    fn test_save_failure_notice_fallbacks() {
        let err = ClientError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"name": ["may not be blank"], "city": ["required"]}"#,
        );
        let notice = save_failure_notice(ResourceKind::Zone, &err);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.title, "Save failed");
        assert_eq!(notice.text.as_deref(), Some("name: may not be blank\ncity: required"));

        let err = ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "<html></html>");
        let notice = save_failure_notice(ResourceKind::Zone, &err);
        assert_eq!(notice.text.as_deref(), Some(SAVE_FALLBACK_TEXT));
    }
}

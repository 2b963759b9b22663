//! List view with soft-delete

use crate::api::AdminApi;
use crate::http::HttpClient;
use crate::view::{Confirm, Notice, Route};
use shared::resource::Resource;

/// Outcome of a delete request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined; nothing was sent
    Cancelled,
    /// The backend accepted and the list was re-fetched
    Deleted(Notice),
    Failed(Notice),
}

/// Records of one resource as shown in its list page
#[derive(Debug, Clone)]
pub struct ListView<R: Resource> {
    records: Vec<R>,
    loading: bool,
}

impl<R: Resource> Default for ListView<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> ListView<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            loading: false,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the list with a fresh fetch, ordered by id
    ///
    /// A failed fetch is logged and leaves the list empty.
    pub async fn refresh<C: HttpClient>(&mut self, api: &AdminApi<C>) {
        self.loading = true;
        self.records = match api.list::<R>().await {
            Ok(mut records) => {
                records.sort_by_key(|r| r.id());
                records
            }
            Err(e) => {
                tracing::warn!(kind = %R::KIND, error = %e, "failed to fetch list");
                Vec::new()
            }
        };
        self.loading = false;
    }

    /// Confirm, DELETE, then re-fetch; no optimistic removal
    pub async fn delete<C: HttpClient>(
        &mut self,
        api: &AdminApi<C>,
        id: i64,
        confirm: &dyn Confirm,
    ) -> DeleteOutcome {
        let prompt = format!("Delete this {}?", R::KIND.label().to_lowercase());
        if !confirm.confirm(&prompt) {
            return DeleteOutcome::Cancelled;
        }

        match api.delete(R::KIND, id).await {
            Ok(()) => {
                tracing::info!(kind = %R::KIND, id, "deleted");
                self.refresh(api).await;
                DeleteOutcome::Deleted(Notice::success("Deleted successfully!"))
            }
            Err(e) => {
                tracing::error!(
                    kind = %R::KIND,
                    id,
                    code = %e.code(),
                    category = e.code().category().name(),
                    error = %e,
                    "failed to delete"
                );
                let text = e
                    .display_text()
                    .unwrap_or_else(|| "Something went wrong while deleting.".to_string());
                DeleteOutcome::Failed(Notice::error("Delete failed", text))
            }
        }
    }

    pub fn new_route(&self) -> Route {
        Route::new_form(R::KIND)
    }

    pub fn edit_route(&self, id: i64) -> Route {
        Route::edit_form(R::KIND, id)
    }

    /// Records that may be offered in dependent dropdowns
    pub fn active(&self) -> impl Iterator<Item = &R> {
        self.records.iter().filter(|r| r.is_selectable())
    }
}

//! List response envelope
//!
//! A list GET may answer with a bare array or a paginated page:
//! ```json
//! {
//!     "count": 42,
//!     "next": "http://host/api/zones/?page=2",
//!     "previous": null,
//!     "results": [ ... ]
//! }
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Plain(Vec<T>),
    Paginated(Page<T>),
}

/// One page of a paginated list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> ListEnvelope<T> {
    /// Records in response order
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Plain(items) => items,
            Self::Paginated(page) => page.results,
        }
    }

    /// Whether the server holds more records than this response carries
    pub fn has_more(&self) -> bool {
        matches!(self, Self::Paginated(page) if page.next.is_some())
    }
}

//! Civic Client - REST client and view logic for the civic admin console
//!
//! Talks to the masters backend through the [`HttpClient`] seam and carries
//! the behavior of the console pages: cascading geographic selects, form
//! submission, list views with soft-delete and collection monitoring.

pub mod api;
pub mod cascade;
pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod listing;
pub mod monitor;
pub mod telemetry;
pub mod view;

pub use api::AdminApi;
pub use cascade::CascadingSelector;
pub use config::{ClientConfig, TelemetryConfig};
pub use error::{ClientError, ClientResult};
pub use form::{ResourceForm, SubmitOutcome};
pub use http::{HttpClient, NetworkHttpClient};
pub use listing::{DeleteOutcome, ListView};
pub use monitor::{CollectionFilter, CollectionMonitor, CollectionSummary, HouseholdStatus};
pub use telemetry::TelemetryClient;
pub use view::{Confirm, Notice, NoticeLevel, Route};

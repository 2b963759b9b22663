//! Shared types for the civic admin console
//!
//! Record and payload types for every master resource, the resource
//! catalogue, the geographic hierarchy, error codes and list envelopes.

pub mod error;
pub mod hierarchy;
pub mod models;
pub mod resource;
pub mod response;
pub mod validation;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode, FieldErrors};
pub use hierarchy::{GeoLevel, GeoNode, GeoPath, HasGeoPath, SelectOption};
pub use http;
pub use resource::{FormMode, Resource, ResourceKind, Validate};
pub use response::ListEnvelope;
pub use serde::{Deserialize, Serialize};

//! Unified error system for the civic admin console
//!
//! - [`ErrorCode`]: standardized error codes
//! - [`ErrorCategory`]: classification of errors by domain
//! - [`AppError`]: rich local error with code, message and details
//! - [`FieldErrors`]: field-level errors sent back by the backend
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Geography master errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::required_fields(&["name", "country"]);
//! assert_eq!(err.code, ErrorCode::RequiredField);
//! assert_eq!(err.fields(), vec!["name", "country"]);
//! ```

mod category;
mod codes;
mod field;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use field::{DETAIL, FieldErrors, NON_FIELD_ERRORS};
pub use types::{AppError, AppResult};

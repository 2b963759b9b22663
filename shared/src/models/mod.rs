//! Data models
//!
//! Record types mirror what the masters backend returns; payload types
//! mirror what it accepts on POST/PUT. All IDs are `i64`.
//! Records tolerate missing optional fields so list endpoints that omit
//! derived `*_name` columns still decode.

pub mod city;
pub mod continent;
pub mod country;
pub mod customer;
pub mod district;
pub mod fuel;
pub mod property;
pub mod state;
pub mod telemetry;
pub mod user;
pub mod vehicle_type;
pub mod ward;
pub mod waste_collection;
pub mod zone;

// Re-exports
pub use city::*;
pub use continent::*;
pub use country::*;
pub use customer::*;
pub use district::*;
pub use fuel::*;
pub use property::*;
pub use state::*;
pub use telemetry::*;
pub use user::*;
pub use vehicle_type::*;
pub use ward::*;
pub use waste_collection::*;
pub use zone::*;

use serde::{Deserialize, Deserializer};

pub(crate) fn default_true() -> bool {
    true
}

/// Accepts `1.5`, `"1.50"`, `null` or a missing field (decimal columns are
/// often serialized as strings)
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
        Null(()),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) if s.trim().is_empty() => Ok(0.0),
        NumberOrString::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
        NumberOrString::Null(()) => Ok(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Quantity {
        #[serde(default, deserialize_with = "lenient_f64")]
        value: f64,
    }

    #[test]
    fn test_lenient_f64_accepts_number_string_and_null() {
        let q: Quantity = serde_json::from_str(r#"{"value": 2.5}"#).unwrap();
        assert_eq!(q.value, 2.5);
        let q: Quantity = serde_json::from_str(r#"{"value": "3.25"}"#).unwrap();
        assert_eq!(q.value, 3.25);
        let q: Quantity = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(q.value, 0.0);
        let q: Quantity = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(q.value, 0.0);
        assert!(serde_json::from_str::<Quantity>(r#"{"value": "abc"}"#).is_err());
    }
}

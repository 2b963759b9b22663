//! Waste Collection Model
//!
//! `total_quantity` is derived: the client always sends wet + dry + mixed
//! computed at serialization time and ignores any total it is given.

use crate::error::AppResult;
use crate::resource::{FormMode, Resource, ResourceKind, Validate};
use crate::validation::RequiredFields;
use chrono::{NaiveDate, NaiveTime};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// One collection event at a customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasteCollection {
    pub id: i64,
    #[serde(default)]
    pub unique_id: Option<String>,
    #[serde(default)]
    pub customer: Option<i64>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub zone_name: Option<String>,
    #[serde(default)]
    pub city_name: Option<String>,
    #[serde(default, deserialize_with = "super::lenient_f64")]
    pub wet_waste: f64,
    #[serde(default, deserialize_with = "super::lenient_f64")]
    pub dry_waste: f64,
    #[serde(default, deserialize_with = "super::lenient_f64")]
    pub mixed_waste: f64,
    #[serde(default, deserialize_with = "super::lenient_f64")]
    pub total_quantity: f64,
    #[serde(default)]
    pub collection_date: Option<NaiveDate>,
    #[serde(default)]
    pub collection_time: Option<NaiveTime>,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_deleted: bool,
}

/// Create / update waste collection payload
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WasteCollectionPayload {
    pub customer: Option<i64>,
    #[serde(deserialize_with = "super::lenient_f64")]
    pub wet_waste: f64,
    #[serde(deserialize_with = "super::lenient_f64")]
    pub dry_waste: f64,
    #[serde(deserialize_with = "super::lenient_f64")]
    pub mixed_waste: f64,
}

impl WasteCollectionPayload {
    pub fn total_quantity(&self) -> f64 {
        self.wet_waste + self.dry_waste + self.mixed_waste
    }
}

impl Serialize for WasteCollectionPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("WasteCollectionPayload", 5)?;
        s.serialize_field("customer", &self.customer)?;
        s.serialize_field("wet_waste", &self.wet_waste)?;
        s.serialize_field("dry_waste", &self.dry_waste)?;
        s.serialize_field("mixed_waste", &self.mixed_waste)?;
        s.serialize_field("total_quantity", &self.total_quantity())?;
        s.end()
    }
}

impl Validate for WasteCollectionPayload {
    fn validate(&self, _mode: FormMode) -> AppResult<()> {
        RequiredFields::new()
            .id("customer", self.customer)
            .finish()
    }
}

impl Resource for WasteCollection {
    type Payload = WasteCollectionPayload;
    const KIND: ResourceKind = ResourceKind::WasteCollection;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.unique_id
            .clone()
            .or_else(|| self.customer_name.clone())
            .unwrap_or_else(|| format!("#{}", self.id))
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn is_selectable(&self) -> bool {
        self.is_active && !self.is_deleted
    }

    fn to_payload(&self) -> WasteCollectionPayload {
        WasteCollectionPayload {
            customer: self.customer,
            wet_waste: self.wet_waste,
            dry_waste: self.dry_waste,
            mixed_waste: self.mixed_waste,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_recomputed_on_send() {
        let payload: WasteCollectionPayload = serde_json::from_str(
            r#"{"customer": 3, "wet_waste": 1.5, "dry_waste": "2", "total_quantity": 99}"#,
        )
        .unwrap();
        assert_eq!(payload.mixed_waste, 0.0);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["total_quantity"], 3.5);
        assert_eq!(json["customer"], 3);
    }

    #[test]
    fn test_record_decodes_decimal_strings_and_dates() {
        let record: WasteCollection = serde_json::from_str(
            r#"{
                "id": 8,
                "customer": 3,
                "customer_name": "R. Kumar",
                "wet_waste": "1.25",
                "dry_waste": 2,
                "mixed_waste": null,
                "total_quantity": "3.25",
                "collection_date": "2025-03-14",
                "collection_time": "09:30:00"
            }"#,
        )
        .unwrap();
        assert_eq!(record.wet_waste, 1.25);
        assert_eq!(record.mixed_waste, 0.0);
        assert_eq!(
            record.collection_date,
            NaiveDate::from_ymd_opt(2025, 3, 14)
        );
        assert_eq!(record.to_payload().total_quantity(), 3.25);
    }

    #[test]
    fn test_customer_required() {
        assert!(
            WasteCollectionPayload::default()
                .validate(FormMode::Create)
                .is_err()
        );
    }
}

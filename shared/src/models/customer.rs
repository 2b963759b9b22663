//! Customer Model

use crate::error::AppResult;
use crate::hierarchy::{GeoPath, HasGeoPath};
use crate::resource::{FormMode, Resource, ResourceKind, Validate};
use crate::validation::RequiredFields;
use serde::{Deserialize, Serialize};

/// Customer (household or establishment served by collection)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    #[serde(default)]
    pub unique_id: Option<String>,
    pub customer_name: String,
    #[serde(default)]
    pub contact_no: Option<String>,
    #[serde(default)]
    pub building_no: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub pincode: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default)]
    pub id_proof_type: Option<String>,
    #[serde(default)]
    pub id_no: Option<String>,

    // Foreign keys
    #[serde(default)]
    pub country: Option<i64>,
    #[serde(default)]
    pub state: Option<i64>,
    #[serde(default)]
    pub district: Option<i64>,
    #[serde(default)]
    pub city: Option<i64>,
    #[serde(default)]
    pub zone: Option<i64>,
    #[serde(default)]
    pub ward: Option<i64>,
    #[serde(default)]
    pub property: Option<i64>,
    #[serde(default)]
    pub sub_property: Option<i64>,

    // Derived names
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub state_name: Option<String>,
    #[serde(default)]
    pub district_name: Option<String>,
    #[serde(default)]
    pub city_name: Option<String>,
    #[serde(default)]
    pub zone_name: Option<String>,
    #[serde(default)]
    pub ward_name: Option<String>,
    #[serde(default)]
    pub property_name: Option<String>,
    #[serde(default)]
    pub sub_property_name: Option<String>,

    #[serde(default = "super::default_true")]
    pub is_active: bool,
}

/// Create / update customer payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerPayload {
    pub customer_name: String,
    pub contact_no: String,
    pub building_no: String,
    pub street: String,
    pub area: String,
    pub pincode: String,
    pub latitude: String,
    pub longitude: String,
    pub id_proof_type: String,
    pub id_no: String,
    pub country: Option<i64>,
    pub state: Option<i64>,
    pub district: Option<i64>,
    pub city: Option<i64>,
    pub zone: Option<i64>,
    pub ward: Option<i64>,
    pub property: Option<i64>,
    pub sub_property: Option<i64>,
    pub is_active: bool,
}

impl Default for CustomerPayload {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            contact_no: String::new(),
            building_no: String::new(),
            street: String::new(),
            area: String::new(),
            pincode: String::new(),
            latitude: String::new(),
            longitude: String::new(),
            id_proof_type: String::new(),
            id_no: String::new(),
            country: None,
            state: None,
            district: None,
            city: None,
            zone: None,
            ward: None,
            property: None,
            sub_property: None,
            is_active: true,
        }
    }
}

impl Validate for CustomerPayload {
    fn validate(&self, _mode: FormMode) -> AppResult<()> {
        RequiredFields::new()
            .text("customer_name", &self.customer_name)
            .text("contact_no", &self.contact_no)
            .id("country", self.country)
            .id("state", self.state)
            .id("city", self.city)
            .id("zone", self.zone)
            .id("ward", self.ward)
            .id("property", self.property)
            .finish()
    }
}

impl Resource for Customer {
    type Payload = CustomerPayload;
    const KIND: ResourceKind = ResourceKind::Customer;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.customer_name.clone()
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn to_payload(&self) -> CustomerPayload {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        CustomerPayload {
            customer_name: self.customer_name.clone(),
            contact_no: text(&self.contact_no),
            building_no: text(&self.building_no),
            street: text(&self.street),
            area: text(&self.area),
            pincode: text(&self.pincode),
            latitude: text(&self.latitude),
            longitude: text(&self.longitude),
            id_proof_type: text(&self.id_proof_type),
            id_no: text(&self.id_no),
            country: self.country,
            state: self.state,
            district: self.district,
            city: self.city,
            zone: self.zone,
            ward: self.ward,
            property: self.property,
            sub_property: self.sub_property,
            is_active: self.is_active,
        }
    }
}

impl HasGeoPath for Customer {
    fn geo_path(&self) -> GeoPath {
        GeoPath {
            country: self.country,
            state: self.state,
            district: self.district,
            city: self.city,
            zone: self.zone,
            ward: self.ward,
            ..GeoPath::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_row_decodes_with_names_only() {
        let json = r#"{
            "id": 11,
            "unique_id": "CUST001",
            "customer_name": "R. Kumar",
            "contact_no": "9876543210",
            "ward_name": "Ward 4",
            "zone_name": "North",
            "pincode": "600001",
            "is_active": true
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.display_name(), "R. Kumar");
        assert_eq!(customer.ward, None);
        assert_eq!(customer.ward_name.as_deref(), Some("Ward 4"));
        assert_eq!(customer.to_payload().pincode, "600001");
    }

    #[test]
    fn test_required_fields_cover_geography_and_property() {
        let err = CustomerPayload {
            customer_name: "A".into(),
            contact_no: "1".into(),
            country: Some(1),
            state: Some(2),
            ..CustomerPayload::default()
        }
        .validate(FormMode::Create)
        .unwrap_err();
        assert_eq!(err.fields(), vec!["city", "zone", "ward", "property"]);
    }
}

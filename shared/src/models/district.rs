//! District Model

use crate::error::AppResult;
use crate::hierarchy::{GeoPath, HasGeoPath};
use crate::resource::{FormMode, Resource, ResourceKind, Validate};
use crate::validation::RequiredFields;
use serde::{Deserialize, Serialize};

/// District entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct District {
    pub id: i64,
    /// Backend business key, e.g. "DIST641f93995aa8062449"
    #[serde(default)]
    pub unique_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub country: Option<i64>,
    #[serde(default)]
    pub state: Option<i64>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub state_name: Option<String>,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
}

/// Create / update district payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistrictPayload {
    pub name: String,
    pub country: Option<i64>,
    pub state: Option<i64>,
    pub is_active: bool,
}

impl Default for DistrictPayload {
    fn default() -> Self {
        Self {
            name: String::new(),
            country: None,
            state: None,
            is_active: true,
        }
    }
}

impl Validate for DistrictPayload {
    fn validate(&self, _mode: FormMode) -> AppResult<()> {
        RequiredFields::new()
            .id("country", self.country)
            .id("state", self.state)
            .text("name", &self.name)
            .finish()
    }
}

impl Resource for District {
    type Payload = DistrictPayload;
    const KIND: ResourceKind = ResourceKind::District;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn to_payload(&self) -> DistrictPayload {
        DistrictPayload {
            name: self.name.clone(),
            country: self.country,
            state: self.state,
            is_active: self.is_active,
        }
    }
}

impl HasGeoPath for District {
    fn geo_path(&self) -> GeoPath {
        GeoPath {
            country: self.country,
            state: self.state,
            district: Some(self.id),
            ..GeoPath::default()
        }
    }
}

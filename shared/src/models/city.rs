//! City Model

use crate::error::AppResult;
use crate::hierarchy::{GeoPath, HasGeoPath};
use crate::resource::{FormMode, Resource, ResourceKind, Validate};
use crate::validation::RequiredFields;
use serde::{Deserialize, Serialize};

/// City entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub country: Option<i64>,
    #[serde(default)]
    pub state: Option<i64>,
    #[serde(default)]
    pub district: Option<i64>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub state_name: Option<String>,
    #[serde(default)]
    pub district_name: Option<String>,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
}

/// Create / update city payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityPayload {
    pub name: String,
    pub country: Option<i64>,
    pub state: Option<i64>,
    pub district: Option<i64>,
    pub is_active: bool,
}

impl Default for CityPayload {
    fn default() -> Self {
        Self {
            name: String::new(),
            country: None,
            state: None,
            district: None,
            is_active: true,
        }
    }
}

impl Validate for CityPayload {
    fn validate(&self, _mode: FormMode) -> AppResult<()> {
        RequiredFields::new()
            .id("country", self.country)
            .id("state", self.state)
            .id("district", self.district)
            .text("name", &self.name)
            .finish()
    }
}

impl Resource for City {
    type Payload = CityPayload;
    const KIND: ResourceKind = ResourceKind::City;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn to_payload(&self) -> CityPayload {
        CityPayload {
            name: self.name.clone(),
            country: self.country,
            state: self.state,
            district: self.district,
            is_active: self.is_active,
        }
    }
}

impl HasGeoPath for City {
    fn geo_path(&self) -> GeoPath {
        GeoPath {
            country: self.country,
            state: self.state,
            district: self.district,
            city: Some(self.id),
            ..GeoPath::default()
        }
    }
}

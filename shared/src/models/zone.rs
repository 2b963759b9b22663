//! Zone Model

use crate::error::AppResult;
use crate::hierarchy::{GeoPath, HasGeoPath};
use crate::resource::{FormMode, Resource, ResourceKind, Validate};
use crate::validation::RequiredFields;
use serde::{Deserialize, Serialize};

/// Zone entity (collection area inside a city)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub country: Option<i64>,
    #[serde(default)]
    pub state: Option<i64>,
    #[serde(default)]
    pub district: Option<i64>,
    #[serde(default)]
    pub city: Option<i64>,
    #[serde(default)]
    pub city_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_deleted: bool,
}

/// Create / update zone payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZonePayload {
    pub name: String,
    pub country: Option<i64>,
    pub state: Option<i64>,
    /// District is optional for zones
    pub district: Option<i64>,
    pub city: Option<i64>,
    pub description: String,
    pub is_active: bool,
}

impl Default for ZonePayload {
    fn default() -> Self {
        Self {
            name: String::new(),
            country: None,
            state: None,
            district: None,
            city: None,
            description: String::new(),
            is_active: true,
        }
    }
}

impl Validate for ZonePayload {
    fn validate(&self, _mode: FormMode) -> AppResult<()> {
        RequiredFields::new()
            .id("country", self.country)
            .id("state", self.state)
            .text("name", &self.name)
            .id("city", self.city)
            .finish()
    }
}

impl Resource for Zone {
    type Payload = ZonePayload;
    const KIND: ResourceKind = ResourceKind::Zone;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn is_selectable(&self) -> bool {
        self.is_active && !self.is_deleted
    }

    fn to_payload(&self) -> ZonePayload {
        ZonePayload {
            name: self.name.clone(),
            country: self.country,
            state: self.state,
            district: self.district,
            city: self.city,
            description: self.description.clone().unwrap_or_default(),
            is_active: self.is_active,
        }
    }
}

impl HasGeoPath for Zone {
    fn geo_path(&self) -> GeoPath {
        GeoPath {
            country: self.country,
            state: self.state,
            district: self.district,
            city: self.city,
            zone: Some(self.id),
            ..GeoPath::default()
        }
    }
}

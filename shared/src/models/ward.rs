//! Ward Model

use crate::error::{AppError, AppResult, ErrorCode};
use crate::hierarchy::{GeoPath, HasGeoPath};
use crate::resource::{FormMode, Resource, ResourceKind, Validate};
use crate::validation::RequiredFields;
use serde::{Deserialize, Serialize};

/// Ward entity, leaf of the geographic hierarchy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ward {
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
    pub zone: Option<i64>,
    #[serde(default)]
    pub city_name: Option<String>,
    #[serde(default)]
    pub zone_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_deleted: bool,
}

/// Create / update ward payload
///
/// A ward hangs off a city, a zone, or both; district is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WardPayload {
    pub name: String,
    pub country: Option<i64>,
    pub state: Option<i64>,
    pub district: Option<i64>,
    pub city: Option<i64>,
    pub zone: Option<i64>,
    pub description: String,
    pub is_active: bool,
}

impl Default for WardPayload {
    fn default() -> Self {
        Self {
            name: String::new(),
            country: None,
            state: None,
            district: None,
            city: None,
            zone: None,
            description: String::new(),
            is_active: true,
        }
    }
}

impl Validate for WardPayload {
    fn validate(&self, _mode: FormMode) -> AppResult<()> {
        RequiredFields::new()
            .id("country", self.country)
            .id("state", self.state)
            .text("name", &self.name)
            .finish()?;

        if self.city.is_none() && self.zone.is_none() {
            return Err(AppError::new(ErrorCode::GeoScopeIncomplete)
                .with_detail("fields", vec!["city", "zone"]));
        }
        Ok(())
    }
}

impl Resource for Ward {
    type Payload = WardPayload;
    const KIND: ResourceKind = ResourceKind::Ward;

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

    fn to_payload(&self) -> WardPayload {
        WardPayload {
            name: self.name.clone(),
            country: self.country,
            state: self.state,
            district: self.district,
            city: self.city,
            zone: self.zone,
            description: self.description.clone().unwrap_or_default(),
            is_active: self.is_active,
        }
    }
}

impl HasGeoPath for Ward {
    fn geo_path(&self) -> GeoPath {
        GeoPath {
            country: self.country,
            state: self.state,
            district: self.district,
            city: self.city,
            zone: self.zone,
            ward: Some(self.id),
            ..GeoPath::default()
        }
    }
}

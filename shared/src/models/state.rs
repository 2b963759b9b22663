//! State Model

use crate::error::AppResult;
use crate::hierarchy::{GeoPath, HasGeoPath};
use crate::resource::{FormMode, Resource, ResourceKind, Validate};
use crate::validation::RequiredFields;
use serde::{Deserialize, Serialize};

/// State entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub country: Option<i64>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
}

/// Create / update state payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatePayload {
    pub name: String,
    pub country: Option<i64>,
    pub is_active: bool,
}

impl Default for StatePayload {
    fn default() -> Self {
        Self {
            name: String::new(),
            country: None,
            is_active: true,
        }
    }
}

impl Validate for StatePayload {
    fn validate(&self, _mode: FormMode) -> AppResult<()> {
        RequiredFields::new()
            .id("country", self.country)
            .text("name", &self.name)
            .finish()
    }
}

impl Resource for State {
    type Payload = StatePayload;
    const KIND: ResourceKind = ResourceKind::State;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn to_payload(&self) -> StatePayload {
        StatePayload {
            name: self.name.clone(),
            country: self.country,
            is_active: self.is_active,
        }
    }
}

impl HasGeoPath for State {
    fn geo_path(&self) -> GeoPath {
        GeoPath {
            country: self.country,
            state: Some(self.id),
            ..GeoPath::default()
        }
    }
}

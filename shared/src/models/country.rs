//! Country Model

use crate::error::AppResult;
use crate::hierarchy::{GeoPath, HasGeoPath};
use crate::resource::{FormMode, Resource, ResourceKind, Validate};
use crate::validation::RequiredFields;
use serde::{Deserialize, Serialize};

/// Country entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    pub name: String,
    /// Continent reference
    #[serde(default)]
    pub continent: Option<i64>,
    #[serde(default)]
    pub continent_name: Option<String>,
    /// Mobile dialing code, e.g. "+91"
    #[serde(default)]
    pub mob_code: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
}

/// Create / update country payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryPayload {
    pub name: String,
    pub continent: Option<i64>,
    pub mob_code: String,
    pub currency: String,
    pub is_active: bool,
}

impl Default for CountryPayload {
    fn default() -> Self {
        Self {
            name: String::new(),
            continent: None,
            mob_code: String::new(),
            currency: String::new(),
            is_active: true,
        }
    }
}

impl Validate for CountryPayload {
    fn validate(&self, _mode: FormMode) -> AppResult<()> {
        RequiredFields::new()
            .text("name", &self.name)
            .id("continent", self.continent)
            .finish()
    }
}

impl Resource for Country {
    type Payload = CountryPayload;
    const KIND: ResourceKind = ResourceKind::Country;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn to_payload(&self) -> CountryPayload {
        CountryPayload {
            name: self.name.clone(),
            continent: self.continent,
            mob_code: self.mob_code.clone().unwrap_or_default(),
            currency: self.currency.clone().unwrap_or_default(),
            is_active: self.is_active,
        }
    }
}

impl HasGeoPath for Country {
    fn geo_path(&self) -> GeoPath {
        GeoPath {
            continent: self.continent,
            country: Some(self.id),
            ..GeoPath::default()
        }
    }
}

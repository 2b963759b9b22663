//! Fuel Model

use crate::error::AppResult;
use crate::resource::{FormMode, Resource, ResourceKind, Validate};
use crate::validation::RequiredFields;
use serde::{Deserialize, Serialize};

/// Fuel type used by collection vehicles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fuel {
    pub id: i64,
    pub fuel_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelPayload {
    pub fuel_type: String,
    pub description: String,
    pub is_active: bool,
}

impl Default for FuelPayload {
    fn default() -> Self {
        Self {
            fuel_type: String::new(),
            description: String::new(),
            is_active: true,
        }
    }
}

impl Validate for FuelPayload {
    fn validate(&self, _mode: FormMode) -> AppResult<()> {
        RequiredFields::new()
            .text("fuel_type", &self.fuel_type)
            .finish()
    }
}

impl Resource for Fuel {
    type Payload = FuelPayload;
    const KIND: ResourceKind = ResourceKind::Fuel;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.fuel_type.clone()
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn to_payload(&self) -> FuelPayload {
        FuelPayload {
            fuel_type: self.fuel_type.clone(),
            description: self.description.clone().unwrap_or_default(),
            is_active: self.is_active,
        }
    }
}

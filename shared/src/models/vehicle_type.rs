//! Vehicle Type Model

use crate::error::AppResult;
use crate::resource::{FormMode, Resource, ResourceKind, Validate};
use crate::validation::RequiredFields;
use serde::{Deserialize, Serialize};

/// Vehicle type (compactor, tipper, ...)
///
/// The backend names the label column `vehicleType`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleType {
    pub id: i64,
    #[serde(default)]
    pub unique_id: Option<String>,
    #[serde(rename = "vehicleType")]
    pub vehicle_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleTypePayload {
    #[serde(rename = "vehicleType")]
    pub vehicle_type: String,
    pub description: String,
    pub is_active: bool,
}

impl Default for VehicleTypePayload {
    fn default() -> Self {
        Self {
            vehicle_type: String::new(),
            description: String::new(),
            is_active: true,
        }
    }
}

impl Validate for VehicleTypePayload {
    fn validate(&self, _mode: FormMode) -> AppResult<()> {
        RequiredFields::new()
            .text("vehicleType", &self.vehicle_type)
            .finish()
    }
}

impl Resource for VehicleType {
    type Payload = VehicleTypePayload;
    const KIND: ResourceKind = ResourceKind::VehicleType;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.vehicle_type.clone()
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn to_payload(&self) -> VehicleTypePayload {
        VehicleTypePayload {
            vehicle_type: self.vehicle_type.clone(),
            description: self.description.clone().unwrap_or_default(),
            is_active: self.is_active,
        }
    }
}

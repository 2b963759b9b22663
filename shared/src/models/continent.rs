//! Continent Model

use crate::error::AppResult;
use crate::resource::{FormMode, Resource, ResourceKind, Validate};
use crate::validation::RequiredFields;
use serde::{Deserialize, Serialize};

/// Continent entity, root of the geographic hierarchy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Continent {
    pub id: i64,
    pub name: String,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
}

/// Create / update continent payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinentPayload {
    pub name: String,
    pub is_active: bool,
}

impl Default for ContinentPayload {
    fn default() -> Self {
        Self {
            name: String::new(),
            is_active: true,
        }
    }
}

impl Validate for ContinentPayload {
    fn validate(&self, _mode: FormMode) -> AppResult<()> {
        RequiredFields::new().text("name", &self.name).finish()
    }
}

impl Resource for Continent {
    type Payload = ContinentPayload;
    const KIND: ResourceKind = ResourceKind::Continent;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn to_payload(&self) -> ContinentPayload {
        ContinentPayload {
            name: self.name.clone(),
            is_active: self.is_active,
        }
    }
}

//! Property and Sub-property Models

use crate::error::AppResult;
use crate::resource::{FormMode, Resource, ResourceKind, Validate};
use crate::validation::RequiredFields;
use serde::{Deserialize, Serialize};

/// Property category (residential, commercial, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    pub property_name: String,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
}

/// Create / update property payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyPayload {
    pub property_name: String,
    pub is_active: bool,
}

impl Default for PropertyPayload {
    fn default() -> Self {
        Self {
            property_name: String::new(),
            is_active: true,
        }
    }
}

impl Validate for PropertyPayload {
    fn validate(&self, _mode: FormMode) -> AppResult<()> {
        RequiredFields::new()
            .text("property_name", &self.property_name)
            .finish()
    }
}

impl Resource for Property {
    type Payload = PropertyPayload;
    const KIND: ResourceKind = ResourceKind::Property;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.property_name.clone()
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn to_payload(&self) -> PropertyPayload {
        PropertyPayload {
            property_name: self.property_name.clone(),
            is_active: self.is_active,
        }
    }
}

/// Sub-property, scoped to a property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubProperty {
    pub id: i64,
    pub sub_property_name: String,
    #[serde(default)]
    pub property: Option<i64>,
    #[serde(default)]
    pub property_name: Option<String>,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
}

/// Create / update sub-property payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubPropertyPayload {
    pub sub_property_name: String,
    pub property: Option<i64>,
    pub is_active: bool,
}

impl Default for SubPropertyPayload {
    fn default() -> Self {
        Self {
            sub_property_name: String::new(),
            property: None,
            is_active: true,
        }
    }
}

impl Validate for SubPropertyPayload {
    fn validate(&self, _mode: FormMode) -> AppResult<()> {
        RequiredFields::new()
            .text("sub_property_name", &self.sub_property_name)
            .id("property", self.property)
            .finish()
    }
}

impl Resource for SubProperty {
    type Payload = SubPropertyPayload;
    const KIND: ResourceKind = ResourceKind::SubProperty;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.sub_property_name.clone()
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn to_payload(&self) -> SubPropertyPayload {
        SubPropertyPayload {
            sub_property_name: self.sub_property_name.clone(),
            property: self.property,
            is_active: self.is_active,
        }
    }
}

//! User and User Type Models

use crate::error::AppResult;
use crate::resource::{FormMode, Resource, ResourceKind, Validate};
use crate::validation::RequiredFields;
use serde::{Deserialize, Serialize};

/// User type (role label such as "Supervisor")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserType {
    pub id: i64,
    pub name: String,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserTypePayload {
    pub name: String,
    pub is_active: bool,
}

impl Default for UserTypePayload {
    fn default() -> Self {
        Self {
            name: String::new(),
            is_active: true,
        }
    }
}

impl Validate for UserTypePayload {
    fn validate(&self, _mode: FormMode) -> AppResult<()> {
        RequiredFields::new().text("name", &self.name).finish()
    }
}

impl Resource for UserType {
    type Payload = UserTypePayload;
    const KIND: ResourceKind = ResourceKind::UserType;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn to_payload(&self) -> UserTypePayload {
        UserTypePayload {
            name: self.name.clone(),
            is_active: self.is_active,
        }
    }
}

/// Console user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub unique_id: Option<String>,
    #[serde(default)]
    pub user_type: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
}

/// Create / update user payload
///
/// `password` is only sent when set; an edit without a new password keeps
/// the stored one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPayload {
    pub user_type: Option<i64>,
    pub username: String,
    #[serde(skip_serializing_if = "password_is_blank")]
    pub password: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_active: bool,
    pub is_delete: bool,
}

impl Default for UserPayload {
    fn default() -> Self {
        Self {
            user_type: None,
            username: String::new(),
            password: None,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            is_active: true,
            is_delete: false,
        }
    }
}

fn password_is_blank(password: &Option<String>) -> bool {
    password.as_deref().is_none_or(str::is_empty)
}

impl Validate for UserPayload {
    fn validate(&self, mode: FormMode) -> AppResult<()> {
        RequiredFields::new()
            .id("user_type", self.user_type)
            .text("username", &self.username)
            .text_if(!mode.is_edit(), "password", self.password.as_deref())
            .text("first_name", &self.first_name)
            .finish()
    }
}

impl Resource for User {
    type Payload = UserPayload;
    const KIND: ResourceKind = ResourceKind::User;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.username.clone()
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn to_payload(&self) -> UserPayload {
        UserPayload {
            user_type: self.user_type,
            username: self.username.clone(),
            password: None,
            first_name: self.first_name.clone().unwrap_or_default(),
            last_name: self.last_name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            is_active: self.is_active,
            is_delete: false,
        }
    }
}

/// User row joined with its type name, as the user list shows it
#[derive(Debug, Clone, Serialize)]
pub struct UserWithType {
    #[serde(flatten)]
    pub user: User,
    pub user_type_name: String,
}

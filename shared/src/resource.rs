//! Resource catalogue
//!
//! Every master entity follows the same pattern: a list endpoint, a detail
//! endpoint at `<endpoint><id>/`, a list route and a form route. The
//! [`ResourceKind`] table is the single place where those strings live.

use crate::error::AppResult;
use serde::{Serialize, de::DeserializeOwned};
use std::fmt;
use std::str::FromStr;

/// All resources the console manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Continent,
    Country,
    State,
    District,
    City,
    Zone,
    Ward,
    Property,
    SubProperty,
    Customer,
    Fuel,
    VehicleType,
    UserType,
    User,
    WasteCollection,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 15] = [
        Self::Continent,
        Self::Country,
        Self::State,
        Self::District,
        Self::City,
        Self::Zone,
        Self::Ward,
        Self::Property,
        Self::SubProperty,
        Self::Customer,
        Self::Fuel,
        Self::VehicleType,
        Self::UserType,
        Self::User,
        Self::WasteCollection,
    ];

    /// REST collection path, relative to the API base URL
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Self::Continent => "continents/",
            Self::Country => "countries/",
            Self::State => "states/",
            Self::District => "districts/",
            Self::City => "cities/",
            Self::Zone => "zones/",
            Self::Ward => "wards/",
            Self::Property => "properties/",
            Self::SubProperty => "subproperties/",
            Self::Customer => "customercreations/",
            Self::Fuel => "fuels/",
            Self::VehicleType => "vehicle-type/",
            Self::UserType => "user-type/",
            Self::User => "user/",
            Self::WasteCollection => "wastecollections/",
        }
    }

    /// Detail path for one record
    pub fn detail_path(&self, id: i64) -> String {
        format!("{}{}/", self.endpoint(), id)
    }

    /// Collection path filtered by a parent id (`states/?country=3`)
    pub fn filtered_path(&self, param: &str, id: i64) -> String {
        format!("{}?{}={}", self.endpoint(), param, id)
    }

    /// Singular label shown in titles and notices
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Continent => "Continent",
            Self::Country => "Country",
            Self::State => "State",
            Self::District => "District",
            Self::City => "City",
            Self::Zone => "Zone",
            Self::Ward => "Ward",
            Self::Property => "Property",
            Self::SubProperty => "Sub Property",
            Self::Customer => "Customer",
            Self::Fuel => "Fuel",
            Self::VehicleType => "Vehicle Type",
            Self::UserType => "User Type",
            Self::User => "User",
            Self::WasteCollection => "Waste Collection",
        }
    }

    /// Lowercase plural for list headings ("zones")
    pub const fn plural(&self) -> &'static str {
        match self {
            Self::Continent => "continents",
            Self::Country => "countries",
            Self::State => "states",
            Self::District => "districts",
            Self::City => "cities",
            Self::Zone => "zones",
            Self::Ward => "wards",
            Self::Property => "properties",
            Self::SubProperty => "sub properties",
            Self::Customer => "customers",
            Self::Fuel => "fuels",
            Self::VehicleType => "vehicle types",
            Self::UserType => "user types",
            Self::User => "users",
            Self::WasteCollection => "waste collections",
        }
    }

    /// Kebab-case name used on the command line
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Continent => "continent",
            Self::Country => "country",
            Self::State => "state",
            Self::District => "district",
            Self::City => "city",
            Self::Zone => "zone",
            Self::Ward => "ward",
            Self::Property => "property",
            Self::SubProperty => "sub-property",
            Self::Customer => "customer",
            Self::Fuel => "fuel",
            Self::VehicleType => "vehicle-type",
            Self::UserType => "user-type",
            Self::User => "user",
            Self::WasteCollection => "waste-collection",
        }
    }

    /// Route of the owning list view
    pub const fn list_route(&self) -> &'static str {
        match self {
            Self::Continent => "/masters/continents",
            Self::Country => "/masters/countries",
            Self::State => "/masters/states",
            Self::District => "/masters/districts",
            Self::City => "/masters/cities",
            Self::Zone => "/masters/zones",
            Self::Ward => "/masters/wards",
            Self::Property => "/masters/properties",
            Self::SubProperty => "/masters/subproperties",
            Self::Customer => "/customerMasters/customerCreations",
            Self::Fuel => "/transportMasters/fuels",
            Self::VehicleType => "/vehicle-type",
            Self::UserType => "/user-type",
            Self::User => "/user-creation",
            Self::WasteCollection => "/wasteManagementMasters/wasteCollectedData",
        }
    }

    pub fn new_route(&self) -> String {
        format!("{}/new", self.list_route())
    }

    pub fn edit_route(&self, id: i64) -> String {
        format!("{}/{}/edit", self.list_route(), id)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error when parsing an unknown resource name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownResource(pub String);

impl fmt::Display for UnknownResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown resource: {}", self.0)
    }
}

impl std::error::Error for UnknownResource {}

impl FromStr for ResourceKind {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| UnknownResource(s.to_string()))
    }
}

/// Create vs. edit, decided by the presence of a record id in the route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    pub fn from_route_id(id: Option<i64>) -> Self {
        match id {
            Some(id) => Self::Edit(id),
            None => Self::Create,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }

    pub fn id(&self) -> Option<i64> {
        match self {
            Self::Edit(id) => Some(*id),
            Self::Create => None,
        }
    }
}

/// Required-field checks on a form payload
pub trait Validate {
    fn validate(&self, mode: FormMode) -> AppResult<()>;
}

/// A record type served by one REST collection
pub trait Resource:
    Serialize + DeserializeOwned + fmt::Debug + Clone + Send + Sync + 'static
{
    /// Body sent on POST/PUT
    type Payload: Serialize
        + DeserializeOwned
        + Validate
        + Default
        + fmt::Debug
        + Clone
        + Send
        + Sync
        + 'static;

    const KIND: ResourceKind;

    fn id(&self) -> i64;

    /// Text used for option labels and list rows
    fn display_name(&self) -> String;

    fn is_active(&self) -> bool;

    /// Whether the record may be offered in a dropdown
    fn is_selectable(&self) -> bool {
        self.is_active()
    }

    /// Form state pre-filled from a stored record
    fn to_payload(&self) -> Self::Payload;
}

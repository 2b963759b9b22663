//! Geographic hierarchy
//!
//! Continent ⊃ Country ⊃ State ⊃ District ⊃ City ⊃ Zone ⊃ Ward.
//! Containment is only enforced by the cascading selector: each level's
//! options are fetched with the parent's id as a query filter.

use crate::resource::ResourceKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One level of the geographic hierarchy, ordered top-down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoLevel {
    Continent,
    Country,
    State,
    District,
    City,
    Zone,
    Ward,
}

impl GeoLevel {
    pub const ALL: [GeoLevel; 7] = [
        Self::Continent,
        Self::Country,
        Self::State,
        Self::District,
        Self::City,
        Self::Zone,
        Self::Ward,
    ];

    const fn index(self) -> usize {
        self as usize
    }

    pub fn parent(self) -> Option<GeoLevel> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn child(self) -> Option<GeoLevel> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub const fn kind(self) -> ResourceKind {
        match self {
            Self::Continent => ResourceKind::Continent,
            Self::Country => ResourceKind::Country,
            Self::State => ResourceKind::State,
            Self::District => ResourceKind::District,
            Self::City => ResourceKind::City,
            Self::Zone => ResourceKind::Zone,
            Self::Ward => ResourceKind::Ward,
        }
    }

    /// Query key used when this level filters its child (`?country=3`)
    pub const fn filter_param(self) -> &'static str {
        match self {
            Self::Continent => "continent",
            Self::Country => "country",
            Self::State => "state",
            Self::District => "district",
            Self::City => "city",
            Self::Zone => "zone",
            Self::Ward => "ward",
        }
    }

    /// Levels from `top` to `bottom`, both included
    pub fn range(top: GeoLevel, bottom: GeoLevel) -> impl Iterator<Item = GeoLevel> {
        Self::ALL
            .into_iter()
            .filter(move |level| *level >= top && *level <= bottom)
    }
}

impl fmt::Display for GeoLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.filter_param())
    }
}

impl std::str::FromStr for GeoLevel {
    type Err = crate::resource::UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.filter_param() == wanted)
            .ok_or_else(|| crate::resource::UnknownResource(s.to_string()))
    }
}

/// Selected id at each level; `None` means nothing chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoPath {
    pub continent: Option<i64>,
    pub country: Option<i64>,
    pub state: Option<i64>,
    pub district: Option<i64>,
    pub city: Option<i64>,
    pub zone: Option<i64>,
    pub ward: Option<i64>,
}

impl GeoPath {
    pub fn get(&self, level: GeoLevel) -> Option<i64> {
        match level {
            GeoLevel::Continent => self.continent,
            GeoLevel::Country => self.country,
            GeoLevel::State => self.state,
            GeoLevel::District => self.district,
            GeoLevel::City => self.city,
            GeoLevel::Zone => self.zone,
            GeoLevel::Ward => self.ward,
        }
    }

    pub fn set(&mut self, level: GeoLevel, id: Option<i64>) {
        let slot = match level {
            GeoLevel::Continent => &mut self.continent,
            GeoLevel::Country => &mut self.country,
            GeoLevel::State => &mut self.state,
            GeoLevel::District => &mut self.district,
            GeoLevel::City => &mut self.city,
            GeoLevel::Zone => &mut self.zone,
            GeoLevel::Ward => &mut self.ward,
        };
        *slot = id;
    }

    /// Clear every level strictly below `level`
    pub fn clear_below(&mut self, level: GeoLevel) {
        let mut next = level.child();
        while let Some(l) = next {
            self.set(l, None);
            next = l.child();
        }
    }
}

/// Records that reference their ancestors in the hierarchy
pub trait HasGeoPath {
    fn geo_path(&self) -> GeoPath;
}

/// Option entry for a list-bound control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: i64,
    pub label: String,
}

/// Minimal projection of any level's record, enough to build options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoNode {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_deleted: bool,
}

fn default_true() -> bool {
    true
}

impl GeoNode {
    pub fn is_selectable(&self) -> bool {
        self.is_active && !self.is_deleted
    }
}

impl From<&GeoNode> for SelectOption {
    fn from(node: &GeoNode) -> Self {
        Self {
            value: node.id,
            label: node.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_child_chain() {
        assert_eq!(GeoLevel::Continent.parent(), None);
        assert_eq!(GeoLevel::Country.parent(), Some(GeoLevel::Continent));
        assert_eq!(GeoLevel::City.child(), Some(GeoLevel::Zone));
        assert_eq!(GeoLevel::Ward.child(), None);
        assert_eq!(GeoLevel::Zone.kind(), ResourceKind::Zone);
    }

    #[test]
    fn test_range_is_inclusive_and_ordered() {
        let levels: Vec<_> = GeoLevel::range(GeoLevel::Country, GeoLevel::City).collect();
        assert_eq!(
            levels,
            vec![GeoLevel::Country, GeoLevel::State, GeoLevel::District, GeoLevel::City]
        );
    }

    #[test]
    fn test_clear_below_keeps_ancestors() {
        let mut path = GeoPath {
            continent: Some(1),
            country: Some(2),
            state: Some(3),
            district: Some(4),
            city: Some(5),
            zone: Some(6),
            ward: Some(7),
        };
        path.clear_below(GeoLevel::State);
        assert_eq!(path.country, Some(2));
        assert_eq!(path.state, Some(3));
        assert_eq!(path.district, None);
        assert_eq!(path.ward, None);
    }

    #[test]
    fn test_geo_node_defaults_and_selectable() {
        let node: GeoNode = serde_json::from_str(r#"{"id": 4, "name": "North", "extra": 1}"#).unwrap();
        assert!(node.is_selectable());

        let deleted: GeoNode =
            serde_json::from_str(r#"{"id": 5, "name": "Old", "is_active": true, "is_deleted": true}"#)
                .unwrap();
        assert!(!deleted.is_selectable());
        assert_eq!(SelectOption::from(&node).label, "North");
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("District".parse::<GeoLevel>(), Ok(GeoLevel::District));
        assert!("galaxy".parse::<GeoLevel>().is_err());
    }
}

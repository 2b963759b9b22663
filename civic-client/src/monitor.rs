//! Waste collection monitoring
//!
//! Households are the active customers matching the zone / ward / customer
//! filter; a household counts as collected when it has a non-deleted
//! collection on the filter date.

use crate::api::AdminApi;
use crate::http::HttpClient;
use crate::telemetry::TelemetryClient;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use shared::hierarchy::{GeoLevel, SelectOption};
use shared::models::{Customer, FleetSummary, Vehicle, WasteCollection};
use shared::resource::Resource;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollectionFilter {
    pub date: NaiveDate,
    pub zone: Option<i64>,
    pub ward: Option<i64>,
    pub customer: Option<i64>,
}

impl Default for CollectionFilter {
    fn default() -> Self {
        Self::on(Local::now().date_naive())
    }
}

impl CollectionFilter {
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date,
            zone: None,
            ward: None,
            customer: None,
        }
    }

    pub fn matches(&self, customer: &Customer) -> bool {
        fn accepts(wanted: Option<i64>, actual: Option<i64>) -> bool {
            wanted.is_none() || wanted == actual
        }
        customer.is_active
            && accepts(self.zone, customer.zone)
            && accepts(self.ward, customer.ward)
            && accepts(self.customer, Some(customer.id))
    }
}

/// Which household set to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseholdStatus {
    Collected,
    NotCollected,
    TotalHousehold,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CollectionSummary {
    pub total_household: usize,
    pub collected: usize,
    pub not_collected: usize,
}

/// Option lists for the monitor's filter controls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub zones: Vec<SelectOption>,
    pub wards: Vec<SelectOption>,
    pub customers: Vec<SelectOption>,
}

/// Loaded monitor state
#[derive(Debug, Clone, Default)]
pub struct CollectionMonitor {
    pub filter: CollectionFilter,
    customers: Vec<Customer>,
    collections: Vec<WasteCollection>,
    vehicles: Vec<Vehicle>,
}

impl CollectionMonitor {
    pub fn new(filter: CollectionFilter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    /// Build from already fetched data
    pub fn with_data(
        filter: CollectionFilter,
        customers: Vec<Customer>,
        collections: Vec<WasteCollection>,
        vehicles: Vec<Vehicle>,
    ) -> Self {
        Self {
            filter,
            customers,
            collections,
            vehicles,
        }
    }

    /// Fetch customers, collections and telemetry concurrently
    ///
    /// Each source that fails is logged and treated as empty.
    pub async fn refresh<C: HttpClient, T: HttpClient>(
        &mut self,
        api: &AdminApi<C>,
        telemetry: &TelemetryClient<T>,
    ) {
        let (customers, collections, vehicles) = tokio::join!(
            api.list::<Customer>(),
            api.list::<WasteCollection>(),
            telemetry.fetch()
        );
        self.customers = customers.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to fetch customers");
            Vec::new()
        });
        self.collections = collections.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to fetch waste collections");
            Vec::new()
        });
        self.vehicles = vehicles.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to fetch vehicle telemetry");
            Vec::new()
        });
    }

    fn collected_ids(&self) -> HashSet<i64> {
        self.collections
            .iter()
            .filter(|c| c.is_selectable() && c.collection_date == Some(self.filter.date))
            .filter_map(|c| c.customer)
            .collect()
    }

    pub fn households(&self, status: HouseholdStatus) -> Vec<&Customer> {
        let collected = self.collected_ids();
        self.customers
            .iter()
            .filter(|c| self.filter.matches(c))
            .filter(|c| match status {
                HouseholdStatus::Collected => collected.contains(&c.id),
                HouseholdStatus::NotCollected => !collected.contains(&c.id),
                HouseholdStatus::TotalHousehold => true,
            })
            .collect()
    }

    pub fn summary(&self) -> CollectionSummary {
        let collected = self.collected_ids();
        let (total_household, collected) = self
            .customers
            .iter()
            .filter(|c| self.filter.matches(c))
            .fold((0, 0), |(total, done), c| {
                (total + 1, done + usize::from(collected.contains(&c.id)))
            });
        CollectionSummary {
            total_household,
            collected,
            not_collected: total_household - collected,
        }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn fleet(&self) -> FleetSummary {
        FleetSummary::from_vehicles(&self.vehicles)
    }

    /// Zone, ward and customer options narrowed by the current filter
    pub async fn filter_options<C: HttpClient>(&self, api: &AdminApi<C>) -> FilterOptions {
        let (zones, wards) = tokio::join!(
            api.options(GeoLevel::Zone, None),
            api.options(GeoLevel::Ward, self.filter.zone)
        );
        let ward_filter = CollectionFilter {
            customer: None,
            ..self.filter
        };
        FilterOptions {
            zones: zones.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "failed to load zone options");
                Vec::new()
            }),
            wards: wards.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "failed to load ward options");
                Vec::new()
            }),
            customers: self
                .customers
                .iter()
                .filter(|c| ward_filter.matches(c))
                .map(|c| SelectOption {
                    value: c.id,
                    label: c.display_name(),
                })
                .collect(),
        }
    }
}

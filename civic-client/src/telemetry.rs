//! Vehicle telemetry from the external fleet tracker
//!
//! Read-only and unauthenticated: the tracker identifies the fleet by the
//! `providerName` / `fcode` query pair.

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::{HttpClient, NetworkHttpClient};
use chrono::Utc;
use shared::models::{TelemetryResponse, Vehicle};

/// Tracker client over any transport whose base URL is the tracker endpoint
#[derive(Debug, Clone)]
pub struct TelemetryClient<C> {
    http: C,
    provider: String,
    fcode: String,
}

impl TelemetryClient<NetworkHttpClient> {
    /// Network client for the configured tracker; the masters token is not sent
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let tracker = ClientConfig::new(config.telemetry.url.clone()).with_timeout(config.timeout);
        let http = NetworkHttpClient::new(&tracker)?;
        Ok(Self::new(
            http,
            config.telemetry.provider.clone(),
            config.telemetry.fcode.clone(),
        ))
    }
}

impl<C: HttpClient> TelemetryClient<C> {
    pub fn new(http: C, provider: impl Into<String>, fcode: impl Into<String>) -> Self {
        Self {
            http,
            provider: provider.into(),
            fcode: fcode.into(),
        }
    }

    fn query(&self) -> String {
        format!("?providerName={}&fcode={}", self.provider, self.fcode)
    }

    /// Current vehicle positions, normalized
    pub async fn fetch(&self) -> ClientResult<Vec<Vehicle>> {
        let response: TelemetryResponse = self
            .http
            .get(&self.query())
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "telemetry request failed"))?;
        let Some(raw) = response.data else {
            return Err(ClientError::InvalidResponse(
                "telemetry response has no data array".into(),
            ));
        };
        let now = Utc::now();
        let vehicles: Vec<Vehicle> = raw
            .into_iter()
            .enumerate()
            .map(|(index, entry)| Vehicle::from_raw(index, entry, now))
            .collect();
        tracing::debug!(count = vehicles.len(), "telemetry loaded");
        Ok(vehicles)
    }
}

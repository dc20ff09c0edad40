//! SuperVia HTTP client.
//!
//! Three endpoints are used: the station list and the trip planner on the
//! content host, and the alerts API on the main site. Requests are issued one
//! at a time; no timeout is set unless configured.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{Itinerary, StationCatalog};
use crate::planner::{AlertsPayload, AlertsProvider, StationProvider, TripPlanProvider};

use super::error::ApiError;
use super::types::{StationsResponse, TripPlanResponse};

/// Default base URL for stations and trip plans.
pub const DEFAULT_CONTENT_URL: &str = "https://content.supervia.com.br";

/// Default URL of the alerts endpoint.
pub const DEFAULT_ALERTS_URL: &str = "https://www.supervia.com.br/pt-br/api/alertas";

/// Alert fields requested from the alerts API.
const ALERT_FIELDS: [&str; 7] = [
    "nid",
    "title",
    "field_alerta_ramais",
    "field_alerta_estacao",
    "field_alerta_descricao",
    "field_alerta_data",
    "field_alerta_link",
];

/// Configuration for the SuperVia client.
#[derive(Debug, Clone)]
pub struct SuperviaConfig {
    /// Base URL for `/estacoes` and `/planeje`
    pub content_url: String,
    /// Full URL of the alerts endpoint
    pub alerts_url: String,
    /// Request timeout in seconds; `None` keeps the transport default
    pub timeout_secs: Option<u64>,
}

impl SuperviaConfig {
    /// Create a config pointing at the production endpoints.
    pub fn new() -> Self {
        Self {
            content_url: DEFAULT_CONTENT_URL.to_string(),
            alerts_url: DEFAULT_ALERTS_URL.to_string(),
            timeout_secs: None,
        }
    }

    /// Set a custom content base URL (for testing).
    pub fn with_content_url(mut self, url: impl Into<String>) -> Self {
        self.content_url = url.into();
        self
    }

    /// Set a custom alerts URL (for testing).
    pub fn with_alerts_url(mut self, url: impl Into<String>) -> Self {
        self.alerts_url = url.into();
        self
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl Default for SuperviaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the SuperVia content and alerts APIs.
#[derive(Debug, Clone)]
pub struct SuperviaClient {
    http: reqwest::Client,
    content_url: String,
    alerts_url: String,
}

impl SuperviaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SuperviaConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            content_url: config.content_url.trim_end_matches('/').to_string(),
            alerts_url: config.alerts_url,
        })
    }

    /// URL of the trip plan for the given resolved request.
    fn plan_url(&self, origin_id: &str, dest_id: &str, date: &str, time: &str) -> String {
        format!(
            "{}/planeje/{}/{}/{}/{}",
            self.content_url, origin_id, dest_id, date, time
        )
    }

    /// Send a prepared request and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        debug!(url = %response.url(), %status, "supervia response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::json(&e, &body))
    }
}

impl StationProvider for SuperviaClient {
    async fn fetch_stations(&self) -> Result<StationCatalog, ApiError> {
        let url = format!("{}/estacoes", self.content_url);
        let response: StationsResponse = self.get_json(self.http.get(&url)).await?;
        Ok(response.into())
    }
}

impl TripPlanProvider for SuperviaClient {
    async fn fetch_plan(
        &self,
        origin_id: &str,
        dest_id: &str,
        date: &str,
        time: &str,
    ) -> Result<Itinerary, ApiError> {
        let url = self.plan_url(origin_id, dest_id, date, time);
        let response: TripPlanResponse = self.get_json(self.http.get(&url)).await?;
        Ok(response.into())
    }
}

impl AlertsProvider for SuperviaClient {
    async fn fetch_alerts(
        &self,
        origin_id: &str,
        dest_id: &str,
        date: &str,
        time: &str,
    ) -> Result<AlertsPayload, ApiError> {
        let fields = ALERT_FIELDS.join(",");
        let request = self.http.get(&self.alerts_url).query(&[
            ("type", "alerta"),
            ("fields", fields.as_str()),
            ("partida", origin_id),
            ("chegada", dest_id),
            ("data", date),
            ("hora", time),
        ]);
        let value: serde_json::Value = self.get_json(request).await?;
        Ok(AlertsPayload(value))
    }
}

//! Plan a trip: resolve stations, normalize the time, query SuperVia.

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::cache::BlobStore;
use crate::domain::{Itinerary, Station, StationCatalog};
use crate::stations::{StationCache, best_match};
use crate::supervia::ApiError;
use crate::timing::{describe_relative, normalize_date, normalize_time, parse_planned};

use super::config::PlannerConfig;
use super::provider::{AlertsProvider, StationProvider, TripPlanProvider};

/// Error from planning. Any of these aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// A user-typed station name matched nothing
    #[error("station not found: {token:?}")]
    UnresolvedStation { token: String },

    /// A SuperVia request failed
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Raw user input for a plan.
#[derive(Debug, Clone, Default)]
pub struct PlanRequest {
    pub origin: String,
    pub destination: String,
    /// `day[/month[/year]]`; `None` plans for the fallback day.
    pub date: Option<String>,
    /// `HH:MM` or a bare hour; `None` plans for the fallback time.
    pub time: Option<String>,
}

impl PlanRequest {
    /// Create a request for the next departure between two stations.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            date: None,
            time: None,
        }
    }

    /// Set the date token.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the time token.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }
}

/// A request with stations resolved and date/time normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub origin: Station,
    pub destination: Station,
    pub date: String,
    pub time: String,
}

/// Everything needed to render a plan.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub request: ResolvedRequest,
    /// Portuguese description of the planned instant relative to now,
    /// when the date and time form a real instant.
    pub description: Option<String>,
    pub itinerary: Itinerary,
}

/// Resolve both stations and normalize the date and time.
///
/// `now` is the local wall-clock time; unspecified or unparseable pieces are
/// taken from `now + config.lead()`.
pub fn resolve_request(
    request: &PlanRequest,
    catalog: &StationCatalog,
    now: NaiveDateTime,
    config: &PlannerConfig,
) -> Result<ResolvedRequest, PlanError> {
    let origin = resolve_station(&request.origin, catalog)?;
    let destination = resolve_station(&request.destination, catalog)?;

    let fallback = now + config.lead();
    let date = match &request.date {
        Some(token) => normalize_date(token, fallback),
        None => fallback.format("%Y-%m-%d").to_string(),
    };
    let time = match &request.time {
        Some(token) => normalize_time(token, fallback),
        None => fallback.format("%H:%M").to_string(),
    };

    Ok(ResolvedRequest {
        origin,
        destination,
        date,
        time,
    })
}

fn resolve_station(token: &str, catalog: &StationCatalog) -> Result<Station, PlanError> {
    let station = best_match(token, catalog).ok_or_else(|| PlanError::UnresolvedStation {
        token: token.to_string(),
    })?;
    debug!(token, id = %station.id, "resolved station");
    Ok(station.clone())
}

/// Trip planner over a set of providers.
pub struct Planner<'a, P, S: BlobStore> {
    provider: &'a P,
    stations: &'a StationCache<S>,
    config: &'a PlannerConfig,
}

impl<'a, P, S> Planner<'a, P, S>
where
    P: StationProvider + TripPlanProvider + AlertsProvider,
    S: BlobStore,
{
    /// Create a new planner.
    pub fn new(provider: &'a P, stations: &'a StationCache<S>, config: &'a PlannerConfig) -> Self {
        Self {
            provider,
            stations,
            config,
        }
    }

    /// Plan a trip.
    ///
    /// Steps run strictly in order and the first failure aborts: station
    /// catalog, station resolution, date/time normalization, alerts, trip
    /// plan. An unresolved station stops before any alerts or plan request.
    pub async fn plan(
        &self,
        request: &PlanRequest,
        now: NaiveDateTime,
    ) -> Result<PlanOutcome, PlanError> {
        let catalog = self.stations.load_or_fetch(self.provider).await?;
        let resolved = resolve_request(request, &catalog, now, self.config)?;
        info!(
            origin = %resolved.origin.id,
            destination = %resolved.destination.id,
            date = %resolved.date,
            time = %resolved.time,
            "planning trip"
        );

        let alerts = self
            .provider
            .fetch_alerts(
                &resolved.origin.id,
                &resolved.destination.id,
                &resolved.date,
                &resolved.time,
            )
            .await?;
        debug!(alerts = alerts.len(), "fetched alerts");

        let planned_at = parse_planned(&resolved.date, &resolved.time);
        if planned_at.is_none() {
            debug!(date = %resolved.date, time = %resolved.time, "planned instant is not a real date/time");
        }
        let description = planned_at.map(|at| describe_relative(at, now));

        let itinerary = self
            .provider
            .fetch_plan(
                &resolved.origin.id,
                &resolved.destination.id,
                &resolved.date,
                &resolved.time,
            )
            .await?;
        info!(trajects = itinerary.trajects.len(), "received trip plan");

        Ok(PlanOutcome {
            request: resolved,
            description,
            itinerary,
        })
    }
}

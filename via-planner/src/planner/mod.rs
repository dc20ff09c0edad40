//! Trip planning.
//!
//! The planner loads the station catalog (cache first), resolves the
//! user's origin and destination, fills in the date and time, then asks
//! SuperVia for alerts and the trip plan, one request at a time.

mod config;
mod plan;
mod provider;


pub use config::PlannerConfig;
pub use plan::{PlanError, PlanOutcome, PlanRequest, Planner, ResolvedRequest, resolve_request};
pub use provider::{AlertsPayload, AlertsProvider, StationProvider, TripPlanProvider};

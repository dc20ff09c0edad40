//! Domain types for the trip planner.
//!
//! Stations are loaded once per run; itineraries are a read-only view of the
//! remote planner response.

mod itinerary;
mod station;

pub use itinerary::{Itinerary, Leg, Traject, TripOption};
pub use station::{Station, StationCatalog};

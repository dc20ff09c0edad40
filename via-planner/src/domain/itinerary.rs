//! Itinerary types: the planner's answer, as returned by the remote service.
//!
//! These are a read-only projection of the trip plan response. Times are
//! kept as the raw strings the service sends, because the renderer only
//! ever slices the leading `HH:MM` out of them.

/// A single ride on one rail extension between two stations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leg {
    pub origin_id: String,
    pub origin_name: String,
    pub dest_id: String,
    pub dest_name: String,
    /// Scheduled departure, e.g. `"14:32:00"`. May be empty.
    pub departure: String,
    /// Scheduled arrival, e.g. `"15:10:00"`. May be empty.
    pub arrival: String,
    /// Extension (ramal) id, used for color-coding.
    pub extension_id: String,
    pub extension_name: String,
}

/// One concrete sequence of legs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripOption {
    pub legs: Vec<Leg>,
}

impl TripOption {
    /// The last leg, if any.
    pub fn last(&self) -> Option<&Leg> {
        self.legs.last()
    }
}

/// A group of alternative trip options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Traject {
    pub options: Vec<TripOption>,
}

/// All trajects the planner returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Itinerary {
    pub trajects: Vec<Traject>,
}

impl Itinerary {
    /// Check if the planner returned nothing.
    pub fn is_empty(&self) -> bool {
        self.trajects.is_empty()
    }
}

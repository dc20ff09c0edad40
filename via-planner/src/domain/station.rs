//! Station types.

use serde::{Deserialize, Serialize};

/// A SuperVia station.
///
/// The `id` is the canonical identifier used by the remote service: lowercase
/// and underscore-delimited (e.g. `santa_cruz`). The `name` is the display
/// name (e.g. `Santa Cruz`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
}

impl Station {
    /// Create a new station.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The list of stations, in the order the source returned them.
///
/// No uniqueness is enforced; duplicate ids are kept as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationCatalog {
    stations: Vec<Station>,
}

impl StationCatalog {
    /// Create a catalog from stations in source order.
    pub fn new(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    /// Iterate over stations in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Station> {
        self.stations.iter()
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl FromIterator<Station> for StationCatalog {
    fn from_iter<I: IntoIterator<Item = Station>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a StationCatalog {
    type Item = &'a Station;
    type IntoIter = std::slice::Iter<'a, Station>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! Provider traits the planner depends on.
//!
//! [`SuperviaClient`](crate::supervia::SuperviaClient) implements all three
//! over HTTP; tests use in-memory stubs. Implementors may write plain
//! `async fn`; the returned futures must be `Send` so the planner can run on
//! a multi-threaded runtime.

use std::future::Future;

use crate::domain::{Itinerary, StationCatalog};
use crate::supervia::ApiError;

/// Opaque alerts response.
///
/// Fetched for every plan but never interpreted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertsPayload(pub serde_json::Value);

impl AlertsPayload {
    /// Number of alert entries, when the payload is a list.
    pub fn len(&self) -> usize {
        self.0.as_array().map_or(0, Vec::len)
    }

    /// Check if the payload holds no alert entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Source of the station list.
pub trait StationProvider {
    /// Fetch every station, in source order.
    fn fetch_stations(&self) -> impl Future<Output = Result<StationCatalog, ApiError>> + Send;
}

/// Source of trip plans.
pub trait TripPlanProvider {
    /// Plan a trip between two resolved station ids.
    ///
    /// `date` is `YYYY-MM-DD`-shaped and `time` `HH:MM`-shaped, as produced by
    /// the normalizers; neither is validated before the call.
    fn fetch_plan(
        &self,
        origin_id: &str,
        dest_id: &str,
        date: &str,
        time: &str,
    ) -> impl Future<Output = Result<Itinerary, ApiError>> + Send;
}

/// Source of service alerts.
pub trait AlertsProvider {
    /// Fetch alerts relevant to a planned trip.
    fn fetch_alerts(
        &self,
        origin_id: &str,
        dest_id: &str,
        date: &str,
        time: &str,
    ) -> impl Future<Output = Result<AlertsPayload, ApiError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Station;

    struct FixedProvider;

    impl StationProvider for FixedProvider {
        async fn fetch_stations(&self) -> Result<StationCatalog, ApiError> {
            Ok(StationCatalog::new(vec![Station::new("central", "Central do Brasil")]))
        }
    }

    fn assert_send<T: Send>(value: T) -> T {
        value
    }

    #[tokio::test]
    async fn provider_futures_can_cross_threads() {
        async fn stations<P: StationProvider + Sync>(provider: &P) -> usize {
            assert_send(provider.fetch_stations()).await.unwrap().len()
        }

        let handle = tokio::spawn(async { stations(&FixedProvider).await });
        assert_eq!(handle.await.unwrap(), 1);
    }

    #[test]
    fn alerts_len_counts_list_entries() {
        assert_eq!(AlertsPayload(serde_json::json!([{"nid": "1"}, {"nid": "2"}])).len(), 2);
        assert!(AlertsPayload(serde_json::json!({"error": "none"})).is_empty());
        assert!(AlertsPayload::default().is_empty());
    }
}

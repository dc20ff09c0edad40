//! SuperVia content API client.
//!
//! Implements the station, trip plan and alerts providers over HTTP. The
//! service speaks Portuguese JSON; DTOs in [`types`] map it onto the domain
//! types.

mod client;
mod error;
pub mod types;

pub use client::{DEFAULT_ALERTS_URL, DEFAULT_CONTENT_URL, SuperviaClient, SuperviaConfig};
pub use error::ApiError;

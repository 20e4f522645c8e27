//! Typed client for AC Transit's public REST API.
//!
//! Wraps the HTTP/JSON plumbing so callers work with typed records
//! (stops, predictions, vehicles, routes, trips, service notices)
//! instead of raw responses. Construct an [`ActransitClient`] with an
//! API token from AC Transit's developer site and call the endpoint
//! methods on it.

mod client;
mod entities;
mod error;
mod transport;

#[cfg(test)]
mod test_utils;

pub use client::{ActransitClient, DEFAULT_SEARCH_RADIUS_FEET};
pub use entities::{
    GtfsScheduleInfo, Prediction, Route, ScheduleType, ServiceNotice, Stop, TimePoint, Trip,
    TripEstimate, Vehicle,
};
pub use error::{ActransitError, ActransitResult};
pub use transport::{HttpTransport, Transport};

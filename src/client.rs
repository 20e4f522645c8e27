use std::sync::Arc;

use serde_json::Value;
use url::Url;

use crate::entities::{
    GtfsScheduleInfo, Prediction, Route, ServiceNotice, Stop, TimePoint, Trip, TripEstimate,
    Vehicle,
};
use crate::error::{ActransitError, ActransitResult};
use crate::transport::{HttpTransport, Transport};

const BASE_URL: &str = "https://api.actransit.org/transit";

/// Default search radius for the active-stops queries, in feet.
pub const DEFAULT_SEARCH_RADIUS_FEET: u32 = 500;

/// Client for the AC Transit public API.
///
/// Holds the API token for the lifetime of the client; there is no global
/// key state. The token is not validated locally — requests carrying an
/// empty or bogus token are rejected by the service with an error status.
#[derive(Clone)]
pub struct ActransitClient {
    transport: Arc<dyn Transport>,
    base_url: Url,
    token: String,
}

impl ActransitClient {
    pub fn new(token: impl Into<String>) -> ActransitResult<ActransitClient> {
        Ok(ActransitClient::with_transport(
            token,
            Arc::new(HttpTransport::new()?),
        ))
    }

    /// Build a client over a custom [`Transport`].
    pub fn with_transport(token: impl Into<String>, transport: Arc<dyn Transport>) -> ActransitClient {
        ActransitClient {
            transport,
            base_url: Url::parse(BASE_URL).unwrap(),
            token: token.into(),
        }
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.path_segments_mut().unwrap().extend(segments);
        url.query_pairs_mut().append_pair("token", &self.token);
        url
    }

    async fn get_list<T>(&self, url: Url, entity: &'static str) -> ActransitResult<Vec<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let value = self.transport.fetch_json(url).await?;

        let items: Vec<Value> =
            serde_json::from_value(value).map_err(|e| ActransitError::Decode(entity, e))?;
        items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(|e| ActransitError::Decode(entity, e)))
            .collect()
    }

    async fn get_one<T>(&self, url: Url, entity: &'static str) -> ActransitResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let value = self.transport.fetch_json(url).await?;
        serde_json::from_value(value).map_err(|e| ActransitError::Decode(entity, e))
    }

    /// All currently active stops in the AC Transit system, in the order
    /// the service returns them.
    pub async fn get_stops(&self) -> ActransitResult<Vec<Stop>> {
        let url = self.url(&["stops"]);
        self.get_list(url, "Stop").await
    }

    /// Active stops on a route within `search_radius` feet of the given
    /// point, defaulting to [`DEFAULT_SEARCH_RADIUS_FEET`].
    pub async fn get_active_stops(
        &self,
        latitude: f64,
        longitude: f64,
        route_name: &str,
        search_radius: Option<u32>,
    ) -> ActransitResult<Vec<Stop>> {
        let radius = search_radius.unwrap_or(DEFAULT_SEARCH_RADIUS_FEET);
        let url = self.url(&[
            "stops",
            &latitude.to_string(),
            &longitude.to_string(),
            &radius.to_string(),
            route_name,
        ]);
        self.get_list(url, "Stop").await
    }

    /// Query-parameter form of [`get_active_stops`](Self::get_active_stops).
    /// The service accepts both URL shapes for the same request.
    pub async fn get_active_stops_by_query(
        &self,
        latitude: f64,
        longitude: f64,
        route_name: &str,
        search_radius: Option<u32>,
    ) -> ActransitResult<Vec<Stop>> {
        let radius = search_radius.unwrap_or(DEFAULT_SEARCH_RADIUS_FEET);
        let mut url = self.url(&["stops", &latitude.to_string(), &longitude.to_string()]);
        url.query_pairs_mut()
            .append_pair("distance", &radius.to_string())
            .append_pair("routeName", route_name);
        self.get_list(url, "Stop").await
    }

    /// Vehicle predictions for a particular stop.
    pub async fn get_predictions(&self, stop_id: i64) -> ActransitResult<Vec<Prediction>> {
        let url = self.url(&["stops", &stop_id.to_string(), "predictions"]);
        self.get_list(url, "Prediction").await
    }

    /// All routes currently in service.
    pub async fn get_routes(&self) -> ActransitResult<Vec<Route>> {
        let url = self.url(&["routes"]);
        self.get_list(url, "Route").await
    }

    /// Scheduled trips for a route.
    pub async fn get_route_trips(&self, route_name: &str) -> ActransitResult<Vec<Trip>> {
        let url = self.url(&["route", route_name, "trips"]);
        self.get_list(url, "Trip").await
    }

    /// Realtime positions of the vehicles currently servicing a route.
    pub async fn get_route_vehicles(&self, route_name: &str) -> ActransitResult<Vec<Vehicle>> {
        let url = self.url(&["route", route_name, "vehicles"]);
        self.get_list(url, "Vehicle").await
    }

    /// Realtime position of a single vehicle.
    pub async fn get_vehicle(&self, vehicle_id: i64) -> ActransitResult<Vehicle> {
        let url = self.url(&["vehicle", &vehicle_id.to_string()]);
        self.get_one(url, "Vehicle").await
    }

    /// Ordered waypoints along a trip's path.
    pub async fn get_trip_timepoints(&self, trip_id: i64) -> ActransitResult<Vec<TimePoint>> {
        let url = self.url(&["trips", &trip_id.to_string(), "timepoints"]);
        self.get_list(url, "TimePoint").await
    }

    /// Estimated departures and travel times between two stops on a route.
    pub async fn get_trip_estimates(
        &self,
        route_name: &str,
        from_stop_id: i64,
        to_stop_id: i64,
    ) -> ActransitResult<Vec<TripEstimate>> {
        let url = self.url(&[
            "route",
            route_name,
            "tripestimates",
            &from_stop_id.to_string(),
            &to_stop_id.to_string(),
        ]);
        self.get_list(url, "TripEstimate").await
    }

    /// Publication metadata for the current GTFS schedule.
    pub async fn get_gtfs_schedule_info(&self) -> ActransitResult<GtfsScheduleInfo> {
        let url = self.url(&["gtfs"]);
        self.get_one(url, "GtfsScheduleInfo").await
    }

    /// Service notices posted by the agency.
    pub async fn get_service_notices(&self) -> ActransitResult<Vec<ServiceNotice>> {
        let url = self.url(&["servicenotices"]);
        self.get_list(url, "ServiceNotice").await
    }
}

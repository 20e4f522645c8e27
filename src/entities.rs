//! Record types mirroring the JSON objects returned by the AC Transit API.
//!
//! Field names on the wire are PascalCase; every record is read-only once
//! decoded.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A physical transit stop.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Stop {
    pub stop_id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Next scheduled departure from this stop, if any. Only the time of
    /// day is meaningful; the date part is filler from the upstream
    /// service.
    pub scheduled_time: Option<String>,
}

/// Realtime estimate of a vehicle's departure from a stop.
///
/// `prediction_date_time` is when the vehicle reported its deviation;
/// accuracy of `predicted_departure` diminishes as that timestamp ages.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Prediction {
    pub stop_id: i64,
    pub trip_id: i64,
    pub vehicle_id: i64,
    pub route_name: String,
    pub predicted_delay_in_seconds: i32,
    pub predicted_departure: String,
    pub prediction_date_time: String,
}

/// Realtime position report for a single vehicle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Vehicle {
    pub vehicle_id: i64,
    /// The trip the vehicle is currently servicing.
    pub current_trip_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    /// Compass direction the vehicle is facing, in degrees.
    pub heading: i32,
    pub time_last_reported: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Route {
    pub route_id: String,
    /// Route name as shown to the public.
    pub name: String,
    pub description: String,
}

/// A single scheduled run of a vehicle along a route.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Trip {
    pub trip_id: i64,
    pub route_name: String,
    pub schedule_type: ScheduleType,
    pub start_time: String,
    pub direction: String,
}

/// Which day-of-week schedule a trip runs on.
///
/// Decoded from the integer code used on the wire. Holidays run the
/// Sunday schedule by convention of the upstream service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ScheduleType {
    Weekday = 0,
    Saturday = 5,
    Sunday = 6,
}

/// An ordered waypoint along a trip's path.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct TimePoint {
    pub trip_id: i64,
    /// Position of this waypoint along the trip; lower values come first.
    pub sequence: i32,
    pub latitude: f64,
    pub longitude: f64,
}

/// Estimated travel between two stops on a route.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct TripEstimate {
    pub route_name: String,
    pub origin_stop_id: i64,
    pub destination_stop_id: i64,
    pub expected_departure_time: String,
    pub trip_duration: String,
    pub vehicle_id: i64,
}

/// Metadata about the currently published GTFS schedule.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct GtfsScheduleInfo {
    pub updated_date: String,
    pub earliest_service_date: String,
    pub latest_service_date: String,
}

/// Agency-issued alert about delays, detours or changes to service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceNotice {
    pub post_date: String,
    pub title: String,
    pub notice_text: String,
    pub url: String,
    pub impacted_routes: Vec<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_deserialize_stop() {
        let json = r#"{
            "StopId": 58123,
            "Name": "3rd St:Santa Clara Av",
            "Latitude": 37.7732681,
            "Longitude": -122.2882275,
            "ScheduledTime": null
        }"#;

        let stop: Stop = serde_json::from_str(json).unwrap();
        assert_eq!(stop.stop_id, 58123);
        assert_eq!(stop.name, "3rd St:Santa Clara Av");
        assert_eq!(stop.latitude, 37.7732681);
        assert_eq!(stop.longitude, -122.2882275);
        assert_eq!(stop.scheduled_time, None);
    }

    #[test]
    fn test_deserialize_prediction() {
        let json = r#"{
            "StopId": 56707,
            "TripId": 5155418,
            "VehicleId": 5021,
            "RouteName": "19",
            "PredictedDelayInSeconds": 540,
            "PredictedDeparture": "2017-01-11T17:31:00",
            "PredictionDateTime": "2017-01-11T17:10:41"
        }"#;

        let prediction: Prediction = serde_json::from_str(json).unwrap();
        assert_eq!(prediction.stop_id, 56707);
        assert_eq!(prediction.trip_id, 5155418);
        assert_eq!(prediction.vehicle_id, 5021);
        assert_eq!(prediction.route_name, "19");
        assert_eq!(prediction.predicted_delay_in_seconds, 540);
        assert_eq!(prediction.predicted_departure, "2017-01-11T17:31:00");
        assert_eq!(prediction.prediction_date_time, "2017-01-11T17:10:41");
    }

    #[test]
    fn test_deserialize_vehicle() {
        let json = r#"{
            "VehicleId": 1,
            "CurrentTripId": 2,
            "Latitude": 37.8,
            "Longitude": -122.27,
            "Heading": 90,
            "TimeLastReported": "2017-02-12T18:42:34.7670857-08:00"
        }"#;

        let vehicle: Vehicle = serde_json::from_str(json).unwrap();
        assert_eq!(vehicle.vehicle_id, 1);
        assert_eq!(vehicle.current_trip_id, 2);
        assert_eq!(vehicle.heading, 90);
        assert_eq!(vehicle.time_last_reported, "2017-02-12T18:42:34.7670857-08:00");
    }

    #[test]
    fn test_deserialize_trip_schedule_types() {
        for (code, expected) in [
            (0, ScheduleType::Weekday),
            (5, ScheduleType::Saturday),
            (6, ScheduleType::Sunday),
        ] {
            let json = format!(
                r#"{{
                    "TripId": 5155418,
                    "RouteName": "51A",
                    "ScheduleType": {},
                    "StartTime": "2017-02-13T06:15:00",
                    "Direction": "Northbound"
                }}"#,
                code
            );

            let trip: Trip = serde_json::from_str(&json).unwrap();
            assert_eq!(trip.schedule_type, expected);
        }
    }

    #[test]
    fn test_unknown_schedule_type_fails() {
        let err = serde_json::from_str::<ScheduleType>("3").unwrap_err();
        assert!(err.to_string().contains("3"));
    }

    #[test]
    fn test_missing_field_names_key() {
        let json = r#"{
            "StopId": 58123,
            "Latitude": 37.7732681,
            "Longitude": -122.2882275,
            "ScheduledTime": null
        }"#;

        let err = serde_json::from_str::<Stop>(json).unwrap_err();
        assert!(err.to_string().contains("Name"), "got: {}", err);
    }

    #[test]
    fn test_deserialize_service_notice() {
        let json = r#"{
            "PostDate": "2017-02-13T00:57:45.0014771-08:00",
            "Title": "Line 51A detour",
            "NoticeText": "Stops on Santa Clara Av are temporarily closed.",
            "Url": "http://www.actransit.org/servicebulletins/",
            "ImpactedRoutes": ["51A", "51B"]
        }"#;

        let notice: ServiceNotice = serde_json::from_str(json).unwrap();
        assert_eq!(notice.title, "Line 51A detour");
        assert_eq!(notice.impacted_routes, vec!["51A", "51B"]);
    }

    #[test]
    fn test_deserialize_gtfs_schedule_info() {
        let json = r#"{
            "UpdatedDate": "2017-02-13T11:19:49.9671828-08:00",
            "EarliestServiceDate": "2016-12-18T00:00:00",
            "LatestServiceDate": "2017-03-25T00:00:00"
        }"#;

        let info: GtfsScheduleInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.earliest_service_date, "2016-12-18T00:00:00");
    }

    #[test]
    fn test_stop_round_trips() {
        let stop = Stop {
            stop_id: 55892,
            name: "Broadway:20th St".to_string(),
            latitude: 37.8043514,
            longitude: -122.2708021,
            scheduled_time: Some("0001-01-01T07:42:00".to_string()),
        };

        let json = serde_json::to_value(&stop).unwrap();
        assert_eq!(json["StopId"], 55892);
        let back: Stop = serde_json::from_value(json).unwrap();
        assert_eq!(back, stop);
    }
}

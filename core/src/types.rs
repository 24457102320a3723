//! Wire DTOs for the rides API.
//!
//! # Design
//! These types mirror the server's JSON schema but are defined independently
//! of the mock-server crate; integration tests catch any schema drift between
//! the two. The backend speaks camelCase, so every wire type carries
//! `#[serde(rename_all = "camelCase")]` and the Rust fields stay snake_case.

use serde::{Deserialize, Serialize};

/// A user account as returned inside a login response. `user_type` is
/// free-form server-side (e.g. "passenger", "driver") and is not validated
/// here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub user_type: String,
}

/// Credentials sent to `POST /login`. Transient — never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload. `token` is an opaque session credential the
/// client attaches to subsequent ride-endpoint requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: User,
}

/// A trip booking intent. Coordinates are decimal degrees; no range
/// validation happens client-side. `specialInstructions` is omitted from the
/// wire body entirely when not set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RideRequest {
    pub pickup_latitude: f64,
    pub pickup_longitude: f64,
    pub pickup_address: String,
    pub dropoff_latitude: f64,
    pub dropoff_longitude: f64,
    pub dropoff_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

/// A candidate driver as computed server-side. Decoded only — the client
/// never constructs these. `rating` is nominally 0–5 but unchecked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub driver_id: String,
    pub driver_name: String,
    pub vehicle_info: String,
    pub rating: f64,
    pub distance_km: f64,
    pub estimated_arrival_minutes: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_serializes_camel_case() {
        let req = LoginRequest {
            email: "amina@rides.example".to_string(),
            password: "safiri123".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["email"], "amina@rides.example");
        assert_eq!(json["password"], "safiri123");
    }

    #[test]
    fn user_wire_keys_are_camel_case() {
        let user = User {
            id: "u-1".to_string(),
            first_name: "Amina".to_string(),
            last_name: "Odhiambo".to_string(),
            email: "amina@rides.example".to_string(),
            phone_number: "+254700000001".to_string(),
            user_type: "passenger".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["firstName"], "Amina");
        assert_eq!(json["phoneNumber"], "+254700000001");
        assert_eq!(json["userType"], "passenger");
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn ride_request_omits_absent_special_instructions() {
        let req = RideRequest {
            pickup_latitude: -1.2921,
            pickup_longitude: 36.8219,
            pickup_address: "Kenyatta Ave".to_string(),
            dropoff_latitude: -1.3032,
            dropoff_longitude: 36.8856,
            dropoff_address: "South C".to_string(),
            special_instructions: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("specialInstructions").is_none());
        assert_eq!(json["pickupAddress"], "Kenyatta Ave");
        assert_eq!(json["dropoffLatitude"], -1.3032);
    }

    #[test]
    fn ride_request_keeps_present_special_instructions() {
        let req = RideRequest {
            pickup_latitude: 0.0,
            pickup_longitude: 0.0,
            pickup_address: "A".to_string(),
            dropoff_latitude: 0.0,
            dropoff_longitude: 0.0,
            dropoff_address: "B".to_string(),
            special_instructions: Some("call on arrival".to_string()),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["specialInstructions"], "call on arrival");
    }

    #[test]
    fn ride_request_roundtrips_through_json() {
        let req = RideRequest {
            pickup_latitude: -1.2921,
            pickup_longitude: 36.8219,
            pickup_address: "Kenyatta Ave".to_string(),
            dropoff_latitude: -1.3032,
            dropoff_longitude: 36.8856,
            dropoff_address: "South C".to_string(),
            special_instructions: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        let back: RideRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, req);
    }

    #[test]
    fn driver_decodes_from_camel_case() {
        let body = r#"{
            "driverId": "d-42",
            "driverName": "John Kamau",
            "vehicleInfo": "White Toyota Axio KDA 123A",
            "rating": 4.8,
            "distanceKm": 1.2,
            "estimatedArrivalMinutes": 4
        }"#;
        let driver: Driver = serde_json::from_str(body).unwrap();
        assert_eq!(driver.driver_id, "d-42");
        assert_eq!(driver.estimated_arrival_minutes, 4);
    }

    #[test]
    fn driver_rejects_missing_fields() {
        let result: Result<Driver, _> = serde_json::from_str(r#"{"driverId":"d-1"}"#);
        assert!(result.is_err());
    }
}

//! In-process ride-hailing backend for tests.
//!
//! Serves the three endpoints the client speaks, nested under `/api/v1`:
//! login against one seeded account, ride-request creation, and a
//! nearby-driver lookup over a fixed fleet filtered by radius. Wire keys are
//! camelCase, matching the real backend. DTOs here are deliberately defined
//! independently of the client crate so integration tests catch schema drift.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const SEED_EMAIL: &str = "amina@rides.example";
pub const SEED_PASSWORD: &str = "safiri123";
pub const SEED_FIRST_NAME: &str = "Amina";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub user_type: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: User,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
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

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub driver_id: String,
    pub driver_name: String,
    pub vehicle_info: String,
    pub rating: f64,
    pub distance_km: f64,
    pub estimated_arrival_minutes: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedRide {
    pub id: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
struct NearbyParams {
    latitude: f64,
    longitude: f64,
    #[serde(default = "default_radius")]
    radius: u32,
}

fn default_radius() -> u32 {
    5
}

pub struct Backend {
    user: User,
    password: String,
    drivers: Vec<Driver>,
    rides: RwLock<Vec<RideRequest>>,
}

pub type Db = Arc<Backend>;

fn seed() -> Backend {
    Backend {
        user: User {
            id: "u-1".to_string(),
            first_name: SEED_FIRST_NAME.to_string(),
            last_name: "Odhiambo".to_string(),
            email: SEED_EMAIL.to_string(),
            phone_number: "+254700000001".to_string(),
            user_type: "passenger".to_string(),
        },
        password: SEED_PASSWORD.to_string(),
        drivers: vec![
            Driver {
                driver_id: "d-1".to_string(),
                driver_name: "John Kamau".to_string(),
                vehicle_info: "White Toyota Axio KDA 123A".to_string(),
                rating: 4.8,
                distance_km: 1.2,
                estimated_arrival_minutes: 4,
            },
            Driver {
                driver_id: "d-2".to_string(),
                driver_name: "Grace Wanjiru".to_string(),
                vehicle_info: "Silver Mazda Demio KCX 456B".to_string(),
                rating: 4.6,
                distance_km: 3.8,
                estimated_arrival_minutes: 11,
            },
            Driver {
                driver_id: "d-3".to_string(),
                driver_name: "Peter Otieno".to_string(),
                vehicle_info: "Blue Honda Fit KDB 789C".to_string(),
                rating: 4.9,
                distance_km: 9.5,
                estimated_arrival_minutes: 24,
            },
        ],
        rides: RwLock::new(Vec::new()),
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(seed());
    Router::new()
        .nest(
            "/api/v1",
            Router::new()
                .route("/login", post(login))
                .route("/ride_requests", post(create_ride_request))
                .route("/ride_requests/nearby_drivers", get(nearby_drivers)),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn login(
    State(db): State<Db>,
    Json(input): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, Json<serde_json::Value>)> {
    if input.email == db.user.email && input.password == db.password {
        return Ok(Json(LoginResponse {
            message: "Login successful".to_string(),
            token: Uuid::new_v4().to_string(),
            user: db.user.clone(),
        }));
    }
    Err((
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({"error": "invalid credentials"})),
    ))
}

async fn create_ride_request(
    State(db): State<Db>,
    Json(input): Json<RideRequest>,
) -> (StatusCode, Json<CreatedRide>) {
    db.rides.write().await.push(input);
    let created = CreatedRide {
        id: Uuid::new_v4().to_string(),
        status: "pending".to_string(),
    };
    (StatusCode::CREATED, Json(created))
}

async fn nearby_drivers(
    State(db): State<Db>,
    Query(params): Query<NearbyParams>,
) -> Json<Vec<Driver>> {
    // The fleet is seeded with fixed distances; the passenger position only
    // matters insofar as the real backend would use it.
    let _ = (params.latitude, params.longitude);
    let within = db
        .drivers
        .iter()
        .filter(|d| d.distance_km <= f64::from(params.radius))
        .cloned()
        .collect();
    Json(within)
}

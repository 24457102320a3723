//! Stateless HTTP request builder and response parser for the rides API.
//!
//! # Design
//! `RidesClient` holds a `base_url` and an optional session token and carries
//! no other state between calls. Each operation is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that consumes
//! an `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! this layer deterministic and free of I/O dependencies.
//!
//! Status interpretation follows the server's convention: any 2xx is success,
//! anything else is an `ApiError::Http` carrying the status and raw body.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Driver, LoginRequest, LoginResponse, RideRequest};

/// Radius sent to the nearby-drivers endpoint when the caller does not pick
/// one, in kilometres.
pub const DEFAULT_SEARCH_RADIUS_KM: u32 = 5;

const API_PREFIX: &str = "/api/v1";

/// Synchronous, sans-IO client for the rides API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. When a session token is set, ride endpoints carry
/// an `authorization: Bearer <token>` header; login never does.
#[derive(Debug, Clone)]
pub struct RidesClient {
    base_url: String,
    token: Option<String>,
}

impl RidesClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach the session token from a successful login. Subsequent ride
    /// endpoint requests are built with a bearer authorization header.
    pub fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    /// Drop the session token (logout). Later requests go out unauthenticated.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{API_PREFIX}{path}", self.base_url)
    }

    /// Bearer header for ride endpoints, empty when no token is set.
    fn auth_headers(&self) -> Vec<(String, String)> {
        match &self.token {
            Some(token) => vec![("authorization".to_string(), format!("Bearer {token}"))],
            None => Vec::new(),
        }
    }

    pub fn build_login(&self, input: &LoginRequest) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.url("/login"),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_login(&self, response: HttpResponse) -> Result<LoginResponse, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub fn build_create_ride_request(&self, input: &RideRequest) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Encode(e.to_string()))?;
        let mut headers = vec![("content-type".to_string(), "application/json".to_string())];
        headers.extend(self.auth_headers());
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.url("/ride_requests"),
            headers,
            body: Some(body),
        })
    }

    /// The ride-creation response body is an external contract this client
    /// does not depend on; only the status is inspected.
    pub fn parse_create_ride_request(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(&response)
    }

    pub fn build_nearby_drivers(
        &self,
        latitude: f64,
        longitude: f64,
        radius: Option<u32>,
    ) -> HttpRequest {
        let radius = radius.unwrap_or(DEFAULT_SEARCH_RADIUS_KM);
        let path = format!(
            "{}?latitude={latitude}&longitude={longitude}&radius={radius}",
            self.url("/ride_requests/nearby_drivers")
        );
        HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: self.auth_headers(),
            body: None,
        }
    }

    /// An empty or blank 2xx body decodes to an empty list, never an error.
    pub fn parse_nearby_drivers(&self, response: HttpResponse) -> Result<Vec<Driver>, ApiError> {
        check_success(&response)?;
        if response.body.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Any 2xx passes; everything else becomes `ApiError::Http`.
fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

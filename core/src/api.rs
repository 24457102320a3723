//! High-level surface a UI collaborator calls: build, execute, parse.
//!
//! Each method issues exactly one HTTP request and blocks the caller until a
//! response or a transport failure; every outcome is a returned `Result`,
//! never a panic or a hidden retry. A successful login stores the returned
//! session token on the client, so later ride-endpoint calls go out with a
//! bearer authorization header.

use crate::client::RidesClient;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{Driver, LoginRequest, LoginResponse, RideRequest};

/// Executing client for the rides API.
#[derive(Debug, Clone)]
pub struct RidesApi {
    client: RidesClient,
    transport: Transport,
}

impl RidesApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: RidesClient::new(base_url),
            transport: Transport::new(),
        }
    }

    /// `POST /login`. On success the session token from the response is
    /// retained for subsequent calls.
    pub fn login(&mut self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let input = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let req = self.client.build_login(&input)?;
        let resp = self.transport.execute(req)?;
        let login = self.client.parse_login(resp)?;
        self.client.set_token(&login.token);
        Ok(login)
    }

    /// Forget the session token. Purely local; the API has no logout endpoint.
    pub fn logout(&mut self) {
        self.client.clear_token();
    }

    /// `POST /ride_requests`. Only the response status is interpreted.
    pub fn create_ride_request(&self, input: &RideRequest) -> Result<(), ApiError> {
        let req = self.client.build_create_ride_request(input)?;
        let resp = self.transport.execute(req)?;
        self.client.parse_create_ride_request(resp)
    }

    /// `GET /ride_requests/nearby_drivers`. `radius` in kilometres, server
    /// default 5 when `None`.
    pub fn nearby_drivers(
        &self,
        latitude: f64,
        longitude: f64,
        radius: Option<u32>,
    ) -> Result<Vec<Driver>, ApiError> {
        let req = self.client.build_nearby_drivers(latitude, longitude, radius);
        let resp = self.transport.execute(req)?;
        self.client.parse_nearby_drivers(resp)
    }

    /// Access to the underlying sans-IO client, mainly for inspecting the
    /// current token.
    pub fn client(&self) -> &RidesClient {
        &self.client
    }
}

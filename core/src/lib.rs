//! Client core for a ride-hailing HTTP API.
//!
//! # Overview
//! Four concerns, composed top-down:
//! - `client`: sans-IO request building and response parsing for the three
//!   API operations (login, ride-request creation, nearby-driver lookup).
//! - `transport`: a blocking ureq executor turning built requests into
//!   responses, surfacing transport failures as `ApiError::Network`.
//! - `api`: the executing surface a UI layer calls — one HTTP request per
//!   call, result returned to the caller, token threading after login.
//! - `session`: a file-backed login flag + display name surviving restarts.
//!
//! # Design
//! - `RidesClient` is sans-IO; the build/parse split keeps the wire contract
//!   testable without a network.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.
//! - Types use owned `String` / `Vec` fields to simplify FFI mapping.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod session;
pub mod transport;
pub mod types;

pub use api::RidesApi;
pub use client::{RidesClient, DEFAULT_SEARCH_RADIUS_KM};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use session::{SessionStore, DEFAULT_USER_NAME};
pub use types::{Driver, LoginRequest, LoginResponse, RideRequest, User};

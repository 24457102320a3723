//! Blocking executor for built `HttpRequest` values.
//!
//! # Design
//! `Transport` owns a `ureq::Agent` with status-as-error disabled, so 4xx/5xx
//! responses come back as data and status interpretation stays in the parse
//! layer. The only error this module produces is `ApiError::Network`: no
//! response was obtained at all (DNS failure, refused connection, timeout).
//! One call, one request — no retry, no caching, transport-default timeouts.

use std::fmt;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes `HttpRequest` values over real HTTP, blocking until a response
/// or a transport failure.
#[derive(Clone)]
pub struct Transport {
    agent: ureq::Agent,
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport").finish_non_exhaustive()
    }
}

impl Transport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Run one HTTP round-trip. Any failure to obtain a response maps to
    /// `ApiError::Network` carrying the underlying message.
    pub fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => {
                let mut builder = self.agent.get(&req.path);
                for (key, value) in &req.headers {
                    builder = builder.header(key, value);
                }
                builder.call()
            }
            (HttpMethod::Post, Some(body)) => {
                let mut builder = self.agent.post(&req.path);
                for (key, value) in &req.headers {
                    builder = builder.header(key, value);
                }
                builder.send(body.as_bytes())
            }
            (HttpMethod::Post, None) => {
                let mut builder = self.agent.post(&req.path);
                for (key, value) in &req.headers {
                    builder = builder.header(key, value);
                }
                builder.send_empty()
            }
        };

        let mut response = result.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_refused_yields_network_error() {
        // Bind-then-drop guarantees nothing listens on the port.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = Transport::new();
        let req = HttpRequest {
            method: HttpMethod::Get,
            path: format!("http://{addr}/api/v1/ride_requests/nearby_drivers?latitude=0&longitude=0&radius=5"),
            headers: Vec::new(),
            body: None,
        };
        let err = transport.execute(req).unwrap_err();
        assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
    }
}

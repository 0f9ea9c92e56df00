//! Single-request HTTP transport to the storage microservice.

use std::fmt;
use std::io::Read;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::error::GatewayError;

/// Could not reach the storage backend at all (connection refused,
/// timeout, DNS failure). Distinct from any HTTP status the backend
/// returns.
#[derive(Debug, Error)]
#[error("could not reach storage backend: {message}")]
pub struct TransportError {
    pub message: String,
}

/// HTTP method for one gateway round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Literal status and payload of one backend response.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    /// Decode the payload as JSON.
    pub fn json<T: DeserializeOwned>(&self, context: &str) -> Result<T, GatewayError> {
        serde_json::from_slice(&self.body).map_err(|source| GatewayError::Decode {
            context: context.to_string(),
            source,
        })
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// One request/response pair against the storage backend.
///
/// Implementations perform exactly one request: no retry, no redirect
/// following, no connection reuse guarantee. Network-level failures
/// surface as [`TransportError`]; every HTTP status, 4xx/5xx included,
/// comes back as a plain [`Response`] for the caller to interpret.
pub trait Transport {
    fn call(
        &self,
        method: Method,
        route: &str,
        body: Option<&Value>,
    ) -> Result<Response, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn call(
        &self,
        method: Method,
        route: &str,
        body: Option<&Value>,
    ) -> Result<Response, TransportError> {
        (**self).call(method, route, body)
    }
}

/// Default per-call timeout. A hung backend must fail as a transport
/// error, not block the caller forever.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// `ureq`-backed transport. One agent per client; every call is an
/// independent request with a hard timeout.
pub struct HttpTransport {
    agent: ureq::Agent,
    base: String,
}

impl HttpTransport {
    pub fn new(addr: &str, port: u16) -> Self {
        Self::with_timeout(addr, port, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(addr: &str, port: u16, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            base: format!("http://{addr}:{port}"),
        }
    }
}

impl Transport for HttpTransport {
    fn call(
        &self,
        method: Method,
        route: &str,
        body: Option<&Value>,
    ) -> Result<Response, TransportError> {
        let url = format!("{}{}", self.base, route);
        log::debug!("{method} {url}");

        let request = self.agent.request(method.as_str(), &url);
        let result = match body {
            Some(json) => request.send_json(json),
            None => request.call(),
        };

        let response = match result {
            Ok(response) => response,
            // Non-2xx is a normal answer at this layer.
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(err)) => {
                return Err(TransportError {
                    message: err.to_string(),
                })
            }
        };

        let status = response.status();
        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|err| TransportError {
                message: err.to_string(),
            })?;

        Ok(Response { status, body })
    }
}

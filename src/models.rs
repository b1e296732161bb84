use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A domain mapping managed by the proxy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProxyRoute {
    pub id: u64,
    pub domain: String,
    pub target_path: String,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub enforce_auth: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProxyRoute {
    pub domain: String,
    pub target_path: String,
    pub is_static: bool,
    pub enforce_auth: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteValidationError {
    #[error("domain is required")]
    EmptyDomain,
    #[error("domain must not include a scheme")]
    DomainHasScheme,
    #[error("domain must not contain '/' or whitespace")]
    InvalidDomain,
    #[error("target is required")]
    EmptyTarget,
}

impl NewProxyRoute {
    /// Trims the form input and rejects anything the proxy could not match
    /// against a request host.
    pub fn validated(self) -> Result<Self, RouteValidationError> {
        let domain = self.domain.trim().to_string();
        let target_path = self.target_path.trim().to_string();

        if domain.is_empty() {
            return Err(RouteValidationError::EmptyDomain);
        }
        if domain.contains("://") {
            return Err(RouteValidationError::DomainHasScheme);
        }
        if domain.contains('/') || domain.chars().any(char::is_whitespace) {
            return Err(RouteValidationError::InvalidDomain);
        }
        if target_path.is_empty() {
            return Err(RouteValidationError::EmptyTarget);
        }

        Ok(Self {
            domain,
            target_path,
            ..self
        })
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteRouteRequest<'a> {
    #[serde(rename = "Domain")]
    pub domain: &'a str,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub redirect: String,
}

/// Request summary over the last 30 days.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Stats {
    pub total_requests: i64,
    pub total_requests_resolved: i64,
    pub server_error_count: i64,
    pub client_error_count: i64,
    pub not_found_count: i64,
    #[serde(rename = "avg_latency_ms")]
    pub avg_latency: f64,
}

/// Page size of `GET /latios-api/logs`, fixed by the proxy.
pub const LOGS_PAGE_SIZE: usize = 100;

/// One proxied request as recorded by the proxy.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RequestLog {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    pub method: String,
    pub host: String,
    pub path: String,
    pub status_code: u16,
    pub latency_ms: i64,
    pub remote_addr: String,
}

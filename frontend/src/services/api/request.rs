//! # Request Descriptor
//!
//! [`ApiRequest`] describes one outbound call before the gateway turns it into
//! an [`HttpRequest`](super::transport::HttpRequest): path relative to the
//! base URL, method, caller headers, optional JSON body and whether a bearer
//! token is required.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;

use crate::core::error::{ApiError, Result};

#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
    pub requires_auth: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: None,
            requires_auth: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach the stored bearer token; the call fails locally if there is none.
    pub fn authenticated(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Serialize `body` as the JSON request body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let body = serde_json::to_string(body).map_err(|e| {
            tracing::error!(error = %e, path = %self.path, "Failed to serialize request body");
            ApiError::invalid_request(e.to_string())
        })?;
        self.body = Some(body);
        Ok(self)
    }

    /// Add a caller header. Caller headers override the gateway defaults.
    pub fn header(mut self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ApiError::invalid_request(format!("header name '{name}': {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ApiError::invalid_request(format!("header value for '{name}': {e}")))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Append encoded query parameters; no-op for an empty list.
    pub fn query(mut self, pairs: &[(&str, String)]) -> Self {
        if pairs.is_empty() {
            return self;
        }
        let query = pairs
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&");
        let separator = if self.path.contains('?') { '&' } else { '?' };
        self.path.push(separator);
        self.path.push_str(&query);
        self
    }
}

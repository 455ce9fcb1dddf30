//! API utilities for frontend-backend communication
//!
//! Resolves the products API base URL and defines the error type shared by
//! every API call.

use thiserror::Error;

/// Compile-time override for the API location, e.g. `https://shop.example/api/v1`.
const API_URL_OVERRIDE: Option<&str> = option_env!("PRODUCTS_API_URL");

/// Path prefix appended to the window-derived base.
const API_PREFIX: &str = "/api/v1";

/// Port the API server listens on when no override is set.
const API_PORT: u16 = 3000;

/// Where the products API lives. Provided once through context by `App`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `PRODUCTS_API_URL` if it was set at build time, otherwise the
    /// current page host on port 3000.
    pub fn from_env() -> Self {
        match API_URL_OVERRIDE {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(format!("{}{}", api_base(), API_PREFIX)),
        }
    }

    /// Build a full API URL from a path such as `/products/3`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Ошибка обращения к API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response.
    #[error("failed to send request: {0}")]
    Network(String),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Decode(String),

    /// The server answered but did not confirm the operation.
    #[error("operation was not confirmed: {0}")]
    Business(String),
}

impl ApiError {
    /// Transport-level failure, as opposed to a business rejection.
    pub fn is_network(&self) -> bool {
        !matches!(self, ApiError::Business(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_paths() {
        let config = ApiConfig::new("https://api.example.com/api/v1/");
        assert_eq!(config.base_url, "https://api.example.com/api/v1");
        assert_eq!(config.url("/products"), "https://api.example.com/api/v1/products");
        assert_eq!(config.url("products/4"), "https://api.example.com/api/v1/products/4");
    }

    #[test]
    fn test_error_classification() {
        assert!(ApiError::Status(500).is_network());
        assert!(ApiError::Network("offline".into()).is_network());
        assert!(ApiError::Decode("eof".into()).is_network());
        assert!(!ApiError::Business("rta=false".into()).is_network());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(404).to_string(), "server responded with HTTP 404");
    }
}

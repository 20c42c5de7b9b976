//! API configuration for frontend-backend communication.

/// Explicit API endpoint configuration handed to the data-access layer.
///
/// Provided through context at the application root instead of living in an
/// ambient global, so pages and tests can point the client at any backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Derive the backend address from the current window location,
    /// using port 9000 for the API server.
    ///
    /// Falls back to an empty base (same-origin relative URLs) if window is
    /// not available.
    pub fn from_window() -> Self {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Self::new(String::new()),
        };
        let location = window.location();
        let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
        let hostname = location
            .hostname()
            .unwrap_or_else(|_| "127.0.0.1".to_string());
        Self::new(format!("{}//{}:9000", protocol, hostname))
    }

    /// Build a full URL from an API path (should start with "/api/").
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

//! API utilities for frontend-backend communication
//!
//! In production the backend serves the built frontend, so API calls stay on
//! the same origin. Under `trunk serve` the page lives on the dev port and the
//! backend is reached on its own port.

/// Port `trunk serve` uses by default
const TRUNK_DEV_PORT: &str = "8080";

/// Default backend port (see `[server] port` in config.toml)
const BACKEND_DEV_PORT: &str = "3000";

/// Get the base URL for API requests
///
/// # Returns
/// - `""` when the page is served by the backend itself
/// - `"http://localhost:3000"` style base when running under `trunk serve`
/// - Empty string if window is not available
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let port = location.port().unwrap_or_default();
    if port != TRUNK_DEV_PORT {
        return String::new();
    }

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    join_base(&protocol, &hostname, BACKEND_DEV_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/config");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn join_base(protocol: &str, hostname: &str, port: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_base() {
        assert_eq!(
            join_base("http:", "localhost", BACKEND_DEV_PORT),
            "http://localhost:3000"
        );
        assert_eq!(
            join_base("https:", "creator.example.com", "8443"),
            "https://creator.example.com:8443"
        );
    }
}

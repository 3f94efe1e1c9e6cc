//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Build-time override for the catalog API, e.g.
/// `CATALOG_API_URL=https://catalog.example.com/api trunk build`
const CONFIGURED_API_BASE: Option<&str> = option_env!("CATALOG_API_URL");

/// Get the base URL for API requests
///
/// Uses `CATALOG_API_URL` when it was set at build time. Otherwise the base
/// is derived from the current window location, using port 3000 for the
/// backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com/api"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(configured) = CONFIGURED_API_BASE.filter(|url| !url.trim().is_empty()) {
        return configured.trim().trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/products");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Joins base and path with exactly one slash between them
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://localhost:3000", "/products"), "http://localhost:3000/products");
        assert_eq!(join_url("https://x.io/api/", "/product/42"), "https://x.io/api/product/42");
        assert_eq!(join_url("https://x.io/api", "update-selected"), "https://x.io/api/update-selected");
        assert_eq!(join_url("https://x.io/api/", ""), "https://x.io/api");
    }
}

//! API utilities for frontend-backend communication
//!
//! The backend always listens on [`API_PORT`] of the host that served the
//! page, so the base URL is derived from `window.location` at call time.

/// Port of the Contribuinte API
pub const API_PORT: u16 = 8000;

/// Host used when no browser window is available (tests, workers)
const FALLBACK_HOST: &str = "127.0.0.1";

/// Build an API base URL from its parts.
///
/// `protocol` is taken as `window.location.protocol` reports it, i.e. with
/// the trailing colon (`"https:"`); a missing colon is tolerated.
pub fn build_api_base(protocol: &str, hostname: &str, port: u16) -> String {
    let protocol = protocol.trim_end_matches(':');
    let protocol = if protocol.is_empty() { "http" } else { protocol };
    let hostname = if hostname.is_empty() {
        FALLBACK_HOST
    } else {
        hostname
    };
    format!("{}://{}:{}", protocol, hostname, port)
}

/// Get the base URL for API requests
///
/// # Returns
/// - API base URL like "http://localhost:8000"
/// - "http://127.0.0.1:8000" if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return build_api_base("http:", FALLBACK_HOST, API_PORT),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| FALLBACK_HOST.to_string());
    build_api_base(&protocol, &hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/contribuinte/cpf/77845896512");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Percent-encode a single path segment (client names may contain spaces
/// and slashes).
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

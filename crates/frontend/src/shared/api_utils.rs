//! API utilities for frontend-backend communication

/// Backend port used when no explicit origin is configured.
const BACKEND_PORT: u16 = 5000;

/// Get the base URL for backend requests
///
/// Set `CHAT_BACKEND_URL` at build time to point the widget at a fixed
/// origin; otherwise the origin is derived from the current window
/// location with the default backend port.
///
/// # Returns
/// - Base URL like "http://localhost:5000" or "https://example.com:5000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(url) = option_env!("CHAT_BACKEND_URL") {
        return url.trim_end_matches('/').to_string();
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
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full backend URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/chat");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

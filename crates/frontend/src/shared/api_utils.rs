//! API utilities for frontend-backend communication
//!
//! Provides the externally-configured endpoint of the customers collection.

/// Collection endpoint for the customers resource.
///
/// Prefers the compile-time `CUSTOMERS_API_URL` override; otherwise derives
/// the backend address from the current window location, using port 3000 for
/// the backend server.
///
/// # Returns
/// - Collection URL like "http://localhost:3000/api/clientes"
/// - Empty string if window is not available
pub fn customers_endpoint() -> String {
    if let Some(configured) = option_env!("CUSTOMERS_API_URL") {
        return configured.trim_end_matches('/').to_string();
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
    format!("{}//{}:3000/api/clientes", protocol, hostname)
}

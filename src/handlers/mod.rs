//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (validated JSON body, URL params)
//! 2. Calls the matching persistence service
//! 3. Returns HTTP response (JSON, status code)

/// Component endpoints
pub mod components;
/// Exhibition endpoints
pub mod exhibitions;
/// Service health endpoint
pub mod health;

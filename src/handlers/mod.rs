//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, query string)
//! 2. Delegates to a service for validation and database work
//! 3. Returns HTTP response (JSON, status code)

/// Health check endpoint
pub mod health;
/// Key copy endpoints
pub mod key_copies;
/// Key endpoints
pub mod keys;
/// Staff endpoints
pub mod staff;

//! HTTP middleware components.

/// CORS policy for the browser front end
pub mod cors;

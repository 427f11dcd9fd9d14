//! Key Registry Server
//!
//! REST API for keys, the physical copies made of them, and the staff
//! members they are handed out to. Every list endpoint shares one paginated,
//! name-filtered query engine (see [`query`]).
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries, migrations)
//! - **Format**: JSON requests/responses

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod query;
pub mod services;

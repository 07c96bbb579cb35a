//! API Module
//!
//! HTTP handlers and routing for the profile service REST API.
//!
//! # Endpoints
//! - `GET /profile/:name` - Character profile, served through the cache
//! - `DELETE /profile/:name` - Drop one cached profile
//! - `GET /character/:name` - Nexon basic info and union overview
//! - `GET /equipment/:name` - Nexon equipped items
//! - `GET /ranking/:name` - Nexon overall ranking
//! - `DELETE /cache` - Empty the cache
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

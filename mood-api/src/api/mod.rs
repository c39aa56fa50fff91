//! HTTP API handlers for mood-api

pub mod analyze;
pub mod buildinfo;
pub mod error;
pub mod health;

pub use analyze::analyze;
pub use buildinfo::buildinfo_routes;
pub use error::ApiError;
pub use health::health_routes;

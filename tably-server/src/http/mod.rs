//! HTTP layer
//!
//! Axum server with:
//! - Localhost-only CORS by default
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{run_server, AppState};

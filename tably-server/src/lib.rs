//! tably-server: HTTP backend for a restaurant reservation book
//!
//! Customers and reservations persisted in PostgreSQL, exposed over a
//! small JSON API. Domain values are validated at construction; an
//! invalid party size or start time never exists in memory.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::Config;
pub use http::{run_server, AppState};

//! Database layer - connection pool, migrations, and repositories
//!
//! # Design Principles
//!
//! - Bounded connection pool, shared by reference
//! - One statement per repository operation
//! - Constraint failures propagate to the caller unmodified

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;

//! Repository implementations for database access
//!
//! Each repository borrows the shared pool and issues exactly one
//! statement per operation. Sorting and substring matching are delegated
//! to Postgres.

pub mod customers;
pub mod reservations;

pub use customers::{CustomerRepo, DbError};
pub use reservations::ReservationRepo;

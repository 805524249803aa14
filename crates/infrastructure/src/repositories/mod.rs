//! Repository implementations for data persistence.
//!
//! This module provides the PostgreSQL-backed repository over the `users`
//! table.

mod user_repository;

pub use user_repository::*;

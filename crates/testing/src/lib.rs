//! Testing utilities for the user store
//!
//! This crate provides testing utilities including:
//! - Test fixtures for the `User` record
//! - A builder pattern for custom test data construction
//! - An in-memory mock repository
//! - Test database setup for integration suites
//!
//! # Examples
//!
//! ```
//! use user_store_testing::{create_test_user, UserBuilder};
//!
//! // Create a test user with randomized fields
//! let user = create_test_user();
//!
//! // Build a custom user
//! let ann = UserBuilder::new()
//!     .with_name("Ann")
//!     .with_age(30)
//!     .build();
//! assert_eq!(ann.name, "Ann");
//! ```

pub mod builders;
pub mod database;
pub mod fixtures;
pub mod mocks;

// Re-export commonly used types
pub use builders::UserBuilder;
pub use database::TestDatabase;
pub use fixtures::*;
pub use mocks::MockUserRepository;

// Re-export testing dependencies for convenience
pub use fake;
pub use proptest;
pub use testcontainers;

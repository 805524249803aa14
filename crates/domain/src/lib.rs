//! User Store Domain Types
//!
//! This crate provides the domain model for the user store: the [`User`]
//! record persisted in the `users` table. The record is deliberately plain;
//! the store is a thin translation layer and the domain carries no behavior
//! beyond construction.
//!
//! ## Usage
//!
//! ```rust
//! use user_store_domain::User;
//!
//! let user = User::new("1", "Ann", 30);
//! assert_eq!(user.id, "1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod user;

pub use user::User;

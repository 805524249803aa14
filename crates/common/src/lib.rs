//! Common utilities shared across the user store crates.
//!
//! The storage layer itself only emits `tracing` spans and events;
//! installing a subscriber is the embedding application's job, and
//! [`telemetry::init_tracing`] is the supported way to do it.

pub mod telemetry;

pub use telemetry::init_tracing;

/// Common error type used throughout the crate
pub type Result<T> = std::result::Result<T, anyhow::Error>;

//! User entity type.

use serde::{Deserialize, Serialize};

/// User account record, one row of the `users` table.
///
/// The identifier is supplied by the caller at creation time and is
/// immutable afterwards; the store never generates ids. A record read back
/// from storage always has all three fields populated; partial records do
/// not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Caller-supplied unique identifier.
    pub id: String,
    /// Display name, mutable.
    pub name: String,
    /// Age in years, mutable.
    pub age: i32,
}

impl User {
    /// Create a user record.
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
        }
    }
}

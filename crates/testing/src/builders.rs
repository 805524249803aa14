//! Fluent builder pattern for constructing test data.

use user_store_domain::User;

/// Builder for creating [`User`] test instances
#[derive(Clone)]
pub struct UserBuilder {
    id: String,
    name: String,
    age: i32,
}

impl UserBuilder {
    pub fn new() -> Self {
        Self {
            id: "user-1".to_string(),
            name: "Test User".to_string(),
            age: 30,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub fn build(self) -> User {
        User {
            id: self.id,
            name: self.name,
            age: self.age,
        }
    }
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Test fixtures for generating users with realistic data.

use fake::{faker::name::en::Name, Fake};
use user_store_domain::User;

/// Create a test user with a random id, name and age
pub fn create_test_user() -> User {
    create_test_user_with_id(format!(
        "user-{}",
        (1_000_000_000u64..9_999_999_999u64).fake::<u64>()
    ))
}

/// Create a test user with a fixed id and random name and age
pub fn create_test_user_with_id(id: impl Into<String>) -> User {
    User {
        id: id.into(),
        name: Name().fake(),
        age: (18..90).fake(),
    }
}

/// Create `count` test users with sequential ids (`user-0` .. `user-N`)
pub fn create_test_users(count: usize) -> Vec<User> {
    (0..count)
        .map(|i| create_test_user_with_id(format!("user-{i}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_users_are_fully_populated() {
        let user = create_test_user();
        assert!(!user.id.is_empty());
        assert!(!user.name.is_empty());
        assert!((18..90).contains(&user.age));
    }

    #[test]
    fn test_sequential_ids() {
        let users = create_test_users(3);
        let ids: Vec<_> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["user-0", "user-1", "user-2"]);
    }
}

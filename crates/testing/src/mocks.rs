//! Mock implementations for testing without database dependencies.

use parking_lot::RwLock;
use std::sync::Arc;
use user_store_domain::User;

/// In-memory mock of the user repository.
///
/// Mirrors the storage contract of the real repository: duplicate ids are
/// rejected, deletes and updates of absent ids are silent no-ops, and
/// listing windows rows in insertion order (the in-memory stand-in for the
/// backing store's implicit row order).
pub struct MockUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    pub async fn create(&self, user: User) -> anyhow::Result<()> {
        let mut users = self.users.write();
        if users.iter().any(|u| u.id == user.id) {
            anyhow::bail!("duplicate id: {}", user.id);
        }
        users.push(user);
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> anyhow::Result<()> {
        self.users.write().retain(|u| u.id != id);
        Ok(())
    }

    pub async fn update(&self, user: User) -> anyhow::Result<()> {
        if let Some(existing) = self.users.write().iter_mut().find(|u| u.id == user.id) {
            existing.name = user.name;
            existing.age = user.age;
        }
        Ok(())
    }

    pub async fn get(&self, id: &str) -> anyhow::Result<Option<User>> {
        Ok(self.users.read().iter().find(|u| u.id == id).cloned())
    }

    pub async fn list(&self, limit: u32, offset: u32) -> anyhow::Result<Vec<User>> {
        Ok(self
            .users
            .read()
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    pub fn count(&self) -> usize {
        self.users.read().len()
    }

    pub fn clear(&self) {
        self.users.write().clear();
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

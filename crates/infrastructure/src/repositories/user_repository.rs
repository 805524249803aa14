//! User repository implementation.
//!
//! PostgreSQL-backed implementation for user persistence operations. Each
//! operation is one round trip against the shared pool; the repository keeps
//! no state of its own and never caches rows.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use user_store_domain::User;

use crate::{Error, Result};

/// Repository trait for user operations.
///
/// Implementations hold only a shared pool handle and no mutable state, so
/// concurrent calls are independent; no ordering is guaranteed between them.
/// Cancellation follows the usual future semantics: dropping an in-flight
/// call (for instance under `tokio::time::timeout`) aborts the round trip
/// and returns the connection to the pool.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user row.
    ///
    /// Every field of `user` is persisted as given; the id must be unique.
    /// A duplicate id is rejected by the primary-key constraint and comes
    /// back as a generic [`Error::Database`], not as a dedicated kind.
    async fn create(&self, user: &User) -> Result<()>;

    /// Delete the row matching `id`.
    ///
    /// Deleting an id that does not exist is not an error: the statement
    /// affects zero rows and the call succeeds.
    async fn delete(&self, id: &str) -> Result<()>;

    /// Update `name` and `age` of the row matching `user.id`.
    ///
    /// No existence check is performed; when the id matches nothing the
    /// statement affects zero rows and the call still succeeds.
    async fn update(&self, user: &User) -> Result<()>;

    /// Fetch the user with the given id.
    ///
    /// Fails with [`Error::NotFound`] when no row matches, distinguishable
    /// from every operational failure so callers can branch on existence.
    async fn get(&self, id: &str) -> Result<User>;

    /// Fetch up to `limit` users, skipping the first `offset` rows.
    ///
    /// Rows come back in whatever order the database returns them; no
    /// ordering clause is issued. `limit == 0` and windows past the end of
    /// the table both yield an empty list, not an error. The unsigned
    /// parameters make negative ranges unrepresentable. A row that fails to
    /// decode partway through fails the whole call; no partial list is
    /// returned.
    async fn list(&self, limit: u32, offset: u32) -> Result<Vec<User>>;
}

/// Database row shape of a user.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
    age: i32,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            age: row.age,
        }
    }
}

/// PostgreSQL implementation of [`UserRepository`].
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PostgreSQL user repository over a shared pool handle.
    ///
    /// The handle is reference-counted; the repository borrows it for the
    /// duration of each call and never manages its lifecycle.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn create(&self, user: &User) -> Result<()> {
        sqlx::query("INSERT INTO users (id, name, age) VALUES ($1, $2, $3)")
            .bind(&user.id)
            .bind(&user.name)
            .bind(user.age)
            .execute(&self.pool)
            .await
            .map_err(|e| Error::database("create user", e))?;

        debug!(user_id = %user.id, "user created");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| Error::database("delete user", e))?;

        // Zero rows affected is the documented no-op, not a failure.
        debug!(user_id = %id, rows = result.rows_affected(), "user deleted");
        Ok(())
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn update(&self, user: &User) -> Result<()> {
        let result = sqlx::query("UPDATE users SET name = $1, age = $2 WHERE id = $3")
            .bind(&user.name)
            .bind(user.age)
            .bind(&user.id)
            .execute(&self.pool)
            .await
            .map_err(|e| Error::database("update user", e))?;

        debug!(user_id = %user.id, rows = result.rows_affected(), "user updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &str) -> Result<User> {
        let row = sqlx::query_as::<_, UserRow>("SELECT id, name, age FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Error::database("get user", e))?;

        // The "no rows" signal is classified before any generic wrapping so
        // the distinction survives the operation boundary.
        match row {
            Some(row) => Ok(row.into()),
            None => Err(Error::NotFound(format!("user {id}"))),
        }
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: u32, offset: u32) -> Result<Vec<User>> {
        let rows =
            sqlx::query_as::<_, UserRow>("SELECT id, name, age FROM users LIMIT $1 OFFSET $2")
                .bind(i64::from(limit))
                .bind(i64::from(offset))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| Error::database("list users", e))?;

        debug!(count = rows.len(), "users listed");
        Ok(rows.into_iter().map(User::from).collect())
    }
}

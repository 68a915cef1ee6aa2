//! User record persistence

use async_trait::async_trait;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{debug, warn};

use super::models::{NewUser, User};
use crate::common::{generate_user_id, safe_email_log};

/// Attempts at drawing a free user ID before giving up
const MAX_ID_ATTEMPTS: usize = 5;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email is already registered")]
    DuplicateEmail,

    #[error("could not allocate a unique user id after {0} attempts")]
    IdExhausted(usize),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Lookup and insert operations the registration flow needs
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Persists `user`, assigning its identifier
    async fn save(&self, user: NewUser) -> Result<User, StoreError>;
}

/// SQLite-backed store over the `users` table
#[derive(Debug, Clone)]
pub struct SqliteUserStore {
    db: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

enum UniqueColumn {
    Email,
    Id,
}

fn unique_violation(err: &sqlx::Error) -> Option<UniqueColumn> {
    let db_err = err.as_database_error()?;
    if !db_err.is_unique_violation() {
        return None;
    }
    // SQLite names the column: "UNIQUE constraint failed: users.email"
    if db_err.message().contains("users.email") {
        Some(UniqueColumn::Email)
    } else {
        Some(UniqueColumn::Id)
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.db)
            .await?;
        Ok(user)
    }

    async fn save(&self, user: NewUser) -> Result<User, StoreError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = generate_user_id();

            let inserted = sqlx::query(
                "INSERT INTO users (id, name, email, avatar, password) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.avatar)
            .bind(&user.password)
            .execute(&self.db)
            .await;

            match inserted {
                Ok(_) => {
                    debug!(user_id = %id, "Inserted user, fetching stored record");
                    let stored = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
                        .bind(&id)
                        .fetch_one(&self.db)
                        .await?;
                    return Ok(stored);
                }
                Err(e) => match unique_violation(&e) {
                    Some(UniqueColumn::Email) => {
                        warn!(
                            email = %safe_email_log(&user.email),
                            "Insert rejected by unique email constraint"
                        );
                        return Err(StoreError::DuplicateEmail);
                    }
                    Some(UniqueColumn::Id) => {
                        debug!(user_id = %id, "Generated user id already taken, retrying");
                    }
                    None => return Err(StoreError::Database(e)),
                },
            }
        }

        Err(StoreError::IdExhausted(MAX_ID_ATTEMPTS))
    }
}

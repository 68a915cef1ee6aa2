// src/common/migrations.rs
//! Database schema management

use sqlx::SqlitePool;
use tracing::{info, warn};

/// Create the schema, optionally dropping existing tables first
///
/// Tables are only dropped when `reset` is set (RESET_DB=true) so restarts keep data.
pub async fn run_migrations(pool: &SqlitePool, reset: bool) -> Result<(), sqlx::Error> {
    if reset {
        warn!("RESET_DB=true - Dropping all tables and recreating schema...");
        drop_all_tables(pool).await?;
        info!("Dropped old tables");
    } else {
        info!("Skipping table drop (RESET_DB not set). Tables will be created if they don't exist.");
    }

    create_user_tables(pool).await?;

    info!("Database migration completed successfully!");

    Ok(())
}

async fn drop_all_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("DROP TABLE IF EXISTS users")
        .execute(pool)
        .await?;
    Ok(())
}

async fn create_user_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // UNIQUE(email) backs the handler's lookup-then-insert check
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT UNIQUE NOT NULL,
            avatar TEXT NOT NULL,
            password TEXT NOT NULL,
            date TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database")
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let pool = memory_pool().await;
        run_migrations(&pool, false).await.expect("first run");
        run_migrations(&pool, false).await.expect("second run");

        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'users'",
        )
        .fetch_one(&pool)
        .await
        .expect("Failed to inspect schema");
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_reset_drops_existing_rows() {
        let pool = memory_pool().await;
        run_migrations(&pool, false).await.expect("initial run");
        sqlx::query(
            "INSERT INTO users (id, name, email, avatar, password) VALUES ('U_1', 'Ann', 'ann@x.com', 'a', 'p')",
        )
        .execute(&pool)
        .await
        .expect("Failed to insert row");

        run_migrations(&pool, true).await.expect("reset run");

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .expect("Failed to count rows");
        assert_eq!(count, 0);
    }
}

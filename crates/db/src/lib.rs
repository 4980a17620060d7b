//! PostgreSQL-backed document storage for the movies service.
//!
//! Documents live as JSONB rows in named collections (see [`collection`]);
//! [`repositories::MovieRepo`] maps the `movies` collection onto the
//! `MovieStore` trait from `movies-core`.

pub mod collection;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub use collection::{get_collection, Collection, Document, Filter, UpdateResult};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database answers.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

use anyhow::{Context, Result};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;
use std::time::Duration;

pub use sqlx; // Re-export for convenience
pub mod models;
pub mod repositories;

#[derive(Clone)]
pub struct Database {
    pub pool: PgPool,
}

impl Database {
    fn pool_options() -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(20)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(3)) // Fail fast if DB is unreachable
            .idle_timeout(Duration::from_secs(60 * 5))
            .test_before_acquire(true)
    }

    /// Connects to PostgreSQL, failing if the server cannot be reached.
    pub async fn connect(database_url: &str) -> Result<Arc<Self>> {
        let pool = Self::pool_options()
            .connect(database_url)
            .await
            .context("Failed to connect to the database")?;

        Ok(Arc::new(Self { pool }))
    }

    /// Builds a pool that opens connections on first use. Queries fail
    /// individually while the server is down instead of blocking startup.
    pub fn connect_lazy(database_url: &str) -> Result<Arc<Self>> {
        let pool = Self::pool_options()
            .min_connections(0)
            .connect_lazy(database_url)
            .context("Invalid database URL")?;

        Ok(Arc::new(Self { pool }))
    }

    /// Connects eagerly, falling back to a lazy pool when the database is down.
    /// The returned flag tells whether the first connection succeeded.
    pub async fn connect_or_degrade(database_url: &str) -> Result<(Arc<Self>, bool)> {
        match Self::connect(database_url).await {
            Ok(db) => Ok((db, true)),
            Err(e) => {
                tracing::warn!("Database unavailable at startup, continuing degraded: {:#}", e);
                Ok((Self::connect_lazy(database_url)?, false))
            }
        }
    }

    /// Runs pending migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("src/migrations")
            .run(&self.pool)
            .await
            .context("Failed to run database migrations")?;

        Ok(())
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Database health check failed")?;
        Ok(())
    }
}

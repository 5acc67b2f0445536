//! Database bootstrap built on SeaORM
//!
//! Opens the connection pool and ensures the schema exists. Everything else
//! (queries, transactions, locking) is the engine's business: this layer adds
//! no ordering, retry, or isolation discipline of its own.

use crate::config::DatabaseConfig;
use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::info;

pub mod entities;
pub mod error;
pub mod migration;

pub use error::DatabaseError;

/// Connection handle for the shadow database.
///
/// Constructed explicitly by the caller and passed down to whatever needs
/// database access; there is no process-global handle. Dropping the value
/// closes the pool.
pub struct Database {
    /// SeaORM database connection
    conn: DatabaseConnection,
}

impl Database {
    /// Connect to the configured MySQL server.
    ///
    /// A rejected credential or unreachable engine surfaces as
    /// [`DatabaseError::Connection`]; startup code is expected to treat that
    /// as fatal. No retries happen here.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let db = Self::connect_url(config.url()).await?;

        info!(
            "Connected to database {} at {}:{}",
            config.database, config.host, config.port
        );

        Ok(db)
    }

    /// Connect to an explicit database URL.
    ///
    /// This is the seam for swapping backends: the integration tests point it
    /// at a SQLite file instead of a MySQL server.
    pub async fn connect_url(url: impl Into<String>) -> Result<Self, DatabaseError> {
        let mut opt = ConnectOptions::new(url.into());
        opt.max_connections(10)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(8))
            .idle_timeout(Duration::from_secs(8))
            .sqlx_logging(false); // We'll use tracing instead

        let conn = SeaDatabase::connect(opt)
            .await
            .map_err(DatabaseError::Connection)?;

        Ok(Self { conn })
    }

    /// Ensure every declared table exists, creating any that are missing.
    ///
    /// Idempotent and safe to call on every process start; existing tables
    /// are never altered or dropped.
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        migration::Migrator::up(&self.conn, None)
            .await
            .map_err(DatabaseError::Schema)?;

        info!("Database schema is up to date");
        Ok(())
    }

    /// Connect and ensure the schema exists in one step.
    pub async fn bootstrap(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let db = Self::connect(config).await?;
        db.migrate().await?;
        Ok(db)
    }

    /// Get the database connection
    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }
}

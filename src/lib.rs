//! Shadow database layer
//!
//! Entity definitions and the connect/create-tables bootstrap for the shadow
//! novel reader. External services build their queries on top of the entities
//! exported here; this crate only owns the schema and the connection
//! lifecycle.

pub mod config;
pub mod database;

pub use config::DatabaseConfig;
pub use database::{entities, migration, Database, DatabaseError};

//! Database layer for carpark.
//!
//! This module provides `SQLite`-based persistent storage for vehicles,
//! movements, reservations, and parking slots.
//!
//! # Architecture
//!
//! - `config`: Connection configuration and path resolution
//! - `connection`: The [`Database`] handle with PRAGMA setup
//! - `schema`: SQL table/index definitions and seed data
//! - `migrations`: Schema versioning and first-run seeding
//! - `operations`: Typed CRUD queries used by the lifecycle operations

pub mod config;
pub mod connection;
pub mod migrations;
pub mod operations;
pub mod schema;

#[cfg(test)]
pub mod test_util;

pub use config::{default_data_dir, resolve_database_path, DatabaseConfig};
pub use connection::Database;

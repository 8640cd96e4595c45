//! # Document Store
//!
//! This crate provides the storage gateway of the Caffebar Hölderlin backend: one process-wide
//! MongoDB handle, configured from the environment, exposing a generic "insert one document
//! into a collection" operation.

/// Connection settings and storage errors.
pub mod types;
/// Document store abstraction and its MongoDB implementation.
pub mod database;
/// Process-wide gateway handed to the HTTP handlers.
pub mod gateway;

pub use database::{DocumentStore, MongoStore};
pub use gateway::StorageGateway;
pub use types::{DatabaseSettings, StorageError};

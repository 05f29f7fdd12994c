//! Store trait for resource collections

use crate::core::resource::Resource;
use anyhow::Result;
use async_trait::async_trait;

/// Service trait for managing a resource collection
///
/// Implementations provide CRUD operations for a specific record type. The
/// handlers are agnostic to the underlying storage mechanism; the default is
/// [`InMemoryStore`](crate::storage::InMemoryStore).
///
/// `list` returns records in insertion order, and `remove` splices the record
/// out at its current position.
#[async_trait]
pub trait ResourceStore<T: Resource>: Send + Sync {
    /// Append a new record
    async fn insert(&self, record: T) -> Result<T>;

    /// Find a record by exact identifier match
    async fn find(&self, id: &str) -> Result<Option<T>>;

    /// List all records in insertion order
    async fn list(&self) -> Result<Vec<T>>;

    /// Overwrite the record with the given identifier in place
    ///
    /// Returns the updated record, or `None` if no record has that identifier.
    async fn replace(&self, id: &str, record: T) -> Result<Option<T>>;

    /// Remove the record with the given identifier
    ///
    /// Returns the removed record, or `None` if no record has that identifier.
    async fn remove(&self, id: &str) -> Result<Option<T>>;
}

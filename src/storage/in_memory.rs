//! In-memory implementation of ResourceStore for testing and development

use crate::core::resource::Resource;
use crate::core::store::ResourceStore;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory resource store
///
/// Records live in a `Vec` so that `list` reflects insertion order and
/// `remove` splices a record out at its current position. Uses `RwLock` for
/// thread-safe access; cloning yields a handle to the same collection, and a
/// fresh store per test gives isolation.
#[derive(Clone)]
pub struct InMemoryStore<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T> InMemoryStore<T> {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Resource> ResourceStore<T> for InMemoryStore<T> {
    async fn insert(&self, record: T) -> Result<T> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        records.push(record.clone());

        Ok(record)
    }

    async fn find(&self, id: &str) -> Result<Option<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.clone())
    }

    async fn replace(&self, id: &str, record: T) -> Result<Option<T>> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        match records.iter_mut().find(|r| r.id() == id) {
            Some(slot) => {
                *slot = record.clone();
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, id: &str) -> Result<Option<T>> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        match records.iter().position(|r| r.id() == id) {
            Some(index) => Ok(Some(records.remove(index))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TestRecord {
        id: String,
        name: String,
    }

    impl TestRecord {
        fn new(id: &str, name: &str) -> Self {
            Self {
                id: id.to_string(),
                name: name.to_string(),
            }
        }
    }

    impl Resource for TestRecord {
        fn resource_label() -> &'static str {
            "TestRecord"
        }

        fn id(&self) -> &str {
            &self.id
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = InMemoryStore::new();
        store.insert(TestRecord::new("a", "first")).await.unwrap();

        let found = store.find("a").await.unwrap();
        assert_eq!(found, Some(TestRecord::new("a", "first")));
        assert_eq!(store.find("b").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = InMemoryStore::new();
        store.insert(TestRecord::new("a", "first")).await.unwrap();
        store.insert(TestRecord::new("b", "second")).await.unwrap();
        store.insert(TestRecord::new("c", "third")).await.unwrap();

        let ids: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_replace_overwrites_in_place() {
        let store = InMemoryStore::new();
        store.insert(TestRecord::new("a", "first")).await.unwrap();
        store.insert(TestRecord::new("b", "second")).await.unwrap();

        let updated = store
            .replace("a", TestRecord::new("a", "renamed"))
            .await
            .unwrap();
        assert_eq!(updated, Some(TestRecord::new("a", "renamed")));

        // Position is unchanged after replace
        let ids: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_replace_unknown_id_returns_none() {
        let store: InMemoryStore<TestRecord> = InMemoryStore::new();
        let result = store
            .replace("missing", TestRecord::new("missing", "x"))
            .await
            .unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_remove_splices_at_position() {
        let store = InMemoryStore::new();
        store.insert(TestRecord::new("a", "first")).await.unwrap();
        store.insert(TestRecord::new("b", "second")).await.unwrap();
        store.insert(TestRecord::new("c", "third")).await.unwrap();

        let removed = store.remove("b").await.unwrap();
        assert_eq!(removed, Some(TestRecord::new("b", "second")));

        let ids: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_remove_unknown_id_returns_none() {
        let store: InMemoryStore<TestRecord> = InMemoryStore::new();
        assert_eq!(store.remove("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clone_shares_collection() {
        let store = InMemoryStore::new();
        let handle = store.clone();
        store.insert(TestRecord::new("a", "first")).await.unwrap();

        assert_eq!(handle.list().await.unwrap().len(), 1);
    }
}

//! In-process object-store backend.
//!
//! Holds objects in a map guarded by an async RwLock. Used for local
//! development without bucket credentials and as the backend the
//! integration tests drive the router against.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use crate::models::object::StoredObject;
use crate::services::object_store::{ObjectStore, StoreError, StoreResult};

#[derive(Default)]
pub struct MemoryStore {
    objects: RwLock<HashMap<String, StoredObject>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of objects currently held.
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn put_object(&self, key: &str, content_type: &str, body: Bytes) -> StoreResult<()> {
        let object = StoredObject {
            content_type: Some(content_type.to_string()),
            body,
        };
        self.objects.write().await.insert(key.to_string(), object);
        Ok(())
    }

    async fn get_object(&self, key: &str) -> StoreResult<StoredObject> {
        self.objects
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    async fn check_ready(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_get_round_trip() {
        let store = MemoryStore::new();
        store
            .put_object("k1", "text/plain", Bytes::from_static(b"hello"))
            .await
            .unwrap();

        let object = store.get_object("k1").await.unwrap();
        assert_eq!(object.content_type.as_deref(), Some("text/plain"));
        assert_eq!(&object.body[..], b"hello");
    }

    #[tokio::test]
    async fn test_missing_key_is_not_found() {
        let store = MemoryStore::new();
        let result = store.get_object("missing").await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }
}

//! The seam between the request pipeline and the external object store.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::models::object::StoredObject;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("object `{0}` not found")]
    NotFound(String),
    #[error("object store write failed: {0}")]
    Put(String),
    #[error("object store read failed: {0}")]
    Get(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Key-addressed binary storage reached by the transfer paths.
///
/// One call per request: the upload path issues a single `put_object`, the
/// download path a single `get_object`. Writes are atomic on the backend's
/// side; a failed put leaves no retrievable partial object.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `body` under `key` with the given content type.
    async fn put_object(&self, key: &str, content_type: &str, body: Bytes) -> StoreResult<()>;

    /// Fetch the object stored under `key`.
    async fn get_object(&self, key: &str) -> StoreResult<StoredObject>;

    /// Cheap backend connectivity check used by the readiness probe.
    async fn check_ready(&self) -> StoreResult<()>;
}

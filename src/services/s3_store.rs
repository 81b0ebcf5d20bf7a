//! S3 object-store backend.
//!
//! Thin pass-through to a single bucket over `aws-sdk-s3`. Bodies are
//! transferred single-shot; timeouts and retries are whatever the SDK
//! defaults to.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;

use crate::config::AppConfig;
use crate::models::object::StoredObject;
use crate::services::object_store::{ObjectStore, StoreError, StoreResult};

/// Object storage backed by a single S3 bucket.
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: String) -> Self {
        Self { client, bucket }
    }

    /// Build a client from the configured static credentials and region.
    pub fn from_config(cfg: &AppConfig) -> Self {
        let credentials = Credentials::new(
            cfg.access_key_id.clone(),
            cfg.secret_access_key.clone(),
            None,
            None,
            "environment",
        );
        let s3_config = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(cfg.aws_region.clone()))
            .credentials_provider(credentials)
            .build();

        Self::new(Client::from_conf(s3_config), cfg.bucket_name.clone())
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put_object(&self, key: &str, content_type: &str, body: Bytes) -> StoreResult<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|err| StoreError::Put(err.into_service_error().to_string()))?;

        Ok(())
    }

    async fn get_object(&self, key: &str) -> StoreResult<StoredObject> {
        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| {
                let service_err = err.into_service_error();
                if service_err.is_no_such_key() {
                    StoreError::NotFound(key.to_string())
                } else {
                    StoreError::Get(service_err.to_string())
                }
            })?;

        let content_type = response.content_type().map(str::to_string);
        let body = response
            .body
            .collect()
            .await
            .map_err(|err| StoreError::Get(err.to_string()))?
            .into_bytes();

        Ok(StoredObject { content_type, body })
    }

    async fn check_ready(&self) -> StoreResult<()> {
        self.client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .map_err(|err| StoreError::Get(err.into_service_error().to_string()))?;

        Ok(())
    }
}

// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub key: String,
    pub body: Bytes,
    pub content_type: String,
    pub cache_control: String,
}

/// Destination for exported site files.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put_object(&self, object: StoredObject) -> ApplicationResult<()>;
    async fn delete_object(&self, key: &str) -> ApplicationResult<()>;
    /// Human readable location, e.g. `s3://bucket/prefix`.
    fn location(&self) -> String;
}

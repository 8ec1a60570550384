//! S3 bucket as the destination of the static export.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::{Client, primitives::ByteStream};

use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::storage::{ObjectStore, StoredObject},
};

pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    prefix: String,
}

impl S3ObjectStore {
    /// `prefix` is only used for display; callers pass full keys.
    pub fn new(client: Client, bucket: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            prefix: prefix.into().trim_matches('/').to_string(),
        }
    }

    /// Load credentials from the default provider chain. `region` overrides
    /// whatever the chain resolves.
    pub async fn from_defaults(
        bucket: impl Into<String>,
        prefix: impl Into<String>,
        region: Option<String>,
    ) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        let config = loader.load().await;
        Self::new(Client::new(&config), bucket, prefix)
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(&self, object: StoredObject) -> ApplicationResult<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&object.key)
            .body(ByteStream::from(object.body))
            .content_type(object.content_type)
            .cache_control(object.cache_control)
            .send()
            .await
            .map_err(|err| {
                ApplicationError::infrastructure(format!(
                    "put s3://{}/{}: {}",
                    self.bucket,
                    object.key,
                    err.into_service_error()
                ))
            })?;
        Ok(())
    }

    async fn delete_object(&self, key: &str) -> ApplicationResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| {
                ApplicationError::infrastructure(format!(
                    "delete s3://{}/{key}: {}",
                    self.bucket,
                    err.into_service_error()
                ))
            })?;
        tracing::debug!(bucket = %self.bucket, key, "deleted object");
        Ok(())
    }

    fn location(&self) -> String {
        if self.prefix.is_empty() {
            format!("s3://{}", self.bucket)
        } else {
            format!("s3://{}/{}", self.bucket, self.prefix)
        }
    }
}

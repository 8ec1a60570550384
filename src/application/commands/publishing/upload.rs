use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;

use super::{cache_policy_for, content_type_for, fs};
use crate::application::{
    dto::{FailedUpload, UploadReport},
    error::{ApplicationError, ApplicationResult},
    ports::storage::{ObjectStore, StoredObject},
    settings::UploadSettings,
};

/// Pushes exported files to object storage, one at a time.
///
/// A failing file is recorded in the report and the batch carries on.
pub struct StaticUploadService {
    store: Arc<dyn ObjectStore>,
    settings: UploadSettings,
}

impl StaticUploadService {
    pub fn new(store: Arc<dyn ObjectStore>, settings: UploadSettings) -> Self {
        Self { store, settings }
    }

    pub async fn upload_dir(&self, dir: &Path) -> ApplicationResult<UploadReport> {
        if !fs::is_dir(dir).await {
            return Err(ApplicationError::validation(format!(
                "export directory {} does not exist",
                dir.display()
            )));
        }

        let files = fs::collect_files(dir).await?;
        tracing::info!(
            files = files.len(),
            location = %self.store.location(),
            "uploading export directory"
        );
        Ok(self.upload_files(dir, &files).await)
    }

    /// `files` are relative to `dir`.
    pub async fn upload_files(&self, dir: &Path, files: &[String]) -> UploadReport {
        let mut report = UploadReport {
            location: self.store.location(),
            ..UploadReport::default()
        };

        for relative in files {
            let key = self.settings.key_for(relative);
            match self.upload_one(dir, relative, &key).await {
                Ok(()) => {
                    tracing::debug!(key = %key, "uploaded");
                    report.uploaded += 1;
                }
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "upload failed");
                    report.failed.push(FailedUpload {
                        key,
                        error: err.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            uploaded = report.uploaded,
            failed = report.failed.len(),
            location = %report.location,
            "upload finished"
        );
        report
    }

    /// Remove objects for files that were deleted from the export.
    pub async fn remove_files(&self, files: &[String]) -> Vec<FailedUpload> {
        let mut failed = Vec::new();
        for relative in files {
            let key = self.settings.key_for(relative);
            if let Err(err) = self.store.delete_object(&key).await {
                tracing::warn!(key = %key, error = %err, "delete failed");
                failed.push(FailedUpload {
                    key,
                    error: err.to_string(),
                });
            }
        }
        failed
    }

    async fn upload_one(&self, dir: &Path, relative: &str, key: &str) -> ApplicationResult<()> {
        let body = tokio::fs::read(dir.join(relative)).await?;
        let object = StoredObject {
            key: key.to_string(),
            body: Bytes::from(body),
            content_type: content_type_for(relative).to_string(),
            cache_control: cache_policy_for(relative).header_value().to_string(),
        };
        self.store.put_object(object).await
    }
}

use std::sync::Arc;

use super::{StaticExportService, StaticUploadService};
use crate::{
    application::{
        dto::{ExportReport, PublishReport, UploadReport},
        error::ApplicationResult,
    },
    domain::site::SitePage,
};

/// Export followed by upload, run sequentially.
pub struct StaticPublishService {
    export: Arc<StaticExportService>,
    upload: Arc<StaticUploadService>,
}

impl StaticPublishService {
    pub fn new(export: Arc<StaticExportService>, upload: Arc<StaticUploadService>) -> Self {
        Self { export, upload }
    }

    pub async fn publish_site(&self) -> ApplicationResult<(ExportReport, UploadReport)> {
        let out_dir = self.export.export_dir().to_path_buf();
        let exported = self.export.export_site(&out_dir).await?;
        let uploaded = self.upload.upload_dir(&out_dir).await?;
        Ok((exported, uploaded))
    }

    /// Re-export `pages` and push only the files that changed.
    pub async fn publish_pages(&self, pages: &[SitePage]) -> ApplicationResult<PublishReport> {
        let out_dir = self.export.export_dir().to_path_buf();
        let exported = self.export.export_pages(&out_dir, pages).await?;

        let mut upload = self.upload.upload_files(&out_dir, &exported.written).await;
        upload.failed.extend(self.upload.remove_files(&exported.removed).await);

        Ok(PublishReport {
            pages: exported,
            upload,
        })
    }
}

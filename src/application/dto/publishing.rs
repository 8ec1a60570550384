use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    pub out_dir: String,
    pub pages_written: usize,
    pub assets_copied: usize,
    pub exported_at: DateTime<Utc>,
}

/// Outcome of re-exporting selected pages in place.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageExportReport {
    /// Files written, relative to the export root.
    pub written: Vec<String>,
    /// Files removed because their article no longer exists.
    pub removed: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FailedUpload {
    pub key: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UploadReport {
    pub location: String,
    pub uploaded: usize,
    pub failed: Vec<FailedUpload>,
}

impl UploadReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PublishReport {
    pub pages: PageExportReport,
    pub upload: UploadReport,
}

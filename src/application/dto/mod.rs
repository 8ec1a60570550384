pub mod publishing;
pub mod revalidation;

pub use publishing::{ExportReport, FailedUpload, PageExportReport, PublishReport, UploadReport};
pub use revalidation::{RevalidationDto, WebhookResultDto};

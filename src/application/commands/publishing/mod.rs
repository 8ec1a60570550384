//! Static export of the site and its upload to object storage.

mod content_type;
mod export;
mod fs;
mod publish;
mod upload;

pub use content_type::{CachePolicy, cache_policy_for, content_type_for};
pub use export::StaticExportService;
pub use fs::collect_files;
pub use publish::StaticPublishService;
pub use upload::StaticUploadService;

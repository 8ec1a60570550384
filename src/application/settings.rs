// src/application/settings.rs
//! Plain settings handed to application services at construction time.

use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub site_name: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "News".into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageCacheSettings {
    /// How long a rendered page is served before it is rendered again.
    pub ttl: Duration,
}

impl Default for PageCacheSettings {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RevalidationSettings {
    pub revalidation_secret: Option<String>,
    pub webhook_token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub export_dir: PathBuf,
    pub static_assets_dir: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("out"),
            static_assets_dir: PathBuf::from("public"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UploadSettings {
    /// Key prefix inside the bucket, without leading or trailing slashes.
    pub prefix: String,
}

impl UploadSettings {
    pub fn new(prefix: impl AsRef<str>) -> Self {
        Self {
            prefix: prefix.as_ref().trim_matches('/').to_string(),
        }
    }

    pub fn key_for(&self, relative: &str) -> String {
        let relative = relative.trim_start_matches('/');
        if self.prefix.is_empty() {
            relative.to_string()
        } else {
            format!("{}/{relative}", self.prefix)
        }
    }
}

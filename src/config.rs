// src/config.rs
use std::{env, path::PathBuf, time::Duration};
use thiserror::Error;

use crate::application::{
    services::ServiceSettings,
    settings::{
        ExportSettings, PageCacheSettings, RevalidationSettings, SiteSettings, UploadSettings,
    },
};
use crate::infrastructure::cms::StrapiClientConfig;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    allowed_origins: Vec<String>,
    revalidation_secret: Option<String>,
    webhook_token: Option<String>,
    webhook_token_headers: Vec<String>,
    strapi_url: String,
    strapi_api_token: Option<String>,
    cms_timeout: Duration,
    page_cache_ttl: Duration,
    site_name: String,
    placeholder_image_url: String,
    export_dir: PathBuf,
    static_assets_dir: PathBuf,
    s3_bucket: Option<String>,
    aws_region: Option<String>,
    s3_prefix: String,
    publish_on_webhook: bool,
    rate_limit_enabled: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn default_webhook_token_headers() -> Vec<String> {
    vec![
        "x-webhook-token".into(),
        "x-strapi-token".into(),
        "authorization".into(),
    ]
}

fn default_strapi_url() -> String {
    "http://localhost:1337".into()
}

const fn default_cms_timeout_secs() -> u64 {
    10
}

const fn default_page_cache_ttl_secs() -> u64 {
    60
}

fn list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

fn flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

impl AppConfig {
    /// Build configuration from environment variables, after letting a
    /// `.env` file populate them when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let seconds = |key: &str, default: u64| {
            get(key)
                .and_then(|value| value.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };

        let listen_addr = get("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        if listen_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "LISTEN_ADDR must be a socket address, got {listen_addr:?}"
            )));
        }

        let webhook_token_headers = get("WEBHOOK_TOKEN_HEADERS")
            .map(|raw| {
                list(&raw)
                    .into_iter()
                    .map(|name| name.to_ascii_lowercase())
                    .collect::<Vec<_>>()
            })
            .filter(|names| !names.is_empty())
            .unwrap_or_else(default_webhook_token_headers);

        Ok(Self {
            listen_addr,
            allowed_origins: get("ALLOWED_ORIGINS")
                .map(|raw| list(&raw))
                .unwrap_or_else(default_allowed_origins),
            revalidation_secret: get("REVALIDATION_SECRET"),
            webhook_token: get("WEBHOOK_TOKEN"),
            webhook_token_headers,
            strapi_url: get("STRAPI_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(default_strapi_url),
            strapi_api_token: get("STRAPI_API_TOKEN"),
            cms_timeout: Duration::from_secs(seconds(
                "CMS_TIMEOUT_SECONDS",
                default_cms_timeout_secs(),
            )),
            page_cache_ttl: Duration::from_secs(seconds(
                "PAGE_CACHE_TTL_SECONDS",
                default_page_cache_ttl_secs(),
            )),
            site_name: get("SITE_NAME").unwrap_or_else(|| SiteSettings::default().site_name),
            placeholder_image_url: get("PLACEHOLDER_IMAGE_URL")
                .unwrap_or_else(|| "/images/placeholder.svg".into()),
            export_dir: get("EXPORT_DIR")
                .map_or_else(|| ExportSettings::default().export_dir, PathBuf::from),
            static_assets_dir: get("STATIC_ASSETS_DIR")
                .map_or_else(|| ExportSettings::default().static_assets_dir, PathBuf::from),
            s3_bucket: get("AWS_S3_BUCKET"),
            aws_region: get("AWS_REGION"),
            s3_prefix: get("S3_PREFIX").unwrap_or_default(),
            publish_on_webhook: get("PUBLISH_ON_WEBHOOK").is_some_and(|raw| flag(&raw)),
            rate_limit_enabled: get("RATE_LIMIT_ENABLED").is_none_or(|raw| flag(&raw)),
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// Lower-cased header names searched, in order, for the webhook token.
    pub fn webhook_token_headers(&self) -> &[String] {
        &self.webhook_token_headers
    }

    pub fn export_dir(&self) -> &std::path::Path {
        &self.export_dir
    }

    pub fn s3_prefix(&self) -> &str {
        &self.s3_prefix
    }

    pub fn aws_region(&self) -> Option<&str> {
        self.aws_region.as_deref()
    }

    pub fn s3_bucket(&self) -> Option<&str> {
        self.s3_bucket.as_deref()
    }

    /// The bucket, for commands that cannot run without one.
    pub fn require_s3_bucket(&self) -> Result<&str, ConfigError> {
        self.s3_bucket().ok_or(ConfigError::Missing("AWS_S3_BUCKET"))
    }

    pub fn publish_on_webhook(&self) -> bool {
        self.publish_on_webhook
    }

    pub fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_enabled
    }

    pub fn placeholder_image_url(&self) -> &str {
        &self.placeholder_image_url
    }

    pub fn cms_client_config(&self) -> StrapiClientConfig {
        StrapiClientConfig {
            base_url: self.strapi_url.clone(),
            api_token: self.strapi_api_token.clone(),
            timeout: self.cms_timeout,
        }
    }

    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            site: SiteSettings {
                site_name: self.site_name.clone(),
            },
            page_cache: PageCacheSettings {
                ttl: self.page_cache_ttl,
            },
            revalidation: RevalidationSettings {
                revalidation_secret: self.revalidation_secret.clone(),
                webhook_token: self.webhook_token.clone(),
            },
            export: ExportSettings {
                export_dir: self.export_dir.clone(),
                static_assets_dir: self.static_assets_dir.clone(),
            },
            upload: UploadSettings::new(&self.s3_prefix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:3000");
        assert_eq!(config.allowed_origins(), ["http://localhost:3000"]);
        assert_eq!(
            config.webhook_token_headers(),
            ["x-webhook-token", "x-strapi-token", "authorization"]
        );
        assert!(config.rate_limit_enabled());
        assert!(!config.publish_on_webhook());

        let settings = config.service_settings();
        assert_eq!(settings.page_cache.ttl, Duration::from_secs(60));
        assert_eq!(settings.site.site_name, "News");
        assert!(settings.revalidation.revalidation_secret.is_none());
        assert_eq!(config.cms_client_config().base_url, "http://localhost:1337");
        assert_eq!(config.cms_client_config().timeout, Duration::from_secs(10));
    }

    #[test]
    fn reads_overrides_and_treats_blank_as_unset() {
        let config = config(&[
            ("REVALIDATION_SECRET", "s3cret"),
            ("WEBHOOK_TOKEN", "  "),
            ("WEBHOOK_TOKEN_HEADERS", "X-Hook, Authorization"),
            ("STRAPI_URL", "https://cms.example.com/"),
            ("PAGE_CACHE_TTL_SECONDS", "5"),
            ("CMS_TIMEOUT_SECONDS", "not-a-number"),
            ("S3_PREFIX", "/site/"),
            ("PUBLISH_ON_WEBHOOK", "true"),
            ("RATE_LIMIT_ENABLED", "0"),
        ])
        .unwrap();

        let settings = config.service_settings();
        assert_eq!(settings.revalidation.revalidation_secret.as_deref(), Some("s3cret"));
        assert!(settings.revalidation.webhook_token.is_none());
        assert_eq!(config.webhook_token_headers(), ["x-hook", "authorization"]);
        assert_eq!(config.cms_client_config().base_url, "https://cms.example.com");
        assert_eq!(config.cms_client_config().timeout, Duration::from_secs(10));
        assert_eq!(settings.page_cache.ttl, Duration::from_secs(5));
        assert_eq!(settings.upload.key_for("index.html"), "site/index.html");
        assert!(config.publish_on_webhook());
        assert!(!config.rate_limit_enabled());
    }

    #[test]
    fn bucket_is_required_only_on_demand() {
        let config = config(&[]).unwrap();
        assert!(matches!(
            config.require_s3_bucket(),
            Err(ConfigError::Missing("AWS_S3_BUCKET"))
        ));
    }

    #[test]
    fn rejects_malformed_listen_addr() {
        assert!(matches!(
            config(&[("LISTEN_ADDR", "localhost")]),
            Err(ConfigError::Invalid(_))
        ));
    }
}

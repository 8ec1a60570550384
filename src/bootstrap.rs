// src/bootstrap.rs
//! Wiring shared by the server and the command-line tools.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::{
    ports::{cache::PageCache, security::SecretMatcher, storage::ObjectStore, time::Clock},
    services::ApplicationServices,
};
use crate::config::AppConfig;
use crate::domain::article::ArticleReadRepository;
use crate::infrastructure::{
    cache::InMemoryPageCache,
    cms::{StrapiArticleRepository, StrapiClient},
    security::DigestSecretMatcher,
    storage::S3ObjectStore,
    time::SystemClock,
};

pub fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,aws_config=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

pub fn article_repository(config: &AppConfig) -> Result<Arc<dyn ArticleReadRepository>> {
    let client = StrapiClient::new(config.cms_client_config()).context("building cms client")?;
    Ok(Arc::new(StrapiArticleRepository::new(
        client,
        config.placeholder_image_url(),
    )))
}

/// Fails when no bucket is configured.
pub async fn object_store(config: &AppConfig) -> Result<Arc<dyn ObjectStore>> {
    let bucket = config.require_s3_bucket()?;
    let store = S3ObjectStore::from_defaults(
        bucket,
        config.s3_prefix(),
        config.aws_region().map(ToString::to_string),
    )
    .await;
    Ok(Arc::new(store))
}

/// `object_store` enables publishing; pass `None` for render-only use.
pub fn build_services(
    config: &AppConfig,
    object_store: Option<Arc<dyn ObjectStore>>,
) -> Result<Arc<ApplicationServices>> {
    let article_read_repo = article_repository(config)?;
    let page_cache: Arc<dyn PageCache> = Arc::new(InMemoryPageCache::new());
    let secret_matcher: Arc<dyn SecretMatcher> = Arc::new(DigestSecretMatcher);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    Ok(Arc::new(ApplicationServices::new(
        article_read_repo,
        page_cache,
        secret_matcher,
        clock,
        object_store,
        config.service_settings(),
    )))
}

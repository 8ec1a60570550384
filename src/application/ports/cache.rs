// src/application/ports/cache.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A page rendered to HTML together with the tags it was rendered under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub path: String,
    pub html: String,
    pub tags: Vec<String>,
    pub rendered_at: DateTime<Utc>,
    pub etag: String,
}

impl RenderedPage {
    pub fn new(
        path: impl Into<String>,
        html: String,
        tags: Vec<String>,
        rendered_at: DateTime<Utc>,
    ) -> Self {
        let etag = format!("\"{}\"", blake3::hash(html.as_bytes()).to_hex());
        Self {
            path: path.into(),
            html,
            tags,
            rendered_at,
            etag,
        }
    }
}

/// Store of rendered pages keyed by normalized path.
#[async_trait]
pub trait PageCache: Send + Sync {
    async fn get(&self, path: &str) -> Option<RenderedPage>;
    async fn put(&self, page: RenderedPage);
    /// Returns whether an entry was dropped.
    async fn invalidate_path(&self, path: &str) -> bool;
    /// Drops every entry rendered under `tag` and returns how many were dropped.
    async fn invalidate_tag(&self, tag: &str) -> usize;
}

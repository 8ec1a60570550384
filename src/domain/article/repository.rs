use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::{ArticleSlug, CategorySlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Read-only access to the articles held by the CMS.
#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    /// Newest first. `limit` of `None` returns everything the CMS pages out.
    async fn list(&self, limit: Option<u32>) -> DomainResult<Vec<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn list_by_category(&self, category: &CategorySlug) -> DomainResult<Vec<Article>>;
}

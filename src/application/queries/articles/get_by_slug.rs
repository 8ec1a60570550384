use super::ArticleQueryService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{Article, ArticleSlug},
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_slug(&self, query: GetArticleBySlugQuery) -> ApplicationResult<Article> {
        let slug = ArticleSlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("article not found"))?;

        match self.read_repo.find_by_slug(&slug).await {
            Ok(Some(article)) => Ok(article),
            Ok(None) => Err(ApplicationError::not_found("article not found")),
            Err(err) => {
                tracing::warn!(error = %err, slug = %slug, "failed to fetch article");
                Err(ApplicationError::not_found("article not found"))
            }
        }
    }
}

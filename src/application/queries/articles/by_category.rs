use super::ArticleQueryService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{Article, Category, CategorySlug},
};

pub struct ListCategoryArticlesQuery {
    pub slug: String,
}

impl ArticleQueryService {
    /// The category is described from its articles; a category without
    /// articles falls back to its slug as display name.
    pub async fn list_category_articles(
        &self,
        query: ListCategoryArticlesQuery,
    ) -> ApplicationResult<(Category, Vec<Article>)> {
        let slug = CategorySlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("category not found"))?;

        let articles = match self.read_repo.list_by_category(&slug).await {
            Ok(articles) => articles,
            Err(err) => {
                tracing::warn!(error = %err, category = %slug, "failed to list category articles");
                Vec::new()
            }
        };

        let category = articles
            .iter()
            .find_map(|article| article.category.clone())
            .unwrap_or_else(|| Category {
                id: 0,
                name: slug.to_string(),
                slug: slug.clone(),
            });

        Ok((category, articles))
    }
}

use super::ArticleQueryService;
use crate::domain::article::Article;

#[derive(Debug, Clone, Copy, Default)]
pub struct ListArticlesQuery {
    pub limit: Option<u32>,
}

impl ArticleQueryService {
    pub async fn list_articles(&self, query: ListArticlesQuery) -> Vec<Article> {
        match self.read_repo.list(query.limit).await {
            Ok(articles) => articles,
            Err(err) => {
                tracing::warn!(error = %err, "failed to list articles, using empty list");
                Vec::new()
            }
        }
    }
}

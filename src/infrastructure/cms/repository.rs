// src/infrastructure/cms/repository.rs
use async_trait::async_trait;

use super::{
    client::StrapiClient,
    mapping::{ArticleMapper, page_count},
};
use crate::domain::{
    article::{Article, ArticleReadRepository, ArticleSlug, CategorySlug},
    errors::DomainResult,
};

const COLLECTION: &str = "articles";
const PAGE_SIZE: u32 = 100;
const MAX_PAGES: u64 = 50;

pub struct StrapiArticleRepository {
    client: StrapiClient,
    mapper: ArticleMapper,
}

impl StrapiArticleRepository {
    pub fn new(client: StrapiClient, placeholder_image_url: impl Into<String>) -> Self {
        let mapper = ArticleMapper::new(client.base_url(), placeholder_image_url);
        Self { client, mapper }
    }

    /// Fetch every page of a filtered listing, newest first.
    async fn fetch_all(&self, filters: &[(String, String)]) -> DomainResult<Vec<Article>> {
        let mut articles = Vec::new();
        let mut page = 1_u64;
        loop {
            let mut query = base_query();
            query.extend_from_slice(filters);
            query.push(("pagination[page]".into(), page.to_string()));
            query.push(("pagination[pageSize]".into(), PAGE_SIZE.to_string()));

            let body = self.client.fetch_collection(COLLECTION, &query).await?;
            articles.extend(self.mapper.map_collection(&body));

            match page_count(&body) {
                Some(count) if page < count && page < MAX_PAGES => page += 1,
                _ => break,
            }
        }
        Ok(articles)
    }
}

fn base_query() -> Vec<(String, String)> {
    vec![
        ("populate".into(), "*".into()),
        ("sort".into(), "publishedAt:desc".into()),
    ]
}

#[async_trait]
impl ArticleReadRepository for StrapiArticleRepository {
    async fn list(&self, limit: Option<u32>) -> DomainResult<Vec<Article>> {
        let Some(limit) = limit else {
            return self.fetch_all(&[]).await;
        };

        let mut query = base_query();
        query.push(("pagination[pageSize]".into(), limit.to_string()));
        let body = self.client.fetch_collection(COLLECTION, &query).await?;
        let mut articles = self.mapper.map_collection(&body);
        articles.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(articles)
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let mut query = base_query();
        query.push(("filters[slug][$eq]".into(), slug.as_str().to_string()));
        let body = self.client.fetch_collection(COLLECTION, &query).await?;
        Ok(self
            .mapper
            .map_collection(&body)
            .into_iter()
            .find(|article| &article.slug == slug))
    }

    async fn list_by_category(&self, category: &CategorySlug) -> DomainResult<Vec<Article>> {
        let filter = (
            "filters[category][slug][$eq]".to_string(),
            category.as_str().to_string(),
        );
        self.fetch_all(std::slice::from_ref(&filter)).await
    }
}

use std::sync::Arc;

use crate::{
    application::{
        error::ApplicationResult,
        ports::{
            cache::{PageCache, RenderedPage},
            time::Clock,
        },
        queries::articles::{
            ArticleQueryService, GetArticleBySlugQuery, ListArticlesQuery,
            ListCategoryArticlesQuery,
        },
        settings::PageCacheSettings,
    },
    domain::{article::distinct_categories, site::SitePage},
};

use super::PageRenderer;

/// Serves rendered pages from the page cache, rendering on a miss or once
/// the cached copy is older than the configured TTL.
pub struct PageQueryService {
    articles: Arc<ArticleQueryService>,
    cache: Arc<dyn PageCache>,
    clock: Arc<dyn Clock>,
    renderer: PageRenderer,
    settings: PageCacheSettings,
}

impl PageQueryService {
    pub fn new(
        articles: Arc<ArticleQueryService>,
        cache: Arc<dyn PageCache>,
        clock: Arc<dyn Clock>,
        renderer: PageRenderer,
        settings: PageCacheSettings,
    ) -> Self {
        Self {
            articles,
            cache,
            clock,
            renderer,
            settings,
        }
    }

    pub async fn render_page(&self, page: &SitePage) -> ApplicationResult<RenderedPage> {
        let path = page.path();
        if let Some(cached) = self.cache.get(&path).await {
            if self.is_fresh(&cached) {
                tracing::debug!(path = %path, "page cache hit");
                return Ok(cached);
            }
            tracing::debug!(path = %path, "page cache entry is stale");
        }

        let html = self.render_html(page).await?;
        let rendered = RenderedPage::new(path, html, page.tags(), self.clock.now());
        self.cache.put(rendered.clone()).await;
        tracing::info!(path = %rendered.path, "page rendered");
        Ok(rendered)
    }

    pub fn not_found_html(&self) -> String {
        self.renderer.render_not_found()
    }

    fn is_fresh(&self, page: &RenderedPage) -> bool {
        // A timestamp from the future converts to an error and counts as fresh.
        (self.clock.now() - page.rendered_at)
            .to_std()
            .map_or(true, |age| age < self.settings.ttl)
    }

    async fn render_html(&self, page: &SitePage) -> ApplicationResult<String> {
        match page {
            SitePage::Home => {
                let articles = self.articles.list_articles(ListArticlesQuery::default()).await;
                let categories = distinct_categories(&articles);
                Ok(self.renderer.render_home(&articles, &categories))
            }
            SitePage::NewsIndex => {
                let articles = self.articles.list_articles(ListArticlesQuery::default()).await;
                Ok(self.renderer.render_news_index(&articles))
            }
            SitePage::Article(slug) => {
                let article = self
                    .articles
                    .get_article_by_slug(GetArticleBySlugQuery {
                        slug: slug.to_string(),
                    })
                    .await?;
                Ok(self.renderer.render_article(&article))
            }
            SitePage::Category(slug) => {
                let (category, articles) = self
                    .articles
                    .list_category_articles(ListCategoryArticlesQuery {
                        slug: slug.to_string(),
                    })
                    .await?;
                Ok(self.renderer.render_category(&category, &articles))
            }
        }
    }
}

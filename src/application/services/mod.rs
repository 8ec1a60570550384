// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            publishing::{StaticExportService, StaticPublishService, StaticUploadService},
            revalidation::RevalidationCommandService,
        },
        ports::{
            cache::PageCache, security::SecretMatcher, storage::ObjectStore, time::Clock,
        },
        queries::{
            articles::ArticleQueryService,
            pages::{PageQueryService, PageRenderer},
        },
        settings::{
            ExportSettings, PageCacheSettings, RevalidationSettings, SiteSettings, UploadSettings,
        },
    },
    domain::article::ArticleReadRepository,
};

/// Settings bundle for `ApplicationServices::new`.
#[derive(Debug, Clone, Default)]
pub struct ServiceSettings {
    pub site: SiteSettings,
    pub page_cache: PageCacheSettings,
    pub revalidation: RevalidationSettings,
    pub export: ExportSettings,
    pub upload: UploadSettings,
}

pub struct ApplicationServices {
    pub page_queries: Arc<PageQueryService>,
    pub revalidation_commands: Arc<RevalidationCommandService>,
    pub static_export: Arc<StaticExportService>,
    static_publish: Option<Arc<StaticPublishService>>,
}

impl ApplicationServices {
    /// `object_store` enables the publish step after each webhook.
    pub fn new(
        article_read_repo: Arc<dyn ArticleReadRepository>,
        page_cache: Arc<dyn PageCache>,
        secret_matcher: Arc<dyn SecretMatcher>,
        clock: Arc<dyn Clock>,
        object_store: Option<Arc<dyn ObjectStore>>,
        settings: ServiceSettings,
    ) -> Self {
        let renderer = PageRenderer::new(settings.site.clone());

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));

        let page_queries = Arc::new(PageQueryService::new(
            article_queries,
            Arc::clone(&page_cache),
            Arc::clone(&clock),
            renderer.clone(),
            settings.page_cache.clone(),
        ));

        let static_export = Arc::new(StaticExportService::new(
            Arc::clone(&article_read_repo),
            renderer,
            Arc::clone(&clock),
            settings.export.clone(),
        ));

        let static_publish = object_store.map(|store| {
            let upload = Arc::new(StaticUploadService::new(store, settings.upload.clone()));
            Arc::new(StaticPublishService::new(Arc::clone(&static_export), upload))
        });

        let mut revalidation = RevalidationCommandService::new(
            Arc::clone(&page_cache),
            Arc::clone(&secret_matcher),
            Arc::clone(&clock),
            settings.revalidation.clone(),
        );
        if let Some(publisher) = &static_publish {
            revalidation = revalidation.with_publisher(Arc::clone(publisher));
        }

        Self {
            page_queries,
            revalidation_commands: Arc::new(revalidation),
            static_export,
            static_publish,
        }
    }

    pub fn static_publish(&self) -> Option<Arc<StaticPublishService>> {
        self.static_publish.as_ref().map(Arc::clone)
    }
}

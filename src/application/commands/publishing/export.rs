use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::fs;
use crate::{
    application::{
        dto::{ExportReport, PageExportReport},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        queries::pages::PageRenderer,
        settings::ExportSettings,
    },
    domain::{
        article::{Article, ArticleReadRepository, distinct_categories},
        site::SitePage,
    },
};

pub const NOT_FOUND_FILE: &str = "404.html";

/// Renders the whole site, or selected pages, to HTML files.
///
/// Unlike page serving, export does not fall back on CMS failures: an
/// unreachable CMS aborts the export instead of publishing an empty site.
pub struct StaticExportService {
    read_repo: Arc<dyn ArticleReadRepository>,
    renderer: PageRenderer,
    clock: Arc<dyn Clock>,
    settings: ExportSettings,
}

impl StaticExportService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        renderer: PageRenderer,
        clock: Arc<dyn Clock>,
        settings: ExportSettings,
    ) -> Self {
        Self {
            read_repo,
            renderer,
            clock,
            settings,
        }
    }

    pub fn export_dir(&self) -> &Path {
        &self.settings.export_dir
    }

    /// Export into a fresh staging directory, then swap it in for `out_dir`.
    pub async fn export_site(&self, out_dir: &Path) -> ApplicationResult<ExportReport> {
        let articles = self.read_repo.list(None).await?;
        let staging = staging_dir(out_dir)?;
        tokio::fs::create_dir_all(&staging).await?;

        let written = match self.write_site(&staging, &articles).await {
            Ok(written) => written,
            Err(err) => {
                if let Err(cleanup) = tokio::fs::remove_dir_all(&staging).await {
                    tracing::warn!(error = %cleanup, staging = %staging.display(), "failed to remove staging directory");
                }
                return Err(err);
            }
        };

        if fs::is_dir(out_dir).await {
            tokio::fs::remove_dir_all(out_dir).await?;
        }
        tokio::fs::rename(&staging, out_dir).await?;

        let (pages_written, assets_copied) = written;
        tracing::info!(
            out_dir = %out_dir.display(),
            pages_written,
            assets_copied,
            articles = articles.len(),
            "static export finished"
        );

        Ok(ExportReport {
            out_dir: out_dir.display().to_string(),
            pages_written,
            assets_copied,
            exported_at: self.clock.now(),
        })
    }

    /// Re-render `pages` in place. Pages whose content no longer exists have
    /// their file removed.
    pub async fn export_pages(
        &self,
        out_dir: &Path,
        pages: &[SitePage],
    ) -> ApplicationResult<PageExportReport> {
        let needs_listing = pages
            .iter()
            .any(|page| !matches!(page, SitePage::Article(_)));
        let articles = if needs_listing {
            self.read_repo.list(None).await?
        } else {
            Vec::new()
        };

        let mut report = PageExportReport::default();
        for page in pages {
            let file = page.export_file();
            match self.render_for_export(page, &articles).await? {
                Some(html) => {
                    fs::write_file(out_dir, &file, html.as_bytes()).await?;
                    report.written.push(file);
                }
                None => {
                    if fs::remove_file_if_exists(out_dir, &file).await? {
                        report.removed.push(file);
                    }
                }
            }
        }

        tracing::info!(
            written = report.written.len(),
            removed = report.removed.len(),
            "pages re-exported"
        );
        Ok(report)
    }

    async fn write_site(
        &self,
        staging: &Path,
        articles: &[Article],
    ) -> ApplicationResult<(usize, usize)> {
        // Assets first so rendered pages win on a name clash.
        let assets_dir = &self.settings.static_assets_dir;
        let assets_copied = if fs::is_dir(assets_dir).await {
            fs::copy_tree(assets_dir, staging).await?
        } else {
            tracing::debug!(dir = %assets_dir.display(), "no static assets directory");
            0
        };

        let mut pages = vec![SitePage::Home, SitePage::NewsIndex];
        pages.extend(
            articles
                .iter()
                .map(|article| SitePage::Article(article.slug.clone())),
        );
        pages.extend(
            distinct_categories(articles)
                .into_iter()
                .map(|category| SitePage::Category(category.slug)),
        );

        let mut pages_written = 0;
        for page in &pages {
            if let Some(html) = self.render_from(page, articles) {
                fs::write_file(staging, &page.export_file(), html.as_bytes()).await?;
                pages_written += 1;
            }
        }

        fs::write_file(
            staging,
            NOT_FOUND_FILE,
            self.renderer.render_not_found().as_bytes(),
        )
        .await?;
        pages_written += 1;

        Ok((pages_written, assets_copied))
    }

    async fn render_for_export(
        &self,
        page: &SitePage,
        articles: &[Article],
    ) -> ApplicationResult<Option<String>> {
        if let SitePage::Article(slug) = page {
            let article = self.read_repo.find_by_slug(slug).await?;
            return Ok(article.map(|article| self.renderer.render_article(&article)));
        }
        Ok(self.render_from(page, articles))
    }

    /// Render from an already fetched article list.
    fn render_from(&self, page: &SitePage, articles: &[Article]) -> Option<String> {
        match page {
            SitePage::Home => Some(
                self.renderer
                    .render_home(articles, &distinct_categories(articles)),
            ),
            SitePage::NewsIndex => Some(self.renderer.render_news_index(articles)),
            SitePage::Article(slug) => articles
                .iter()
                .find(|article| &article.slug == slug)
                .map(|article| self.renderer.render_article(article)),
            SitePage::Category(slug) => {
                let members: Vec<Article> = articles
                    .iter()
                    .filter(|article| article.belongs_to(slug))
                    .cloned()
                    .collect();
                let category = members.first()?.category.clone()?;
                Some(self.renderer.render_category(&category, &members))
            }
        }
    }
}

fn staging_dir(out_dir: &Path) -> ApplicationResult<PathBuf> {
    let name = out_dir
        .file_name()
        .ok_or_else(|| {
            ApplicationError::validation(format!(
                "export directory must name a directory: {}",
                out_dir.display()
            ))
        })?
        .to_string_lossy();
    let staging_name = format!(".{name}.staging-{}", uuid::Uuid::new_v4());
    Ok(out_dir.with_file_name(staging_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staging_dir_is_a_hidden_sibling() {
        let staging = staging_dir(Path::new("/srv/site/out")).unwrap();
        assert_eq!(staging.parent(), Some(Path::new("/srv/site")));
        let name = staging.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with(".out.staging-"), "{name}");
    }

    #[test]
    fn staging_dir_rejects_root() {
        assert!(staging_dir(Path::new("/")).is_err());
    }
}

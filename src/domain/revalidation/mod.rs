//! Translation of CMS content events into cache invalidations.

use crate::domain::article::ContentEvent;
use crate::domain::site::{SitePage, tags};

/// Paths and tags to drop from the page cache for one content event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidationPlan {
    pub pages: Vec<SitePage>,
    pub tags: Vec<String>,
}

impl InvalidationPlan {
    pub fn for_event(event: &ContentEvent) -> Self {
        let mut plan = Self::default();
        plan.push_page(SitePage::Home);
        plan.push_page(SitePage::NewsIndex);

        match event {
            ContentEvent::Article { slug, category, .. } => {
                plan.push_tag(tags::ARTICLES.to_string());
                if let Some(slug) = slug {
                    plan.push_page(SitePage::Article(slug.clone()));
                    plan.push_tag(tags::article(slug));
                }
                if let Some(category) = category {
                    plan.push_page(SitePage::Category(category.clone()));
                    plan.push_tag(tags::category(category));
                }
            }
            ContentEvent::Category { slug, .. } => {
                plan.push_tag(tags::CATEGORIES.to_string());
                plan.push_tag(tags::ARTICLES.to_string());
                if let Some(slug) = slug {
                    plan.push_page(SitePage::Category(slug.clone()));
                    plan.push_tag(tags::category(slug));
                }
            }
        }

        plan
    }

    pub fn paths(&self) -> Vec<String> {
        self.pages.iter().map(SitePage::path).collect()
    }

    fn push_page(&mut self, page: SitePage) {
        if !self.pages.contains(&page) {
            self.pages.push(page);
        }
    }

    fn push_tag(&mut self, tag: String) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleSlug, CategorySlug, ContentAction};

    #[test]
    fn article_publish_covers_home_listing_and_article() {
        let event = ContentEvent::Article {
            action: ContentAction::Publish,
            slug: Some(ArticleSlug::new("x").unwrap()),
            category: None,
        };

        let plan = InvalidationPlan::for_event(&event);
        assert_eq!(plan.paths(), vec!["/", "/news", "/news/x"]);
        assert_eq!(plan.tags, vec!["articles", "article-x"]);
    }

    #[test]
    fn article_with_category_also_drops_category_page() {
        let event = ContentEvent::Article {
            action: ContentAction::Update,
            slug: Some(ArticleSlug::new("x").unwrap()),
            category: Some(CategorySlug::new("sports").unwrap()),
        };

        let plan = InvalidationPlan::for_event(&event);
        assert!(plan.paths().contains(&"/category/sports".to_string()));
        assert!(plan.tags.contains(&"category-sports".to_string()));
    }

    #[test]
    fn article_without_slug_still_drops_listings() {
        let event = ContentEvent::Article {
            action: ContentAction::Delete,
            slug: None,
            category: None,
        };

        let plan = InvalidationPlan::for_event(&event);
        assert_eq!(plan.paths(), vec!["/", "/news"]);
        assert_eq!(plan.tags, vec!["articles"]);
    }

    #[test]
    fn category_event_drops_category_page_and_tags() {
        let event = ContentEvent::Category {
            action: ContentAction::Update,
            slug: Some(CategorySlug::new("economy").unwrap()),
        };

        let plan = InvalidationPlan::for_event(&event);
        assert_eq!(plan.paths(), vec!["/", "/news", "/category/economy"]);
        assert_eq!(plan.tags, vec!["categories", "articles", "category-economy"]);
    }
}

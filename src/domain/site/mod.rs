//! Addressing of the pages this site renders.

pub mod tags;

use crate::domain::article::{ArticleSlug, CategorySlug};
use std::fmt;

pub const NEWS_PATH: &str = "/news";
pub const CATEGORY_PATH: &str = "/category";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SitePage {
    Home,
    NewsIndex,
    Article(ArticleSlug),
    Category(CategorySlug),
}

impl SitePage {
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::NewsIndex => NEWS_PATH.to_string(),
            Self::Article(slug) => format!("{NEWS_PATH}/{slug}"),
            Self::Category(slug) => format!("{CATEGORY_PATH}/{slug}"),
        }
    }

    /// File the page is exported to, relative to the export root.
    pub fn export_file(&self) -> String {
        match self {
            Self::Home => "index.html".to_string(),
            Self::NewsIndex => "news/index.html".to_string(),
            Self::Article(slug) => format!("news/{slug}/index.html"),
            Self::Category(slug) => format!("category/{slug}/index.html"),
        }
    }

    pub fn tags(&self) -> Vec<String> {
        match self {
            Self::Home => vec![tags::ARTICLES.to_string(), tags::CATEGORIES.to_string()],
            Self::NewsIndex => vec![tags::ARTICLES.to_string()],
            Self::Article(slug) => vec![tags::ARTICLES.to_string(), tags::article(slug)],
            Self::Category(slug) => vec![tags::ARTICLES.to_string(), tags::category(slug)],
        }
    }
}

impl fmt::Display for SitePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Canonical form of a site path: query and fragment dropped, duplicate and
/// trailing slashes removed. Returns `None` unless the path is absolute.
pub fn normalize_path(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let without_query = raw.split(['?', '#']).next().unwrap_or_default();
    if !without_query.starts_with('/') {
        return None;
    }

    let segments: Vec<&str> = without_query
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();
    Some(format!("/{}", segments.join("/")))
}

//! Cache tags attached to rendered pages.

use crate::domain::article::{ArticleSlug, CategorySlug};

pub const ARTICLES: &str = "articles";
pub const CATEGORIES: &str = "categories";

pub fn article(slug: &ArticleSlug) -> String {
    format!("article-{slug}")
}

pub fn category(slug: &CategorySlug) -> String {
    format!("category-{slug}")
}

// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle, CategorySlug};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cover {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: CategorySlug,
}

/// An article as read from the CMS. Never mutated locally.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub description: String,
    pub content: String,
    pub slug: ArticleSlug,
    pub published_at: Option<DateTime<Utc>>,
    pub cover: Cover,
    pub category: Option<Category>,
}

impl Article {
    pub fn category_slug(&self) -> Option<&CategorySlug> {
        self.category.as_ref().map(|category| &category.slug)
    }

    pub fn belongs_to(&self, category: &CategorySlug) -> bool {
        self.category_slug() == Some(category)
    }
}

/// Distinct categories of `articles`, sorted by display name.
pub fn distinct_categories(articles: &[Article]) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();
    for category in articles.iter().filter_map(|article| article.category.as_ref()) {
        if !categories.iter().any(|known| known.slug == category.slug) {
            categories.push(category.clone());
        }
    }
    categories.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: i64, category: Option<(&str, &str)>) -> Article {
        Article {
            id: ArticleId::new(id).unwrap(),
            title: ArticleTitle::new(format!("title {id}")).unwrap(),
            description: String::new(),
            content: String::new(),
            slug: ArticleSlug::new(format!("article-{id}")).unwrap(),
            published_at: None,
            cover: Cover {
                url: "/placeholder.svg".into(),
            },
            category: category.map(|(name, slug)| Category {
                id: id * 10,
                name: name.into(),
                slug: CategorySlug::new(slug).unwrap(),
            }),
        }
    }

    #[test]
    fn distinct_categories_dedups_and_sorts() {
        let articles = vec![
            article(1, Some(("Sports", "sports"))),
            article(2, None),
            article(3, Some(("economy", "economy"))),
            article(4, Some(("Sports", "sports"))),
        ];

        let categories = distinct_categories(&articles);
        let slugs: Vec<&str> = categories.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["economy", "sports"]);
    }

    #[test]
    fn belongs_to_compares_category_slug() {
        let sports = CategorySlug::new("sports").unwrap();
        assert!(article(1, Some(("Sports", "sports"))).belongs_to(&sports));
        assert!(!article(2, None).belongs_to(&sports));
    }
}

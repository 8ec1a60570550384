// tests/support/builders.rs
use chrono::{DateTime, TimeZone, Utc};

use kawaraban::domain::article::*;

pub struct ArticleBuilder {
    id: i64,
    title: String,
    slug: String,
    description: String,
    content: String,
    cover_url: String,
    published_at: Option<DateTime<Utc>>,
    category: Option<(i64, String, String)>,
}

impl ArticleBuilder {
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            id: 1,
            title: format!("Title of {slug}"),
            slug,
            description: "Test description".into(),
            content: "First paragraph\n\nSecond paragraph".into(),
            cover_url: "/images/placeholder.svg".into(),
            published_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).single(),
            category: None,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn category(mut self, name: impl Into<String>, slug: impl Into<String>) -> Self {
        self.category = Some((self.id * 10, name.into(), slug.into()));
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            description: self.description,
            content: self.content,
            slug: ArticleSlug::new(self.slug).unwrap(),
            published_at: self.published_at,
            cover: Cover {
                url: self.cover_url,
            },
            category: self.category.map(|(id, name, slug)| Category {
                id,
                name,
                slug: CategorySlug::new(slug).unwrap(),
            }),
        }
    }
}

/// Two sports articles and one economy article, newest first.
pub fn sample_articles() -> Vec<Article> {
    vec![
        ArticleBuilder::new("cup-final")
            .id(3)
            .title("Cup final tonight")
            .category("Sports", "sports")
            .build(),
        ArticleBuilder::new("rates-hold")
            .id(2)
            .title("Rates hold steady")
            .category("Economy", "economy")
            .build(),
        ArticleBuilder::new("marathon")
            .id(1)
            .title("City marathon route")
            .category("Sports", "sports")
            .build(),
    ]
}

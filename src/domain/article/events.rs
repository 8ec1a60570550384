use crate::domain::article::value_objects::{ArticleSlug, CategorySlug};
use std::fmt;

/// CMS content types this site renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentModel {
    Article,
    Category,
}

impl ContentModel {
    /// Recognise a model from the webhook's `model` name or its `uid`
    /// (`api::article.article`). Returns `None` for models the site does not render.
    pub fn recognize(model: Option<&str>, uid: Option<&str>) -> Option<Self> {
        let from_model = model.and_then(|name| match name.trim().to_ascii_lowercase().as_str() {
            "article" | "articles" => Some(Self::Article),
            "category" | "categories" => Some(Self::Category),
            _ => None,
        });

        from_model.or_else(|| match uid.map(str::trim) {
            Some("api::article.article") => Some(Self::Article),
            Some("api::category.category") => Some(Self::Category),
            _ => None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for ContentModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentAction {
    Create,
    Update,
    Delete,
    Publish,
    Unpublish,
}

impl ContentAction {
    /// Parse an `entry.*` event name. Unknown entry actions count as updates;
    /// anything outside the `entry.` namespace (media, test triggers) is `None`.
    pub fn from_event(event: &str) -> Option<Self> {
        let action = event.trim().strip_prefix("entry.")?;
        Some(match action {
            "create" => Self::Create,
            "delete" => Self::Delete,
            "publish" => Self::Publish,
            "unpublish" => Self::Unpublish,
            _ => Self::Update,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "entry.create",
            Self::Update => "entry.update",
            Self::Delete => "entry.delete",
            Self::Publish => "entry.publish",
            Self::Unpublish => "entry.unpublish",
        }
    }
}

impl fmt::Display for ContentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A content change reported by the CMS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEvent {
    Article {
        action: ContentAction,
        slug: Option<ArticleSlug>,
        category: Option<CategorySlug>,
    },
    Category {
        action: ContentAction,
        slug: Option<CategorySlug>,
    },
}

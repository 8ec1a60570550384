//! Mapping from the CMS wire shape to domain articles.
//!
//! The CMS answers `{data: [...]}` where each entry is either nested
//! (`{id, attributes: {...}}`) or flat (`{id, title, ...}`) depending on its
//! version. Relations and media follow the same split (`{data: {...}}` versus
//! the object itself). Everything is read defensively from `serde_json::Value`.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::article::{
    Article, ArticleId, ArticleSlug, ArticleTitle, Category, CategorySlug, Cover,
};

#[derive(Debug, Clone)]
pub struct ArticleMapper {
    cms_base_url: String,
    placeholder_image_url: String,
}

impl ArticleMapper {
    pub fn new(cms_base_url: impl Into<String>, placeholder_image_url: impl Into<String>) -> Self {
        Self {
            cms_base_url: cms_base_url.into().trim_end_matches('/').to_string(),
            placeholder_image_url: placeholder_image_url.into(),
        }
    }

    /// Map a collection response. A missing or null `data` maps to no articles.
    pub fn map_collection(&self, body: &Value) -> Vec<Article> {
        let entries = match body.get("data") {
            Some(Value::Array(entries)) => entries.as_slice(),
            Some(Value::Null) | None => &[],
            Some(other) => std::slice::from_ref(other),
        };

        entries
            .iter()
            .filter_map(|entry| {
                let article = self.map_entry(entry);
                if article.is_none() {
                    tracing::warn!(entry = %entry, "skipping cms entry without id, title or slug");
                }
                article
            })
            .collect()
    }

    pub fn map_entry(&self, entry: &Value) -> Option<Article> {
        let fields = attributes(entry);

        let id = id_of(entry).and_then(|id| ArticleId::new(id).ok())?;
        let title = str_field(fields, "title").and_then(|title| ArticleTitle::new(title).ok())?;
        let slug = str_field(fields, "slug").and_then(|slug| ArticleSlug::new(slug).ok())?;

        Some(Article {
            id,
            title,
            description: str_field(fields, "description").unwrap_or_default().to_string(),
            content: content_text(fields.get("content")),
            slug,
            published_at: str_field(fields, "publishedAt").and_then(parse_timestamp),
            cover: self.cover(fields.get("cover")),
            category: category(fields.get("category")),
        })
    }

    fn cover(&self, value: Option<&Value>) -> Cover {
        let url = relation(value)
            .and_then(|media| str_field(attributes(media), "url"))
            .filter(|url| !url.trim().is_empty())
            .map_or_else(
                || self.placeholder_image_url.clone(),
                |url| self.absolute_url(url),
            );
        Cover { url }
    }

    fn absolute_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//") {
            url.to_string()
        } else if url.starts_with('/') {
            format!("{}{url}", self.cms_base_url)
        } else {
            format!("{}/{url}", self.cms_base_url)
        }
    }
}

/// Total number of pages announced by `meta.pagination`, if any.
pub fn page_count(body: &Value) -> Option<u64> {
    body.get("meta")?
        .get("pagination")?
        .get("pageCount")?
        .as_u64()
}

fn attributes(entry: &Value) -> &Value {
    match entry.get("attributes") {
        Some(attributes) if attributes.is_object() => attributes,
        _ => entry,
    }
}

fn relation(value: Option<&Value>) -> Option<&Value> {
    let value = value?;
    let target = if value.is_object() && value.get("data").is_some() {
        value.get("data")?
    } else {
        value
    };

    match target {
        Value::Array(items) => items.first().filter(|item| item.is_object()),
        Value::Object(_) => Some(target),
        _ => None,
    }
}

fn id_of(entry: &Value) -> Option<i64> {
    let id = entry.get("id").or_else(|| attributes(entry).get("id"))?;
    id.as_i64()
        .or_else(|| id.as_str().and_then(|raw| raw.trim().parse().ok()))
}

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .ok()
}

fn category(value: Option<&Value>) -> Option<Category> {
    let entry = relation(value)?;
    let fields = attributes(entry);
    let name = str_field(fields, "name")
        .map(str::trim)
        .filter(|name| !name.is_empty())?;
    let slug = str_field(fields, "slug")
        .map(ToString::to_string)
        .unwrap_or_else(|| slug::slugify(name));

    Some(Category {
        id: id_of(entry).unwrap_or_default(),
        name: name.to_string(),
        slug: CategorySlug::new(slug).ok()?,
    })
}

/// Content is either a plain string or rich-text blocks; blocks become
/// blank-line separated paragraphs of their text.
fn content_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(blocks)) => blocks
            .iter()
            .map(|block| {
                let mut text = String::new();
                collect_text(block, &mut text);
                text
            })
            .filter(|text| !text.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n\n"),
        _ => String::new(),
    }
}

fn collect_text(node: &Value, out: &mut String) {
    if let Some(text) = str_field(node, "text") {
        out.push_str(text);
    }
    if let Some(Value::Array(children)) = node.get("children") {
        for child in children {
            collect_text(child, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mapper() -> ArticleMapper {
        ArticleMapper::new("http://cms.local:1337/", "/images/placeholder.svg")
    }

    #[test]
    fn maps_nested_entries() {
        let body = json!({
            "data": [{
                "id": 1,
                "attributes": {
                    "title": "Nested",
                    "description": "desc",
                    "content": "body",
                    "slug": "nested",
                    "publishedAt": "2024-05-01T10:00:00.000Z",
                    "cover": { "data": { "id": 9, "attributes": { "url": "/uploads/cover.jpg" } } },
                    "category": { "data": { "id": 3, "attributes": { "name": "Sports", "slug": "sports" } } }
                }
            }]
        });

        let articles = mapper().map_collection(&body);
        assert_eq!(articles.len(), 1);
        let article = &articles[0];
        assert_eq!(article.title.as_str(), "Nested");
        assert_eq!(article.cover.url, "http://cms.local:1337/uploads/cover.jpg");
        assert_eq!(article.category.as_ref().unwrap().slug.as_str(), "sports");
        assert_eq!(
            article.published_at.unwrap().to_rfc3339(),
            "2024-05-01T10:00:00+00:00"
        );
    }

    #[test]
    fn maps_flat_entries_with_defaults() {
        let body = json!({
            "data": [{
                "id": 2,
                "documentId": "abc",
                "title": "Flat",
                "slug": "flat",
                "cover": null,
                "category": null
            }]
        });

        let articles = mapper().map_collection(&body);
        let article = &articles[0];
        assert_eq!(article.description, "");
        assert_eq!(article.content, "");
        assert_eq!(article.cover.url, "/images/placeholder.svg");
        assert!(article.category.is_none());
        assert!(article.published_at.is_none());
    }

    #[test]
    fn empty_or_missing_data_maps_to_no_articles() {
        assert!(mapper().map_collection(&json!({ "data": [] })).is_empty());
        assert!(mapper().map_collection(&json!({ "data": null })).is_empty());
        assert!(mapper().map_collection(&json!({})).is_empty());
    }

    #[test]
    fn skips_entries_missing_required_fields() {
        let body = json!({
            "data": [
                { "id": 1, "title": "No slug" },
                { "title": "No id", "slug": "no-id" },
                { "id": 3, "title": "Ok", "slug": "ok" },
                { "id": 4, "title": "Dot", "slug": ".." }
            ]
        });

        let articles = mapper().map_collection(&body);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].slug.as_str(), "ok");
    }

    #[test]
    fn flattens_block_content_and_keeps_absolute_cover_urls() {
        let body = json!({
            "data": [{
                "id": 4,
                "title": "Blocks",
                "slug": "blocks",
                "content": [
                    { "type": "paragraph", "children": [{ "type": "text", "text": "Hello " }, { "type": "text", "text": "world" }] },
                    { "type": "paragraph", "children": [{ "type": "text", "text": "" }] },
                    { "type": "paragraph", "children": [{ "type": "text", "text": "Second" }] }
                ],
                "cover": { "url": "https://cdn.example.com/a.png" },
                "category": { "id": 5, "name": "Local News" }
            }]
        });

        let article = &mapper().map_collection(&body)[0];
        assert_eq!(article.content, "Hello world\n\nSecond");
        assert_eq!(article.cover.url, "https://cdn.example.com/a.png");
        assert_eq!(article.category.as_ref().unwrap().slug.as_str(), "local-news");
    }

    #[test]
    fn page_count_reads_pagination_meta() {
        let body = json!({ "data": [], "meta": { "pagination": { "page": 1, "pageCount": 3 } } });
        assert_eq!(page_count(&body), Some(3));
        assert_eq!(page_count(&json!({ "data": [] })), None);
    }
}

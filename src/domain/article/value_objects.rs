use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleTitle> for String {
    fn from(value: ArticleTitle) -> Self {
        value.0
    }
}

/// Slugs become a single path segment and an export file name, so they may
/// not contain separators or whitespace, nor be a dot segment.
fn validate_segment(kind: &str, value: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::Validation(format!("{kind} cannot be empty")));
    }
    if value == "." || value == ".." {
        return Err(DomainError::Validation(format!(
            "{kind} cannot be a dot segment: {value:?}"
        )));
    }
    if value.contains(['/', '\\']) || value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(DomainError::Validation(format!(
            "{kind} must be a single url segment: {value:?}"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        validate_segment("slug", &value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleSlug> for String {
    fn from(value: ArticleSlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategorySlug(String);

impl CategorySlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        validate_segment("category slug", &value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CategorySlug> for String {
    fn from(value: CategorySlug) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_id_rejects_non_positive() {
        assert!(ArticleId::new(0).is_err());
        assert!(ArticleId::new(-3).is_err());
        assert_eq!(i64::from(ArticleId::new(7).unwrap()), 7);
    }

    #[test]
    fn slug_is_trimmed() {
        let slug = ArticleSlug::new("  breaking-news ").unwrap();
        assert_eq!(slug.as_str(), "breaking-news");
    }

    #[test]
    fn slug_rejects_separators_and_whitespace() {
        assert!(ArticleSlug::new("").is_err());
        assert!(ArticleSlug::new("a/b").is_err());
        assert!(ArticleSlug::new("two words").is_err());
        assert!(CategorySlug::new("   ").is_err());
        assert!(ArticleSlug::new("a\\b").is_err());
    }

    #[test]
    fn slug_rejects_dot_segments() {
        assert!(ArticleSlug::new(".").is_err());
        assert!(ArticleSlug::new("..").is_err());
        assert!(CategorySlug::new(" .. ").is_err());
        assert_eq!(ArticleSlug::new("v1.2-release").unwrap().as_str(), "v1.2-release");
        assert!(ArticleSlug::new("...").is_ok());
    }
}

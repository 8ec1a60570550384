//! Headless CMS adapter: HTTP client, response mapping and the article repository.

pub mod client;
pub mod mapping;
pub mod repository;

pub use client::{CmsError, StrapiClient, StrapiClientConfig};
pub use mapping::ArticleMapper;
pub use repository::StrapiArticleRepository;

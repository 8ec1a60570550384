mod by_category;
mod get_by_slug;
mod list;
mod service;

pub use by_category::ListCategoryArticlesQuery;
pub use get_by_slug::GetArticleBySlugQuery;
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;

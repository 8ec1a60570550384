mod render;
mod service;

pub use render::{HOME_ARTICLE_COUNT, PageRenderer, escape_html};
pub use service::PageQueryService;

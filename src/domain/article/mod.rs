pub mod entity;
pub mod events;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, Category, Cover, distinct_categories};
pub use events::{ContentAction, ContentEvent, ContentModel};
pub use repository::ArticleReadRepository;
pub use value_objects::{ArticleId, ArticleSlug, ArticleTitle, CategorySlug};

pub mod article;
pub mod errors;
pub mod revalidation;
pub mod site;

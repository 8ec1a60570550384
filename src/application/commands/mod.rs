pub mod publishing;
pub mod revalidation;

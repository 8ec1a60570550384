pub mod memory;

pub use memory::InMemoryPageCache;

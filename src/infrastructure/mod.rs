pub mod cache;
pub mod cms;
pub mod security;
pub mod storage;
pub mod time;

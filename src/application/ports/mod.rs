// src/application/ports/mod.rs
pub mod cache;
pub mod security;
pub mod storage;
pub mod time;


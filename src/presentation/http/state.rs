// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Lower-cased header names searched, in order, for the webhook token.
    pub webhook_token_headers: Arc<[String]>,
}

impl HttpState {
    pub fn new(services: Arc<ApplicationServices>, webhook_token_headers: Vec<String>) -> Self {
        Self {
            services,
            webhook_token_headers: webhook_token_headers.into(),
        }
    }
}

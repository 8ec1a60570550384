use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RevalidationDto {
    pub revalidated: bool,
    /// Milliseconds since the Unix epoch.
    pub now: i64,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WebhookResultDto {
    pub success: bool,
    /// Paths dropped from the page cache.
    pub revalidated: Vec<String>,
    /// Cache tags dropped from the page cache.
    pub tags: Vec<String>,
    pub message: String,
}

impl WebhookResultDto {
    pub fn ignored(message: impl Into<String>) -> Self {
        Self {
            success: true,
            revalidated: Vec::new(),
            tags: Vec::new(),
            message: message.into(),
        }
    }
}

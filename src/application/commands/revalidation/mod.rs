mod revalidate;
mod service;
mod webhook;

pub use revalidate::RevalidatePathCommand;
pub use service::RevalidationCommandService;
pub use webhook::{HandleWebhookCommand, WebhookPayload};

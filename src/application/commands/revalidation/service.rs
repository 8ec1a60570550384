use std::sync::Arc;

use crate::application::{
    commands::publishing::StaticPublishService,
    error::{ApplicationError, ApplicationResult},
    ports::{cache::PageCache, security::SecretMatcher, time::Clock},
    settings::RevalidationSettings,
};

pub struct RevalidationCommandService {
    pub(super) cache: Arc<dyn PageCache>,
    pub(super) secrets: Arc<dyn SecretMatcher>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) settings: RevalidationSettings,
    pub(super) publisher: Option<Arc<StaticPublishService>>,
}

impl RevalidationCommandService {
    pub fn new(
        cache: Arc<dyn PageCache>,
        secrets: Arc<dyn SecretMatcher>,
        clock: Arc<dyn Clock>,
        settings: RevalidationSettings,
    ) -> Self {
        Self {
            cache,
            secrets,
            clock,
            settings,
            publisher: None,
        }
    }

    /// Re-export and upload invalidated pages after each webhook.
    #[must_use]
    pub fn with_publisher(mut self, publisher: Arc<StaticPublishService>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    /// Fails with an infrastructure error when no secret is configured.
    pub(super) fn ensure_token(
        &self,
        configured: Option<&str>,
        presented: Option<&str>,
        name: &str,
    ) -> ApplicationResult<()> {
        let expected = configured
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ApplicationError::infrastructure(format!("{name} is not configured")))?;

        match presented {
            Some(token) if self.secrets.matches(token, expected) => Ok(()),
            Some(_) => Err(ApplicationError::unauthorized(format!("invalid {name}"))),
            None => Err(ApplicationError::unauthorized(format!("missing {name}"))),
        }
    }
}

use super::RevalidationCommandService;
use crate::{
    application::{
        dto::RevalidationDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::site::normalize_path,
};

#[derive(Debug, Clone, Default)]
pub struct RevalidatePathCommand {
    pub secret: Option<String>,
    pub path: Option<String>,
}

impl RevalidationCommandService {
    pub async fn revalidate_path(
        &self,
        command: RevalidatePathCommand,
    ) -> ApplicationResult<RevalidationDto> {
        self.ensure_token(
            self.settings.revalidation_secret.as_deref(),
            command.secret.as_deref(),
            "revalidation secret",
        )?;

        let path = command
            .path
            .filter(|path| !path.trim().is_empty())
            .ok_or_else(|| ApplicationError::validation("missing path parameter"))?;
        let normalized = normalize_path(&path)
            .ok_or_else(|| ApplicationError::validation("path must start with '/'"))?;

        let dropped = self.cache.invalidate_path(&normalized).await;
        tracing::info!(path = %normalized, dropped, "path revalidated");

        Ok(RevalidationDto {
            revalidated: true,
            now: self.clock.now().timestamp_millis(),
            path,
        })
    }
}

use bytes::Bytes;
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use super::RevalidationCommandService;
use crate::{
    application::{
        dto::WebhookResultDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleSlug, CategorySlug, ContentAction, ContentEvent, ContentModel},
        revalidation::InvalidationPlan,
    },
};

/// Notification body sent by the CMS.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct WebhookPayload {
    /// `entry.create`, `entry.update`, `entry.delete`, `entry.publish` or `entry.unpublish`.
    pub event: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub uid: Option<String>,
    /// The affected entry; `slug` and `category` are read from it.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub entry: Option<Value>,
}

#[derive(Debug, Clone, Default)]
pub struct HandleWebhookCommand {
    pub token: Option<String>,
    pub body: Bytes,
}

impl RevalidationCommandService {
    pub async fn handle_webhook(
        &self,
        command: HandleWebhookCommand,
    ) -> ApplicationResult<WebhookResultDto> {
        self.ensure_token(
            self.settings.webhook_token.as_deref(),
            command.token.as_deref(),
            "webhook token",
        )?;

        let payload: WebhookPayload = serde_json::from_slice(&command.body)
            .map_err(|err| ApplicationError::validation(format!("invalid webhook payload: {err}")))?;

        let Some(action) = ContentAction::from_event(&payload.event) else {
            tracing::info!(event = %payload.event, "ignoring non-entry webhook event");
            return Ok(WebhookResultDto::ignored(format!(
                "event {} does not affect rendered pages",
                payload.event
            )));
        };

        let Some(model) = ContentModel::recognize(payload.model.as_deref(), payload.uid.as_deref())
        else {
            let model = payload.model.or(payload.uid).unwrap_or_default();
            tracing::info!(event = %payload.event, model = %model, "ignoring webhook for unrendered model");
            return Ok(WebhookResultDto::ignored(format!(
                "model {model:?} is not rendered by this site"
            )));
        };

        let event = content_event(model, action, payload.entry.as_ref());
        let plan = InvalidationPlan::for_event(&event);
        self.apply_plan(&plan).await;

        let paths = plan.paths();
        let mut message = format!("revalidated {} paths for {action} on {model}", paths.len());
        tracing::info!(
            event = %action,
            model = %model,
            paths = ?paths,
            tags = ?plan.tags,
            "webhook revalidation applied"
        );

        if let Some(publisher) = &self.publisher {
            match publisher.publish_pages(&plan.pages).await {
                Ok(report) if report.upload.is_success() => {
                    message.push_str(&format!(
                        "; published {} files, removed {}",
                        report.upload.uploaded,
                        report.pages.removed.len()
                    ));
                }
                Ok(report) => {
                    tracing::warn!(failed = report.upload.failed.len(), "static publish finished with failures");
                    message.push_str(&format!(
                        "; static publish failed for {} files",
                        report.upload.failed.len()
                    ));
                }
                Err(err) => {
                    tracing::error!(error = %err, "static publish failed");
                    message.push_str(&format!("; static publish failed: {err}"));
                }
            }
        }

        Ok(WebhookResultDto {
            success: true,
            revalidated: paths,
            tags: plan.tags,
            message,
        })
    }

    async fn apply_plan(&self, plan: &InvalidationPlan) {
        for page in &plan.pages {
            self.cache.invalidate_path(&page.path()).await;
        }
        for tag in &plan.tags {
            let dropped = self.cache.invalidate_tag(tag).await;
            tracing::debug!(tag = %tag, dropped, "tag invalidated");
        }
    }
}

fn content_event(model: ContentModel, action: ContentAction, entry: Option<&Value>) -> ContentEvent {
    let slug = entry.and_then(|entry| string_field(entry, "slug"));
    match model {
        ContentModel::Article => ContentEvent::Article {
            action,
            slug: slug.and_then(|slug| valid_or_warn(ArticleSlug::new(slug))),
            category: entry
                .and_then(category_slug)
                .and_then(|slug| valid_or_warn(CategorySlug::new(slug))),
        },
        ContentModel::Category => ContentEvent::Category {
            action,
            slug: slug.and_then(|slug| valid_or_warn(CategorySlug::new(slug))),
        },
    }
}

fn valid_or_warn<T>(result: crate::domain::errors::DomainResult<T>) -> Option<T> {
    result
        .map_err(|err| tracing::warn!(error = %err, "ignoring unusable slug in webhook entry"))
        .ok()
}

fn string_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// The entry's category arrives flat (`{slug}`) or wrapped
/// (`{data: {attributes: {slug}}}`), depending on CMS version.
fn category_slug(entry: &Value) -> Option<&str> {
    let category = entry.get("category")?;
    if let Some(slug) = string_field(category, "slug") {
        return Some(slug);
    }

    let data = category.get("data")?;
    string_field(data, "slug").or_else(|| {
        data.get("attributes")
            .and_then(|attributes| string_field(attributes, "slug"))
    })
}

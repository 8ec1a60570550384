// tests/support/mocks.rs
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Duration, TimeZone, Utc};
use once_cell::sync::Lazy;

use kawaraban::application::ApplicationResult;
use kawaraban::application::error::ApplicationError;
use kawaraban::application::ports::{
    storage::{ObjectStore, StoredObject},
    time::Clock,
};
use kawaraban::domain::article::{Article, ArticleReadRepository, ArticleSlug, CategorySlug};
use kawaraban::domain::errors::{DomainError, DomainResult};

pub static FIXED_NOW: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());

/// Serves a fixed article list and counts how often it is asked.
#[derive(Default)]
pub struct StubArticleRepo {
    articles: Mutex<Vec<Article>>,
    calls: AtomicUsize,
}

impl StubArticleRepo {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles: Mutex::new(articles),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_articles(&self, articles: Vec<Article>) {
        *self.articles.lock().unwrap() = articles;
    }

    fn snapshot(&self) -> Vec<Article> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.articles.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ArticleReadRepository for StubArticleRepo {
    async fn list(&self, limit: Option<u32>) -> DomainResult<Vec<Article>> {
        let mut articles = self.snapshot();
        if let Some(limit) = limit {
            articles.truncate(limit as usize);
        }
        Ok(articles)
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self
            .snapshot()
            .into_iter()
            .find(|article| &article.slug == slug))
    }

    async fn list_by_category(&self, category: &CategorySlug) -> DomainResult<Vec<Article>> {
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|article| article.belongs_to(category))
            .collect())
    }
}

/// Behaves like an unreachable CMS.
pub struct FailingArticleRepo;

#[async_trait::async_trait]
impl ArticleReadRepository for FailingArticleRepo {
    async fn list(&self, _limit: Option<u32>) -> DomainResult<Vec<Article>> {
        Err(DomainError::Upstream("cms unavailable".into()))
    }

    async fn find_by_slug(&self, _slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Err(DomainError::Upstream("cms unavailable".into()))
    }

    async fn list_by_category(&self, _category: &CategorySlug) -> DomainResult<Vec<Article>> {
        Err(DomainError::Upstream("cms unavailable".into()))
    }
}

/// Clock starting at `FIXED_NOW` that tests can move forward.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self {
            now: Mutex::new(*FIXED_NOW),
        }
    }
}

impl ManualClock {
    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Keeps uploaded objects in memory; keys listed in `failing` are rejected.
#[derive(Default)]
pub struct RecordingObjectStore {
    pub objects: Mutex<Vec<StoredObject>>,
    pub deleted: Mutex<Vec<String>>,
    failing: HashSet<String>,
}

impl RecordingObjectStore {
    pub fn failing_on(keys: &[&str]) -> Self {
        Self {
            failing: keys.iter().map(|key| (*key).to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .map(|object| object.key.clone())
            .collect()
    }

    pub fn object(&self, key: &str) -> Option<StoredObject> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .find(|object| object.key == key)
            .cloned()
    }
}

#[async_trait::async_trait]
impl ObjectStore for RecordingObjectStore {
    async fn put_object(&self, object: StoredObject) -> ApplicationResult<()> {
        if self.failing.contains(&object.key) {
            return Err(ApplicationError::infrastructure(format!(
                "simulated failure for {}",
                object.key
            )));
        }
        self.objects.lock().unwrap().push(object);
        Ok(())
    }

    async fn delete_object(&self, key: &str) -> ApplicationResult<()> {
        self.deleted.lock().unwrap().push(key.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "memory://test-bucket".into()
    }
}

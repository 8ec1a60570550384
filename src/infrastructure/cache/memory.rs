use crate::application::ports::cache::{PageCache, RenderedPage};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local page cache. Contents are lost on restart, which only costs
/// a re-render.
#[derive(Default)]
pub struct InMemoryPageCache {
    pages: RwLock<HashMap<String, RenderedPage>>,
}

impl InMemoryPageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.pages.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.pages.read().await.is_empty()
    }
}

#[async_trait]
impl PageCache for InMemoryPageCache {
    async fn get(&self, path: &str) -> Option<RenderedPage> {
        self.pages.read().await.get(path).cloned()
    }

    async fn put(&self, page: RenderedPage) {
        self.pages.write().await.insert(page.path.clone(), page);
    }

    async fn invalidate_path(&self, path: &str) -> bool {
        self.pages.write().await.remove(path).is_some()
    }

    async fn invalidate_tag(&self, tag: &str) -> usize {
        let mut pages = self.pages.write().await;
        let before = pages.len();
        pages.retain(|_, page| !page.tags.iter().any(|candidate| candidate == tag));
        before - pages.len()
    }
}

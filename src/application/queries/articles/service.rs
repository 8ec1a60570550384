use std::sync::Arc;

use crate::domain::article::ArticleReadRepository;

/// Read side over the CMS. Upstream failures are logged and replaced by an
/// empty result so pages degrade instead of failing.
pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }
}

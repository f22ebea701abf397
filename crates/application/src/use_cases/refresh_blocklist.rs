use crate::services::BlocklistCache;
use blockcheck_domain::DomainError;
use std::sync::Arc;
use tracing::info;

pub struct RefreshBlocklistUseCase {
    cache: Arc<BlocklistCache>,
}

impl RefreshBlocklistUseCase {
    pub fn new(cache: Arc<BlocklistCache>) -> Self {
        Self { cache }
    }

    /// Forces a refresh and returns the resulting entry count.
    pub async fn execute(&self) -> Result<usize, DomainError> {
        let list = self.cache.force_refresh().await?;
        info!(entries = list.len(), "Blocklist refresh requested");
        Ok(list.len())
    }
}

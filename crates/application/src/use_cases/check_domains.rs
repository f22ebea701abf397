use crate::services::BlocklistCache;
use blockcheck_domain::{DomainError, LookupRequest, LookupResult};
use std::sync::Arc;
use tracing::debug;

pub struct CheckDomainsUseCase {
    cache: Arc<BlocklistCache>,
}

impl CheckDomainsUseCase {
    pub fn new(cache: Arc<BlocklistCache>) -> Self {
        Self { cache }
    }

    pub async fn execute(&self, request: &LookupRequest) -> Result<LookupResult, DomainError> {
        // Parameter validation happens before any cache access.
        let domains = request.requested_domains()?;

        let list = self.cache.get().await?;

        let mut result = LookupResult::new();
        for domain in domains {
            let blocked = list.is_blocked(&domain);
            result.insert(domain, blocked);
        }

        debug!(checked = result.len(), "Domain lookup completed");
        Ok(result)
    }
}

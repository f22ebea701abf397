use blockcheck_application::ports::BlocklistFetcher;
use blockcheck_application::services::BlocklistCache;
use blockcheck_application::use_cases::{CheckDomainsUseCase, RefreshBlocklistUseCase};
use blockcheck_domain::Config;
use blockcheck_infrastructure::HttpBlocklistFetcher;
use std::sync::Arc;
use std::time::Duration;

/// Wires the fetcher, the cache store, and the use cases on top of it.
pub struct Services {
    pub check_domains: Arc<CheckDomainsUseCase>,
    pub refresh_blocklist: Arc<RefreshBlocklistUseCase>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let fetcher: Arc<dyn BlocklistFetcher> = Arc::new(HttpBlocklistFetcher::new(
            config.blocklist.source_url.clone(),
            config.blocklist.fetch_timeout_secs,
        )?);

        let cache = Arc::new(BlocklistCache::new(
            fetcher,
            Duration::from_secs(config.blocklist.cache_ttl_secs),
            Duration::from_secs(config.blocklist.fetch_timeout_secs),
        ));

        Ok(Self {
            check_domains: Arc::new(CheckDomainsUseCase::new(Arc::clone(&cache))),
            refresh_blocklist: Arc::new(RefreshBlocklistUseCase::new(cache)),
        })
    }
}

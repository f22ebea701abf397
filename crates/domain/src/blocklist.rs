use std::time::{Duration, Instant};

/// Snapshot of the remote blocklist.
///
/// Entries are kept exactly as the source published them (line-split only,
/// no trimming or deduplication). A snapshot is never mutated; refreshes
/// replace it wholesale.
#[derive(Debug, Clone)]
pub struct BlockList {
    domains: Vec<String>,
    fetched_at: Instant,
}

impl BlockList {
    pub fn new(domains: Vec<String>) -> Self {
        Self {
            domains,
            fetched_at: Instant::now(),
        }
    }

    /// Exact, case-sensitive match against the raw entries.
    pub fn is_blocked(&self, domain: &str) -> bool {
        self.domains.iter().any(|entry| entry == domain)
    }

    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }
}

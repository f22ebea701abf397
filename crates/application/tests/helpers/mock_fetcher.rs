#![allow(dead_code)]

use async_trait::async_trait;
use blockcheck_application::ports::BlocklistFetcher;
use blockcheck_domain::DomainError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// Scriptable fetcher: fixed delay, swappable outcome, call counter.
pub struct MockFetcher {
    call_count: Arc<AtomicUsize>,
    delay_ms: u64,
    outcome: RwLock<Result<Vec<String>, DomainError>>,
}

impl MockFetcher {
    pub fn with_domains(domains: &[&str]) -> Self {
        Self {
            call_count: Arc::new(AtomicUsize::new(0)),
            delay_ms: 0,
            outcome: RwLock::new(Ok(domains.iter().map(|d| d.to_string()).collect())),
        }
    }

    pub fn failing(status: Option<u16>, message: &str) -> Self {
        Self {
            call_count: Arc::new(AtomicUsize::new(0)),
            delay_ms: 0,
            outcome: RwLock::new(Err(DomainError::fetch(status, message))),
        }
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn set_domains(&self, domains: &[&str]) {
        *self.outcome.write().unwrap() = Ok(domains.iter().map(|d| d.to_string()).collect());
    }

    pub fn set_failure(&self, status: Option<u16>, message: &str) {
        *self.outcome.write().unwrap() = Err(DomainError::fetch(status, message));
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BlocklistFetcher for MockFetcher {
    async fn fetch(&self) -> Result<Vec<String>, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
        self.outcome.read().unwrap().clone()
    }
}

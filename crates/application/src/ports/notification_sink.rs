use async_trait::async_trait;
use blockcheck_domain::DomainError;

/// Outbound channel for prebuilt plain-text summaries.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn send(&self, message: &str) -> Result<(), DomainError>;
}

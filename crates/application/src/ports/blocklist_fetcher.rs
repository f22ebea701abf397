use async_trait::async_trait;
use blockcheck_domain::DomainError;

/// Retrieves the raw blocklist from its remote source.
///
/// One outbound call per invocation, no retries. Returns the list split on
/// line boundaries with entries otherwise untouched; trimming and
/// deduplication are the caller's concern.
#[async_trait]
pub trait BlocklistFetcher: Send + Sync {
    async fn fetch(&self) -> Result<Vec<String>, DomainError>;
}

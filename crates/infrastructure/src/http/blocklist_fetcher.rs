use async_trait::async_trait;
use blockcheck_application::ports::BlocklistFetcher;
use blockcheck_domain::DomainError;
use std::time::Duration;
use tracing::debug;

/// Fetches the newline-delimited blocklist over HTTP.
pub struct HttpBlocklistFetcher {
    client: reqwest::Client,
    source_url: String,
}

impl HttpBlocklistFetcher {
    pub fn new(source_url: String, timeout_secs: u64) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .user_agent("Blockcheck/1.0 (blocklist-fetch)")
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(Self { client, source_url })
    }
}

#[async_trait]
impl BlocklistFetcher for HttpBlocklistFetcher {
    async fn fetch(&self) -> Result<Vec<String>, DomainError> {
        debug!(url = %self.source_url, "Fetching blocklist");

        let response = self
            .client
            .get(&self.source_url)
            .send()
            .await
            .map_err(|e| DomainError::fetch(e.status().map(|s| s.as_u16()), e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::fetch(
                Some(status.as_u16()),
                format!("Failed to fetch domain list: {status}"),
            ));
        }

        let text = response
            .text()
            .await
            .map_err(|e| DomainError::fetch(None, e.to_string()))?;

        // Line-split only; entries are kept verbatim for the callers.
        Ok(text.lines().map(str::to_string).collect())
    }
}

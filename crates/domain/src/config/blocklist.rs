use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlocklistConfig {
    /// Remote newline-delimited domain list.
    #[serde(default = "default_source_url")]
    pub source_url: String,

    /// Seconds a fetched list stays fresh before the next get() refetches.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Upper bound on a single outbound fetch.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

impl Default for BlocklistConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            cache_ttl_secs: default_cache_ttl_secs(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

fn default_source_url() -> String {
    "https://raw.githubusercontent.com/Skiddle-ID/blocklist/main/domains".to_string()
}

fn default_cache_ttl_secs() -> u64 {
    3600
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

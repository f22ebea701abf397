use serde::{Deserialize, Serialize};

/// Periodic lookup-summary report pushed to a notification sink.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Watchlist checked on every report tick.
    #[serde(default)]
    pub domains: Vec<String>,

    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    #[serde(default)]
    pub telegram_bot_token: Option<String>,

    #[serde(default)]
    pub telegram_chat_id: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            domains: vec![],
            interval_secs: default_interval_secs(),
            telegram_bot_token: None,
            telegram_chat_id: None,
        }
    }
}

fn default_interval_secs() -> u64 {
    3600
}

//! Blockcheck Infrastructure Layer
pub mod http;
pub mod notify;

pub use http::HttpBlocklistFetcher;
pub use notify::TelegramNotifier;

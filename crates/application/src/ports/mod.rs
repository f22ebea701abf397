pub mod blocklist_fetcher;
pub mod notification_sink;

pub use blocklist_fetcher::BlocklistFetcher;
pub use notification_sink::NotificationSink;

pub mod blocklist_fetcher;

pub use blocklist_fetcher::HttpBlocklistFetcher;

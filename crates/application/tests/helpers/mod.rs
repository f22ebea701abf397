pub mod mock_fetcher;

pub use mock_fetcher::MockFetcher;

pub mod check_domains;
pub mod refresh_blocklist;

pub use check_domains::CheckDomainsUseCase;
pub use refresh_blocklist::RefreshBlocklistUseCase;

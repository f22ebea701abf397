//! Blockcheck Domain Layer
pub mod blocklist;
pub mod config;
pub mod errors;
pub mod lookup;

pub use blocklist::BlockList;
pub use config::Config;
pub use errors::DomainError;
pub use lookup::{LookupEntry, LookupRequest, LookupResult};

pub mod blocklist;
pub mod errors;
pub mod logging;
pub mod report;
pub mod root;
pub mod server;

pub use blocklist::BlocklistConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use report::ReportConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;

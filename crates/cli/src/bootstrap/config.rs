use blockcheck_domain::config::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        source_url = %config.blocklist.source_url,
        cache_ttl_secs = config.blocklist.cache_ttl_secs,
        "Configuration loaded"
    );

    Ok(config)
}

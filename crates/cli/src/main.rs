use blockcheck_api::AppState;
use blockcheck_application::ports::NotificationSink;
use blockcheck_domain::config::CliOverrides;
use blockcheck_infrastructure::TelegramNotifier;
use blockcheck_jobs::LookupReportJob;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "blockcheck")]
#[command(version)]
#[command(about = "Blockcheck - domain blocklist lookup service")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Blocklist source URL
    #[arg(long)]
    source_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        source_url: cli.source_url.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting Blockcheck v{}", env!("CARGO_PKG_VERSION"));

    let services = di::Services::new(&config)?;

    let shutdown = CancellationToken::new();

    if config.report.enabled {
        // validate() guarantees the credentials are present when enabled
        let bot_token = config.report.telegram_bot_token.clone().unwrap_or_default();
        let chat_id = config.report.telegram_chat_id.clone().unwrap_or_default();
        let sink: Arc<dyn NotificationSink> = Arc::new(TelegramNotifier::new(bot_token, chat_id)?);

        let job = LookupReportJob::new(
            Arc::clone(&services.check_domains),
            sink,
            config.report.domains.clone(),
        )
        .with_interval(config.report.interval_secs)
        .with_cancellation(shutdown.clone());

        Arc::new(job).start().await;
        info!("Lookup report job started");
    }

    let app_state = AppState {
        check_domains: services.check_domains,
        refresh_blocklist: services.refresh_blocklist,
    };

    let web_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

    server::start_web_server(web_addr, app_state).await?;

    shutdown.cancel();
    info!("Server shutdown complete");
    Ok(())
}

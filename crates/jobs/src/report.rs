use blockcheck_application::ports::NotificationSink;
use blockcheck_application::use_cases::CheckDomainsUseCase;
use blockcheck_domain::{DomainError, LookupRequest};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const DEFAULT_INTERVAL_SECS: u64 = 3600;

/// Background job that periodically checks a fixed watchlist and pushes the
/// rendered plain-text summary to the notification sink.
///
/// `Arc<Self>` spawn so the job owns its state across ticks; the first tick
/// is consumed immediately so no report fires at startup.
pub struct LookupReportJob {
    check_domains: Arc<CheckDomainsUseCase>,
    sink: Arc<dyn NotificationSink>,
    watchlist: Vec<String>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl LookupReportJob {
    pub fn new(
        check_domains: Arc<CheckDomainsUseCase>,
        sink: Arc<dyn NotificationSink>,
        watchlist: Vec<String>,
    ) -> Self {
        Self {
            check_domains,
            sink,
            watchlist,
            interval_secs: DEFAULT_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            watchlist = self.watchlist.len(),
            "Starting lookup report job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("LookupReportJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        if let Err(e) = self.run_once().await {
                            error!(error = %e, "LookupReportJob: report failed");
                        }
                    }
                }
            }
        });
    }

    async fn run_once(&self) -> Result<(), DomainError> {
        let request = LookupRequest::list(self.watchlist.join(","));
        let result = self.check_domains.execute(&request).await?;

        self.sink.send(&result.to_plain_text()).await?;

        info!(checked = result.len(), "LookupReportJob: report delivered");
        Ok(())
    }
}

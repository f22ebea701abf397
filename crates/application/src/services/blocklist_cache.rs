use crate::ports::BlocklistFetcher;
use arc_swap::ArcSwapOption;
use blockcheck_domain::{BlockList, DomainError};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, warn};

type RefreshOutcome = Result<Arc<BlockList>, DomainError>;
type InflightReceiver = watch::Receiver<Option<RefreshOutcome>>;

/// TTL-guarded holder of the current [`BlockList`].
///
/// The only shared mutable state in the service. All mutation happens in the
/// refresh section, and concurrent refreshes collapse into a single fetch:
/// the first caller becomes the leader and runs the fetch, everyone else
/// subscribes to a `watch` channel and receives the leader's outcome.
///
/// A failed refresh keeps serving the previous list when one exists
/// (stale-while-revalidate); with nothing cached the fetch error is returned
/// to every waiter.
pub struct BlocklistCache {
    fetcher: Arc<dyn BlocklistFetcher>,
    ttl: Duration,
    fetch_timeout: Duration,
    current: ArcSwapOption<BlockList>,
    inflight: Mutex<Option<InflightReceiver>>,
}

/// Role handed out by the in-flight slot: the leader runs the fetch and
/// publishes through the sender, followers await the receiver.
enum RefreshRole {
    Leader(watch::Sender<Option<RefreshOutcome>>),
    Follower(InflightReceiver),
}

/// Clears the in-flight slot when the leader finishes or is dropped
/// mid-fetch, so a vanished leader never wedges later refreshes.
struct InflightLeaderGuard<'a> {
    cache: &'a BlocklistCache,
}

impl Drop for InflightLeaderGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.cache.inflight.lock() {
            *slot = None;
        }
    }
}

impl BlocklistCache {
    pub fn new(fetcher: Arc<dyn BlocklistFetcher>, ttl: Duration, fetch_timeout: Duration) -> Self {
        Self {
            fetcher,
            ttl,
            fetch_timeout,
            current: ArcSwapOption::empty(),
            inflight: Mutex::new(None),
        }
    }

    /// Returns the current list, refreshing first if it is absent or stale.
    pub async fn get(&self) -> RefreshOutcome {
        if let Some(list) = self.fresh() {
            return Ok(list);
        }
        self.refresh().await
    }

    /// Refreshes regardless of freshness. Joins an already running refresh
    /// instead of starting a second fetch.
    pub async fn force_refresh(&self) -> RefreshOutcome {
        self.refresh().await
    }

    fn fresh(&self) -> Option<Arc<BlockList>> {
        self.current.load_full().filter(|list| list.is_fresh(self.ttl))
    }

    async fn refresh(&self) -> RefreshOutcome {
        // The slot lock never crosses an await: the locked section is
        // synchronous and only hands back a role.
        match self.join_or_lead()? {
            RefreshRole::Follower(rx) => self.wait_for_leader(rx).await,
            RefreshRole::Leader(tx) => {
                let guard = InflightLeaderGuard { cache: self };
                self.refresh_as_leader(guard, tx).await
            }
        }
    }

    fn join_or_lead(&self) -> Result<RefreshRole, DomainError> {
        let mut slot = match self.inflight.lock() {
            Ok(slot) => slot,
            Err(_) => {
                return Err(DomainError::Internal(
                    "blocklist refresh state poisoned".to_string(),
                ))
            }
        };
        if let Some(rx) = (*slot).clone() {
            return Ok(RefreshRole::Follower(rx));
        }
        let (tx, rx) = watch::channel(None);
        *slot = Some(rx);
        Ok(RefreshRole::Leader(tx))
    }

    async fn refresh_as_leader(
        &self,
        guard: InflightLeaderGuard<'_>,
        tx: watch::Sender<Option<RefreshOutcome>>,
    ) -> RefreshOutcome {
        debug!("Blocklist refresh started");

        let fetched = match tokio::time::timeout(self.fetch_timeout, self.fetcher.fetch()).await {
            Ok(result) => result,
            Err(_) => Err(DomainError::fetch(
                None,
                format!("fetch timed out after {}s", self.fetch_timeout.as_secs()),
            )),
        };

        let outcome = match fetched {
            Ok(domains) => {
                let list = Arc::new(BlockList::new(domains));
                self.current.store(Some(Arc::clone(&list)));
                info!(entries = list.len(), "Blocklist refreshed");
                Ok(list)
            }
            Err(e) => match self.current.load_full() {
                Some(stale) => {
                    warn!(error = %e, "Blocklist refresh failed; serving stale list");
                    Ok(stale)
                }
                None => {
                    warn!(error = %e, "Blocklist refresh failed with no cached list");
                    Err(e)
                }
            },
        };

        // The slot must be empty before the outcome is published, so every
        // receiver still holding the channel predates the send.
        drop(guard);
        let _ = tx.send(Some(outcome.clone()));
        outcome
    }

    async fn wait_for_leader(&self, mut rx: InflightReceiver) -> RefreshOutcome {
        if rx.changed().await.is_ok() {
            if let Some(outcome) = rx.borrow().clone() {
                return outcome;
            }
        }

        // Leader vanished without publishing. Fall back to whatever is
        // cached rather than racing to start another fetch here.
        match self.current.load_full() {
            Some(list) => Ok(list),
            None => Err(DomainError::fetch(None, "blocklist refresh was aborted")),
        }
    }
}

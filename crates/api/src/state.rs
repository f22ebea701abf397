use blockcheck_application::use_cases::{CheckDomainsUseCase, RefreshBlocklistUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub check_domains: Arc<CheckDomainsUseCase>,
    pub refresh_blocklist: Arc<RefreshBlocklistUseCase>,
}

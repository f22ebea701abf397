use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use blockcheck_api::{create_routes, AppState};
use blockcheck_application::ports::BlocklistFetcher;
use blockcheck_application::services::BlocklistCache;
use blockcheck_application::use_cases::{CheckDomainsUseCase, RefreshBlocklistUseCase};
use blockcheck_domain::DomainError;
use http_body_util::BodyExt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

struct StaticFetcher {
    domains: Option<Vec<String>>,
    call_count: AtomicUsize,
}

impl StaticFetcher {
    fn new(domains: &[&str]) -> Self {
        Self {
            domains: Some(domains.iter().map(|d| d.to_string()).collect()),
            call_count: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            domains: None,
            call_count: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BlocklistFetcher for StaticFetcher {
    async fn fetch(&self) -> Result<Vec<String>, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        match &self.domains {
            Some(domains) => Ok(domains.clone()),
            None => Err(DomainError::fetch(Some(503), "source unavailable")),
        }
    }
}

fn make_app(fetcher: Arc<StaticFetcher>) -> Router {
    let cache = Arc::new(BlocklistCache::new(
        fetcher as Arc<dyn BlocklistFetcher>,
        Duration::from_secs(3600),
        Duration::from_secs(5),
    ));
    create_routes(AppState {
        check_domains: Arc::new(CheckDomainsUseCase::new(Arc::clone(&cache))),
        refresh_blocklist: Arc::new(RefreshBlocklistUseCase::new(cache)),
    })
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_plain_text_single_domain() {
    let app = make_app(Arc::new(StaticFetcher::new(&["a.com", "b.com"])));

    let (status, body) = get(app, "/?domain=b.com").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "b.com: Blocked\n");
}

#[tokio::test]
async fn test_plain_text_domain_list() {
    let app = make_app(Arc::new(StaticFetcher::new(&["a.com", "b.com"])));

    let (status, body) = get(app, "/?domains=a.com,c.com").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "a.com: Blocked\nc.com: Not Blocked\n");
}

#[tokio::test]
async fn test_json_output_preserves_query_order() {
    let app = make_app(Arc::new(StaticFetcher::new(&["a.com", "b.com"])));

    let (status, body) = get(app, "/?domains=a.com,c.com&json=true").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"a.com":{"blocked":true},"c.com":{"blocked":false}}"#);
}

#[tokio::test]
async fn test_both_parameters_is_bad_request() {
    let fetcher = Arc::new(StaticFetcher::new(&["a.com"]));
    let app = make_app(Arc::clone(&fetcher));

    let (status, body) = get(app, "/?domain=a.com&domains=b.com").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("cannot be provided simultaneously"));
    assert_eq!(fetcher.call_count(), 0, "validation must precede the cache");
}

#[tokio::test]
async fn test_missing_parameters_is_bad_request() {
    let app = make_app(Arc::new(StaticFetcher::new(&["a.com"])));

    let (status, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "No valid parameters provided.");
}

#[tokio::test]
async fn test_refresh_returns_fixed_confirmation() {
    let fetcher = Arc::new(StaticFetcher::new(&["a.com"]));
    let app = make_app(Arc::clone(&fetcher));

    let (status, body) = get(app, "/?refresh=true").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Cache Refreshed!");
    assert_eq!(fetcher.call_count(), 1);
}

#[tokio::test]
async fn test_refresh_skips_lookup_parameters() {
    let app = make_app(Arc::new(StaticFetcher::new(&["a.com"])));

    // refresh wins even when lookup parameters are present
    let (status, body) = get(app, "/?refresh=true&domain=a.com").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Cache Refreshed!");
}

#[tokio::test]
async fn test_fetch_failure_without_cache_is_internal_error() {
    let app = make_app(Arc::new(StaticFetcher::failing()));

    let (status, body) = get(app, "/?domain=a.com").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Blocklist unavailable");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = make_app(Arc::new(StaticFetcher::new(&[])));

    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

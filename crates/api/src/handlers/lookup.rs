use crate::{
    dto::{JsonLookup, LookupParams},
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, instrument};

/// Single lookup endpoint.
///
/// `refresh=true` short-circuits to a forced cache refresh and a fixed
/// confirmation body; otherwise the requested domains are checked against
/// the cached blocklist and rendered as JSON or plain text.
#[instrument(skip(state, params), name = "api_lookup")]
pub async fn lookup(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> Result<Response, ApiError> {
    if params.refresh_requested() {
        let entries = state.refresh_blocklist.execute().await?;
        debug!(entries, "Cache refresh completed");
        return Ok("Cache Refreshed!".into_response());
    }

    let json = params.json_requested();
    let request = params.into_request();
    let result = state.check_domains.execute(&request).await?;

    debug!(checked = result.len(), json, "Lookup completed");

    if json {
        Ok(Json(JsonLookup(&result)).into_response())
    } else {
        Ok(result.to_plain_text().into_response())
    }
}

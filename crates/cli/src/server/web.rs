use blockcheck_api::{create_routes, AppState};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn start_web_server(bind_addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = create_routes(state).layer(TraceLayer::new_for_http());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!(bind_address = %bind_addr, "Web server started");

    axum::serve(listener, app).await?;

    Ok(())
}

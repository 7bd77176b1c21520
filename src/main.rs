use axum::extract::Extension;
use axum::routing::post;
use axum::Router;
use std::sync::Arc;

use shrimp_leaderboard::config::{self, StoreConfig};
use shrimp_leaderboard::store::StoreClient;
use shrimp_leaderboard::submission::handlers::{handle_method_not_allowed, handle_submit_score};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Fail fast on missing credentials instead of erroring per request.
    let store_config = StoreConfig::from_env()?;
    let bind_addr = config::bind_addr_from_env()?;

    tracing::info!("Store configured: {:?}", store_config);

    let store = Arc::new(StoreClient::new(Arc::new(store_config)));

    let app = Router::new()
        .route(
            "/submit-score",
            post(handle_submit_score).fallback(handle_method_not_allowed),
        )
        .layer(Extension(store));

    tracing::info!("Leaderboard server listening on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

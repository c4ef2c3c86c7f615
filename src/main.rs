mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let catalog = client::services::CatalogService::from_config(&config.catalog).expect("catalog client init failed");
    tracing::info!(
        base_url = %config.catalog.base_url,
        user_cache_ttl_secs = catalog.user_cache_ttl().as_secs(),
        "catalog service initialized"
    );

    let state = state::AppState::new(catalog);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "classroom listening");
    axum::serve(listener, app).await.expect("server failed");
}

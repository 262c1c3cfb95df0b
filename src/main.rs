use discipline_dashboard::{clock::SystemClock, quotes, router, AppState, Config, Dashboard, JsonFileStore};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    info!("using data file {}", config.data_path.display());

    let store = Arc::new(JsonFileStore::new(config.data_path.clone()));
    let dashboard = Dashboard::open(store, Arc::new(SystemClock)).await;
    info!("loaded {} habits", dashboard.habits().len());

    let state = AppState::new(dashboard, quotes::pick_random());
    let app = router(state);

    let addr = config.listen_addr();
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

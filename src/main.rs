use anyhow::{Context, Result};
use dinosaur_encyclopedia::{
    config::Config,
    routes::RouteTable,
    server::{create_router, AppState},
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dinosaur_encyclopedia=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    // A gap in the route table is a configuration error: refuse to start.
    let routes = RouteTable::builtin().context("Route table failed validation")?;
    info!(
        "Loaded {} routes for locales {:?} (default: {})",
        routes.all_routes().len(),
        routes.locales(),
        config.default_locale
    );

    let addr = config.socket_addr();
    let app = create_router(AppState::new(config, routes));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}

use scribo_server::{AppState, ServerConfig, app};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("scribo_server=info,scribo_core=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env()?;
    let router = app(AppState::new(&config), config.request_timeout);

    let listener = TcpListener::bind(config.addr).await?;
    tracing::info!(
        addr = %config.addr,
        min_words = config.reflow.min_words,
        max_words = config.reflow.max_words,
        "scribo server listening"
    );

    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}

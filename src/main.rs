use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use user_growth::{router, stats, AppState, ServerConfig, RAW_RECORDS};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = ServerConfig::from_env()?;

    // Refuse to start on a dataset the page could never render.
    let daily = stats::build_daily_series(RAW_RECORDS)?;
    info!(
        records = RAW_RECORDS.len(),
        observed = daily.len(),
        mode = %config.default_mode,
        "loaded growth records"
    );

    let app = router(AppState::new(RAW_RECORDS, config.default_mode));
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

//! Binary entrypoint for the algoviz HTTP server.
//!
//! Configuration comes from `ALGOVIZ_*` environment variables (see
//! [`algoviz_server::config`]); log filtering from `RUST_LOG` (default `info`).

use tracing_subscriber::EnvFilter;

use algoviz_server::config::ServerConfig;
use algoviz_server::router::build_router;
use algoviz_server::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::new(&config)?;
    let app = build_router(state);

    let addr = config.bind_addr();
    tracing::info!(
        max_queens = config.limits.max_queens,
        max_array_len = config.limits.max_array_len,
        "algoviz server starting on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

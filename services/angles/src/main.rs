use anyhow::Context;
use tracing::info;

use fingerflex_angles::config::AnglesConfig;
use fingerflex_angles::router::build_router;
use fingerflex_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AnglesConfig::from_env().context("failed to load config")?;

    let router = build_router();
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("angles service listening on {addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}

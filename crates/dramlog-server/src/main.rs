//! dramlog-server: HTTP API over a whisky tasting data root.

use anyhow::Result;
use tracing::info;

use dramlog_store::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting dramlog-server v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    dramlog_server::serve(config).await
}

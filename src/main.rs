//! Embedding adapter server binary.

use anyhow::Result;
use integrations_embedding_adapter::{observability, run_server, AdapterConfig, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_tracing();

    info!("Starting embedding adapter v{}", env!("CARGO_PKG_VERSION"));

    let config = AdapterConfig::from_env()?;
    let addr = config.bind_addr()?;
    info!(
        backend = %config.base_url,
        model = %config.backend_model,
        timeout_secs = config.timeout.as_secs(),
        "Loaded configuration"
    );

    let state = AppState::new(config)?;
    run_server(state, addr).await?;

    Ok(())
}

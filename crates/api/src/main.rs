use std::sync::Arc;

use anyhow::Context;

use itemservice_api::app::{build_app, AppServices};
use itemservice_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    itemservice_observability::init(config.log_format);

    let services = AppServices::in_memory();
    if config.seed_items {
        services.seed_demo_items()?;
        tracing::info!("seeded demo items");
    }

    let app = build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

use std::sync::Arc;

use anyhow::Context;

use catalog_api::{app, config::AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    catalog_observability::init(config.log_format);

    let services = Arc::new(app::services::build_services(&config).context("failed to build services")?);
    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %listener.local_addr()?, seed_demo = config.seed_demo, "listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

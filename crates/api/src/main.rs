use std::sync::Arc;

use anyhow::Context;
use jobboard_infra::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    jobboard_observability::init();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    let services = jobboard_api::app::services::build_services(&config)
        .context("failed to build services")?;
    let app = jobboard_api::app::build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        external = %config.external.base_url,
        "listening"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

use analyzer_service::config::get_configuration;
use analyzer_service::observability::init_tracing;
use analyzer_service::services::metrics::init_metrics;
use analyzer_service::startup::Application;
use dotenvy::dotenv;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing("info");

    let configuration = get_configuration().map_err(|e| {
        tracing::error!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_metrics();

    let app = Application::build(configuration).await?;
    app.run_until_stopped().await?;

    Ok(())
}

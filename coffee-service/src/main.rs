use coffee_service::config::CoffeeConfig;
use coffee_service::services::init_metrics;
use coffee_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Metrics recorder must be installed before any metrics are recorded
    init_metrics();
    init_tracing("info,coffee_service=debug");

    let config = CoffeeConfig::load()?;
    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}

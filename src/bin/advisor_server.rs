use anyhow::Result;
use stack_advisor::utils::init_tracing;
use stack_advisor::AdvisorConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AdvisorConfig::from_env();
    init_tracing(&config.log_filter)?;
    stack_advisor::server::run_server(config).await
}

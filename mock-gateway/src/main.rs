use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr: SocketAddr = "0.0.0.0:5000".parse()?;
    info!("Mock payment gateway listening on {addr}");
    info!("  POST /api/payment/process           (100-500ms, 5% failures)");
    info!("  POST /api/payment/reliable/:delay_ms (fixed delay, always ok)");

    mock_gateway::run(addr).await
}

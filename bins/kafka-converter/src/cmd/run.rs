use broker_kafka::KafkaConnector;
use relay_engine::{Relay, RelayConfig};

use crate::config::Cli;
use crate::error::ConverterError;

pub async fn run(cli: Cli) -> Result<(), ConverterError> {
    let config = RelayConfig::from(cli);
    tracing::info!(
        config = %serde_json::to_string(&config).unwrap_or_default(),
        "starting kafka-converter"
    );

    let relay = Relay::start(&config, &KafkaConnector)?;
    tracing::info!("kafka-converter started, press Ctrl+C to stop");

    // --- Ожидание Ctrl+C ---
    let signal = tokio::signal::ctrl_c().await;
    tracing::info!("shutting down...");

    // Relay останавливается и при ошибке signal handler'а.
    relay.stop().await?;
    signal?;
    Ok(())
}

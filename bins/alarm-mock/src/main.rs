mod error;
mod publish;

use clap::Parser;
use publish::MockArgs;

#[derive(Parser)]
#[command(name = "alarm-mock", about = "Публикует тестовые OpenNMS alarm'ы в Kafka")]
struct Cli {
    #[command(flatten)]
    args: MockArgs,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = publish::run(&broker_kafka::KafkaConnector, &cli.args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

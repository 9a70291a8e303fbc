use std::time::Duration;

use clap::{ArgAction, Parser};

use relay_engine::RelayConfig;
use relay_engine::config::{DEFAULT_BOOTSTRAP, DEFAULT_GROUP_ID, DEFAULT_MESSAGE_KIND};

#[derive(Parser, Clone, Debug)]
#[command(
    name = "kafka-converter",
    about = "Конвертер OpenNMS GPB сообщений из Kafka в JSON"
)]
pub struct Cli {
    /// Kafka bootstrap server (host:port[,host:port])
    #[arg(long, env = "KAFKA_BOOTSTRAP", default_value = DEFAULT_BOOTSTRAP)]
    pub bootstrap: String,

    /// Source topic с GPB сообщениями (обязательно)
    #[arg(long, env = "SOURCE_TOPIC", default_value = "")]
    pub source_topic: String,

    /// Destination topic для JSON (обязательно)
    #[arg(long, env = "DEST_TOPIC", default_value = "")]
    pub dest_topic: String,

    /// Destination topic для плоского JSON (пусто = не отправлять)
    #[arg(long, env = "DEST_TOPIC_FLAT", default_value = "")]
    pub dest_topic_flat: String,

    /// Consumer group id
    #[arg(long, env = "GROUP_ID", default_value = DEFAULT_GROUP_ID)]
    pub group_id: String,

    /// Kind сообщений: event, alarm, node, edge, metric
    #[arg(long, env = "MESSAGE_KIND", default_value = DEFAULT_MESSAGE_KIND)]
    pub message_kind: String,

    /// Доп. параметры producer'а, CSV key=value
    #[arg(long, env = "PRODUCER_PARAMS", default_value = "")]
    pub producer_params: String,

    /// Доп. параметры consumer'а, CSV key=value
    #[arg(long, env = "CONSUMER_PARAMS", default_value = "")]
    pub consumer_params: String,

    /// Логировать отправляемые payload'ы (true/false)
    #[arg(long, env = "DEBUG", default_value_t = false, action = ArgAction::Set)]
    pub debug: bool,

    /// Сколько ждать доставки in-flight записей при остановке, мс
    #[arg(long, env = "SHUTDOWN_GRACE_MS", default_value_t = 5000)]
    pub shutdown_grace_ms: u64,
}

impl From<Cli> for RelayConfig {
    fn from(cli: Cli) -> Self {
        Self {
            bootstrap: cli.bootstrap,
            source_topic: cli.source_topic,
            dest_topic: cli.dest_topic,
            dest_topic_flat: cli.dest_topic_flat,
            message_kind: cli.message_kind,
            group_id: cli.group_id,
            producer_params: cli.producer_params,
            consumer_params: cli.consumer_params,
            debug: cli.debug,
            shutdown_grace: Duration::from_millis(cli.shutdown_grace_ms),
        }
    }
}

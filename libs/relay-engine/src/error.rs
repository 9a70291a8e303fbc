use relay_api::BrokerError;

use crate::flatten::FlattenError;

/// Ошибки запуска/остановки relay. Все варианты, кроме `Task`,
/// возникают до запуска задач.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("{0}")]
    Config(String),

    #[error("could not create {handle}: {source}")]
    Connection {
        handle: &'static str,
        source: BrokerError,
    },

    #[error("{task} task failed: {source}")]
    Task {
        task: &'static str,
        source: tokio::task::JoinError,
    },
}

/// Ошибка обработки одной записи. Никогда не останавливает relay.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("kafka consumer error: {0}")]
    Read(BrokerError),

    #[error(transparent)]
    Decode(#[from] onms_model::DecodeError),

    #[error("cannot convert GPB to JSON: {0}")]
    Serialize(serde_json::Error),

    #[error("cannot flatten JSON: {0}")]
    Flatten(#[from] FlattenError),

    #[error("cannot submit record to '{topic}': {source}")]
    Produce { topic: String, source: BrokerError },
}

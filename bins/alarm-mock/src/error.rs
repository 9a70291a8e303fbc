use relay_api::BrokerError;

#[derive(Debug, thiserror::Error)]
pub enum MockError {
    #[error("{0}")]
    Broker(#[from] BrokerError),

    #[error("producer close task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("{delivered} of {total} alarm(s) delivered ({failed} failed)")]
    Undelivered { delivered: u64, failed: u64, total: u64 },
}

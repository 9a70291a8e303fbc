/// Error reported by a broker client implementation.
///
/// The variant tells the relay how to treat it: `Connect` is fatal at
/// startup, `Read` / `Produce` / `Delivery` are per-record and never stop
/// the relay, `Close` only affects shutdown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrokerError {
    #[error("connect: {0}")]
    Connect(String),

    #[error("read: {0}")]
    Read(String),

    #[error("produce: {0}")]
    Produce(String),

    #[error("delivery: {0}")]
    Delivery(String),

    #[error("close: {0}")]
    Close(String),
}

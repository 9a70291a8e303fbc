#[derive(Debug, thiserror::Error)]
pub enum ConverterError {
    #[error("{0}")]
    Relay(#[from] relay_engine::RelayError),

    #[error("signal: {0}")]
    Signal(#[from] std::io::Error),
}

pub mod config;
pub mod error;
pub mod flatten;
pub mod pipeline;
pub mod relay;
pub mod stats;

pub use config::RelayConfig;
pub use error::{RecordError, RelayError};
pub use flatten::{FlattenError, flatten};
pub use pipeline::Pipeline;
pub use relay::Relay;
pub use stats::{ConsumeStats, DeliveryStats, RelayStats};

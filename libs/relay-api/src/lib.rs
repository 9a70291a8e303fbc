pub mod broker;
pub mod error;
pub mod record;
pub mod settings;

pub use broker::{BoxFuture, Connector, DeliveryReports, RecordSink, RecordSource};
pub use error::BrokerError;
pub use record::{DeliveryReport, OutboundRecord, RawRecord};
pub use settings::ClientSettings;

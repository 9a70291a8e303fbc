use std::time::Duration;

use rdkafka::config::{ClientConfig, RDKafkaLogLevel};
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::error::KafkaError;
use rdkafka::message::Message;
use rdkafka::producer::{BaseRecord, DeliveryResult, Producer, ProducerContext, ThreadedProducer};
use rdkafka::util::Timeout;
use rdkafka::ClientContext;
use tokio::sync::mpsc;

use relay_api::{
    BoxFuture, BrokerError, ClientSettings, Connector, DeliveryReport, DeliveryReports,
    OutboundRecord, RawRecord, RecordSink, RecordSource,
};

/// Перенести settings в librdkafka config как есть.
pub fn client_config(settings: &ClientSettings) -> ClientConfig {
    let mut config = ClientConfig::new();
    for (key, value) in settings.iter() {
        config.set(key, value);
    }
    config
}

// ═══════════════════════════════════════════════════════════════
//  KafkaConnector
// ═══════════════════════════════════════════════════════════════

/// Connector поверх librdkafka.
#[derive(Debug, Clone, Copy, Default)]
pub struct KafkaConnector;

impl Connector for KafkaConnector {
    type Source = KafkaSource;
    type Sink = KafkaSink;

    fn connect_sink(
        &self,
        settings: &ClientSettings,
    ) -> Result<(KafkaSink, DeliveryReports), BrokerError> {
        let (tx, rx) = mpsc::unbounded_channel();
        let producer: ThreadedProducer<ReportingContext> = client_config(settings)
            .create_with_context(ReportingContext { reports: tx })
            .map_err(|e| BrokerError::Connect(e.to_string()))?;
        tracing::debug!(bootstrap = settings.bootstrap(), "kafka producer created");
        Ok((KafkaSink { producer }, rx))
    }

    fn connect_source(
        &self,
        settings: &ClientSettings,
        topic: &str,
    ) -> Result<KafkaSource, BrokerError> {
        let consumer: StreamConsumer = client_config(settings)
            .create()
            .map_err(|e| BrokerError::Connect(e.to_string()))?;
        consumer
            .subscribe(&[topic])
            .map_err(|e| BrokerError::Connect(format!("cannot subscribe to '{topic}': {e}")))?;
        tracing::debug!(bootstrap = settings.bootstrap(), %topic, "kafka consumer subscribed");
        Ok(KafkaSource { consumer })
    }
}

// ═══════════════════════════════════════════════════════════════
//  Producer
// ═══════════════════════════════════════════════════════════════

/// Context producer'а: переправляет delivery report'ы librdkafka в канал.
///
/// Вызывается из polling-потока `ThreadedProducer`. Канал закрывается,
/// когда producer (и вместе с ним context) уничтожен.
pub struct ReportingContext {
    reports: mpsc::UnboundedSender<DeliveryReport>,
}

impl ClientContext for ReportingContext {
    fn log(&self, level: RDKafkaLogLevel, fac: &str, log_message: &str) {
        match level {
            RDKafkaLogLevel::Emerg
            | RDKafkaLogLevel::Alert
            | RDKafkaLogLevel::Critical
            | RDKafkaLogLevel::Error => tracing::error!(fac, "{log_message}"),
            RDKafkaLogLevel::Warning => tracing::warn!(fac, "{log_message}"),
            RDKafkaLogLevel::Notice | RDKafkaLogLevel::Info => tracing::info!(fac, "{log_message}"),
            RDKafkaLogLevel::Debug => tracing::debug!(fac, "{log_message}"),
        }
    }

    fn error(&self, error: KafkaError, reason: &str) {
        tracing::error!(%error, reason, "kafka client error");
    }
}

impl ProducerContext for ReportingContext {
    type DeliveryOpaque = ();

    fn delivery(&self, result: &DeliveryResult<'_>, _: Self::DeliveryOpaque) {
        let report = match result {
            Ok(msg) => DeliveryReport::Delivered {
                topic: msg.topic().to_string(),
                partition: msg.partition(),
                offset: msg.offset(),
            },
            Err((e, msg)) => DeliveryReport::Failed {
                topic: msg.topic().to_string(),
                error: BrokerError::Delivery(e.to_string()),
            },
        };
        // Receiver gone means the relay is already shutting down.
        let _ = self.reports.send(report);
    }
}

pub struct KafkaSink {
    producer: ThreadedProducer<ReportingContext>,
}

impl RecordSink for KafkaSink {
    fn produce(&mut self, record: OutboundRecord) -> Result<(), BrokerError> {
        let mut base: BaseRecord<'_, [u8], [u8]> =
            BaseRecord::to(&record.topic).payload(record.value.as_slice());
        if let Some(key) = record.key.as_deref() {
            base = base.key(key);
        }
        self.producer
            .send(base)
            .map_err(|(e, _)| BrokerError::Produce(e.to_string()))
    }

    fn close(self, grace: Duration) -> Result<(), BrokerError> {
        let flushed = self.producer.flush(Timeout::After(grace));
        let in_flight = self.producer.in_flight_count();
        drop(self.producer);
        flushed.map_err(|e| {
            BrokerError::Close(format!("flush failed with {in_flight} record(s) in flight: {e}"))
        })
    }
}

// ═══════════════════════════════════════════════════════════════
//  Consumer
// ═══════════════════════════════════════════════════════════════

pub struct KafkaSource {
    consumer: StreamConsumer,
}

impl RecordSource for KafkaSource {
    fn recv(&mut self) -> BoxFuture<'_, Result<RawRecord, BrokerError>> {
        Box::pin(async move {
            let msg = self
                .consumer
                .recv()
                .await
                .map_err(|e| BrokerError::Read(e.to_string()))?;
            Ok(RawRecord {
                topic: msg.topic().to_string(),
                partition: msg.partition(),
                offset: msg.offset(),
                key: msg.key().map(<[u8]>::to_vec),
                value: msg.payload().map(<[u8]>::to_vec).unwrap_or_default(),
            })
        })
    }

    fn close(self) {
        self.consumer.unsubscribe();
        drop(self.consumer);
    }
}

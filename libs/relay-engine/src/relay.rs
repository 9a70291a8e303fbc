use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use relay_api::{Connector, DeliveryReport, DeliveryReports, RecordSink, RecordSource};

use crate::config::RelayConfig;
use crate::error::{RecordError, RelayError};
use crate::pipeline::Pipeline;
use crate::stats::{ConsumeStats, DeliveryStats, RelayStats};

// ═══════════════════════════════════════════════════════════════
//  Relay
// ═══════════════════════════════════════════════════════════════

/// Запущенный relay: consume-задача (source → pipeline → producer) и
/// report-задача (delivery report'ы producer'а).
///
/// Consume-задача единолично владеет consumer'ом и producer'ом,
/// report-задача владеет потоком отчётов. Общего изменяемого состояния нет.
pub struct Relay<K: RecordSink> {
    cancel: CancellationToken,
    consume: JoinHandle<(K, ConsumeStats)>,
    reports: JoinHandle<DeliveryStats>,
    grace: Duration,
}

impl<K: RecordSink> Relay<K> {
    /// Проверить конфиг, создать producer и consumer, запустить задачи.
    ///
    /// Возвращается сразу после запуска. Должен вызываться внутри tokio
    /// runtime. При ошибке конфигурации connector не вызывается вообще.
    pub fn start<C>(config: &RelayConfig, connector: &C) -> Result<Self, RelayError>
    where
        C: Connector<Sink = K>,
    {
        let kind = config.validate()?;
        let pipeline = Pipeline::new(kind, config.json_topic(), config.flat_topic(), config.debug);

        let (sink, reports) = connector
            .connect_sink(&config.producer_settings())
            .map_err(|source| RelayError::Connection {
                handle: "producer",
                source,
            })?;
        let source = connector
            .connect_source(&config.consumer_settings(), config.source())
            .map_err(|source| RelayError::Connection {
                handle: "consumer",
                source,
            })?;

        let cancel = CancellationToken::new();
        let reports = tokio::spawn(report_loop(reports));
        let consume = tokio::spawn(consume_loop(source, sink, pipeline, cancel.clone()));

        tracing::info!(
            bootstrap = %config.bootstrap,
            source = config.source(),
            dest = config.json_topic(),
            dest_flat = config.flat_topic().unwrap_or("-"),
            kind = %kind,
            group = %config.group_id,
            "kafka consumer/producer started"
        );

        Ok(Self {
            cancel,
            consume,
            reports,
            grace: config.shutdown_grace,
        })
    }

    /// Остановить relay: сначала consumer, затем producer (после flush не
    /// дольше grace), затем дождаться конца потока delivery report'ов.
    pub async fn stop(self) -> Result<RelayStats, RelayError> {
        tracing::info!("stopping relay");
        self.cancel.cancel();

        let (sink, consume) = self
            .consume
            .await
            .map_err(|source| RelayError::Task { task: "consume", source })?;

        let grace = self.grace;
        match tokio::task::spawn_blocking(move || sink.close(grace)).await {
            Ok(Ok(())) => tracing::info!("producer closed"),
            Ok(Err(e)) => tracing::warn!(error = %e, "producer closed with undelivered records"),
            Err(source) => return Err(RelayError::Task { task: "producer close", source }),
        }

        let delivery = self
            .reports
            .await
            .map_err(|source| RelayError::Task { task: "report", source })?;

        let stats = RelayStats { consume, delivery };
        tracing::info!(
            consumed = stats.consume.consumed,
            delivered = stats.delivery.delivered,
            failed = stats.delivery.failed,
            unconfirmed = stats.unconfirmed(),
            "good bye!"
        );
        Ok(stats)
    }
}

// ═══════════════════════════════════════════════════════════════
//  Consume loop
// ═══════════════════════════════════════════════════════════════

async fn consume_loop<S, K>(
    mut source: S,
    mut sink: K,
    pipeline: Pipeline,
    cancel: CancellationToken,
) -> (K, ConsumeStats)
where
    S: RecordSource,
    K: RecordSink,
{
    let mut stats = ConsumeStats::default();
    tracing::debug!(kind = %pipeline.kind(), "consume loop started");

    loop {
        let received = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            received = source.recv() => received,
        };
        match received {
            Ok(raw) => pipeline.process(&raw, &mut sink, &mut stats),
            Err(e) => {
                stats.read_errors += 1;
                tracing::warn!(error = %RecordError::Read(e), "read failed");
            }
        }
    }

    match tokio::task::spawn_blocking(move || source.close()).await {
        Ok(()) => tracing::info!("consumer closed"),
        Err(e) => tracing::error!(error = %e, "consumer close failed"),
    }
    (sink, stats)
}

// ═══════════════════════════════════════════════════════════════
//  Delivery report loop
// ═══════════════════════════════════════════════════════════════

/// Вычитывать delivery report'ы, пока producer не закрыт. Повторных
/// отправок нет: неуспешная запись считается потерянной.
async fn report_loop(mut reports: DeliveryReports) -> DeliveryStats {
    let mut stats = DeliveryStats::default();
    while let Some(report) = reports.recv().await {
        match report {
            DeliveryReport::Delivered {
                topic,
                partition,
                offset,
            } => {
                stats.delivered += 1;
                tracing::debug!(%topic, partition, offset, "message delivered");
            }
            DeliveryReport::Failed { topic, error } => {
                stats.failed += 1;
                tracing::warn!(%topic, %error, "message delivery failed");
            }
        }
    }
    tracing::debug!("delivery report stream closed");
    stats
}

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::{mpsc, watch};

use relay_api::{
    BoxFuture, BrokerError, ClientSettings, Connector, DeliveryReport, DeliveryReports,
    OutboundRecord, RawRecord, RecordSink, RecordSource,
};

type Delivery = Result<RawRecord, BrokerError>;

// ═══════════════════════════════════════════════════════════════
//  MemoryBroker
// ═══════════════════════════════════════════════════════════════

/// In-process broker для тестов relay'я.
///
/// Каждый topic: unbounded очередь с одним consumer'ом. Всё, что
/// отправлено через `MemorySink`, сохраняется в порядке отправки и
/// доступно через `produced()`. Клоны разделяют одно состояние.
#[derive(Clone, Default)]
pub struct MemoryBroker {
    inner: Arc<Inner>,
}

struct Inner {
    topics: Mutex<HashMap<String, Topic>>,
    produced: Mutex<Vec<OutboundRecord>>,
    produced_count: watch::Sender<usize>,
    failing: Mutex<HashSet<String>>,
    reject: AtomicBool,
    connections: AtomicUsize,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            topics: Mutex::default(),
            produced: Mutex::default(),
            produced_count: watch::Sender::new(0),
            failing: Mutex::default(),
            reject: AtomicBool::new(false),
            connections: AtomicUsize::new(0),
        }
    }
}

struct Topic {
    // Sender stays here so an idle consumer waits instead of seeing EOF.
    tx: mpsc::UnboundedSender<Delivery>,
    rx: Option<mpsc::UnboundedReceiver<Delivery>>,
    next_offset: i64,
}

impl Topic {
    fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx: Some(rx),
            next_offset: 0,
        }
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MemoryBroker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Записать сообщение в topic. Offset растёт внутри topic'а с нуля.
    pub fn publish(&self, topic: &str, key: Option<&[u8]>, value: Vec<u8>) -> i64 {
        let mut topics = lock(&self.inner.topics);
        let t = topics.entry(topic.to_string()).or_insert_with(Topic::new);
        let offset = t.next_offset;
        t.next_offset += 1;
        let _ = t.tx.send(Ok(RawRecord {
            topic: topic.to_string(),
            partition: 0,
            offset,
            key: key.map(<[u8]>::to_vec),
            value,
        }));
        offset
    }

    /// Следующий `recv()` consumer'а этого topic'а вернёт ошибку чтения.
    pub fn inject_read_error(&self, topic: &str, message: &str) {
        let mut topics = lock(&self.inner.topics);
        let t = topics.entry(topic.to_string()).or_insert_with(Topic::new);
        let _ = t.tx.send(Err(BrokerError::Read(message.to_string())));
    }

    /// Все записи, принятые producer'ами, в порядке отправки.
    pub fn produced(&self) -> Vec<OutboundRecord> {
        lock(&self.inner.produced).clone()
    }

    pub fn produced_to(&self, topic: &str) -> Vec<OutboundRecord> {
        lock(&self.inner.produced)
            .iter()
            .filter(|r| r.topic == topic)
            .cloned()
            .collect()
    }

    /// Ждать, пока producer'ы примут хотя бы `n` записей.
    /// Возвращает `false`, если не дождались за `timeout`.
    pub async fn wait_for_produced(&self, n: usize, timeout: Duration) -> bool {
        let mut rx = self.inner.produced_count.subscribe();
        matches!(
            tokio::time::timeout(timeout, rx.wait_for(|count| *count >= n)).await,
            Ok(Ok(_))
        )
    }

    /// Доставка в `topic` будет завершаться failed report'ом.
    pub fn fail_deliveries_to(&self, topic: &str) {
        lock(&self.inner.failing).insert(topic.to_string());
    }

    /// Включить/выключить отказ в создании handle'ов.
    pub fn reject_connections(&self, reject: bool) {
        self.inner.reject.store(reject, Ordering::SeqCst);
    }

    /// Сколько handle'ов (producer + consumer) успешно создано.
    pub fn connections(&self) -> usize {
        self.inner.connections.load(Ordering::SeqCst)
    }

    fn check_connect(&self, settings: &ClientSettings) -> Result<(), BrokerError> {
        if self.inner.reject.load(Ordering::SeqCst) {
            return Err(BrokerError::Connect(format!(
                "{}: connection refused",
                settings.bootstrap()
            )));
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════
//  Connector
// ═══════════════════════════════════════════════════════════════

impl Connector for MemoryBroker {
    type Source = MemorySource;
    type Sink = MemorySink;

    fn connect_sink(
        &self,
        settings: &ClientSettings,
    ) -> Result<(MemorySink, DeliveryReports), BrokerError> {
        self.check_connect(settings)?;
        self.inner.connections.fetch_add(1, Ordering::SeqCst);
        let (reports, rx) = mpsc::unbounded_channel();
        tracing::debug!(bootstrap = settings.bootstrap(), "memory producer created");
        Ok((
            MemorySink {
                broker: self.clone(),
                reports,
                offsets: HashMap::new(),
            },
            rx,
        ))
    }

    fn connect_source(
        &self,
        settings: &ClientSettings,
        topic: &str,
    ) -> Result<MemorySource, BrokerError> {
        self.check_connect(settings)?;
        let rx = {
            let mut topics = lock(&self.inner.topics);
            let t = topics.entry(topic.to_string()).or_insert_with(Topic::new);
            t.rx.take()
                .ok_or_else(|| BrokerError::Connect(format!("topic '{topic}' already has a consumer")))?
        };
        self.inner.connections.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(%topic, "memory consumer subscribed");
        Ok(MemorySource { rx })
    }
}

// ═══════════════════════════════════════════════════════════════
//  MemorySource / MemorySink
// ═══════════════════════════════════════════════════════════════

pub struct MemorySource {
    rx: mpsc::UnboundedReceiver<Delivery>,
}

impl RecordSource for MemorySource {
    fn recv(&mut self) -> BoxFuture<'_, Result<RawRecord, BrokerError>> {
        Box::pin(async move {
            match self.rx.recv().await {
                Some(delivery) => delivery,
                None => std::future::pending().await,
            }
        })
    }

    fn close(self) {}
}

pub struct MemorySink {
    broker: MemoryBroker,
    reports: mpsc::UnboundedSender<DeliveryReport>,
    offsets: HashMap<String, i64>,
}

impl RecordSink for MemorySink {
    fn produce(&mut self, record: OutboundRecord) -> Result<(), BrokerError> {
        let topic = record.topic.clone();
        let failing = lock(&self.broker.inner.failing).contains(&topic);
        lock(&self.broker.inner.produced).push(record);
        self.broker.inner.produced_count.send_modify(|count| *count += 1);

        let report = if failing {
            DeliveryReport::Failed {
                topic,
                error: BrokerError::Delivery("Broker: Message timed out".into()),
            }
        } else {
            let offset = self.offsets.entry(topic.clone()).or_default();
            let report = DeliveryReport::Delivered {
                topic,
                partition: 0,
                offset: *offset,
            };
            *offset += 1;
            report
        };
        let _ = self.reports.send(report);
        Ok(())
    }

    fn close(self, _grace: Duration) -> Result<(), BrokerError> {
        Ok(())
    }
}

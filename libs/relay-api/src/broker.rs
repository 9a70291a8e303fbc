use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::{BrokerError, ClientSettings, DeliveryReport, OutboundRecord, RawRecord};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Поток delivery report'ов producer'а. Закрывается, когда producer
/// закрыт и все его отчёты вычитаны.
pub type DeliveryReports = mpsc::UnboundedReceiver<DeliveryReport>;

// ════════════════════════════════════════════════════════════════
//  Consumer side
// ════════════════════════════════════════════════════════════════

/// Consumer handle, подписанный на один source topic.
pub trait RecordSource: Send + 'static {
    /// Ждать следующую запись без таймаута.
    ///
    /// Ошибка чтения считается временной: вызывающий просто вызывает
    /// `recv()` снова.
    fn recv(&mut self) -> BoxFuture<'_, Result<RawRecord, BrokerError>>;

    /// Отписаться и освободить handle. Может блокировать.
    fn close(self)
    where
        Self: Sized;
}

// ════════════════════════════════════════════════════════════════
//  Producer side
// ════════════════════════════════════════════════════════════════

/// Producer handle. Отправка неблокирующая; результат доставки приходит
/// асинхронно через `DeliveryReports`, выданный вместе с handle'ом.
pub trait RecordSink: Send + 'static {
    /// Поставить запись в очередь на отправку.
    fn produce(&mut self, record: OutboundRecord) -> Result<(), BrokerError>;

    /// Дождаться in-flight доставок (не дольше `grace`) и освободить handle.
    ///
    /// После возврата поток `DeliveryReports` завершается. Может блокировать.
    fn close(self, grace: Duration) -> Result<(), BrokerError>
    where
        Self: Sized;
}

// ════════════════════════════════════════════════════════════════
//  Connector
// ════════════════════════════════════════════════════════════════

/// Factory for broker handles. A relay calls it once per handle at start.
pub trait Connector {
    type Source: RecordSource;
    type Sink: RecordSink;

    fn connect_sink(
        &self,
        settings: &ClientSettings,
    ) -> Result<(Self::Sink, DeliveryReports), BrokerError>;

    fn connect_source(
        &self,
        settings: &ClientSettings,
        topic: &str,
    ) -> Result<Self::Source, BrokerError>;
}

use crate::BrokerError;

/// Запись, прочитанная из source topic'а.
///
/// `value` всегда присутствует: запись без payload читается как пустой буфер.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub topic: String,
    pub partition: i32,
    pub offset: i64,
    pub key: Option<Vec<u8>>,
    pub value: Vec<u8>,
}

/// Запись для отправки в destination topic. Ключ копируется из исходной
/// записи без изменений.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRecord {
    pub topic: String,
    pub key: Option<Vec<u8>>,
    pub value: Vec<u8>,
}

impl OutboundRecord {
    pub fn new(topic: impl Into<String>, key: Option<Vec<u8>>, value: Vec<u8>) -> Self {
        Self {
            topic: topic.into(),
            key,
            value,
        }
    }
}

/// Asynchronous acknowledgement for a previously submitted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryReport {
    Delivered {
        topic: String,
        partition: i32,
        offset: i64,
    },
    Failed {
        topic: String,
        error: BrokerError,
    },
}

impl DeliveryReport {
    pub fn topic(&self) -> &str {
        match self {
            DeliveryReport::Delivered { topic, .. } | DeliveryReport::Failed { topic, .. } => topic,
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryReport::Delivered { .. })
    }
}

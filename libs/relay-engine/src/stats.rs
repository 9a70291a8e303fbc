use serde::Serialize;

/// Счётчики consume-задачи.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConsumeStats {
    pub consumed: u64,
    pub read_errors: u64,
    pub decode_errors: u64,
    pub serialize_errors: u64,
    pub flatten_errors: u64,
    pub produce_errors: u64,
    pub json_submitted: u64,
    pub flat_submitted: u64,
}

/// Счётчики report-задачи.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeliveryStats {
    pub delivered: u64,
    pub failed: u64,
}

/// Итог работы relay, возвращается из `Relay::stop`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RelayStats {
    #[serde(flatten)]
    pub consume: ConsumeStats,
    #[serde(flatten)]
    pub delivery: DeliveryStats,
}

impl RelayStats {
    /// Записи, отправленные в producer, но не подтверждённые ни успехом,
    /// ни ошибкой (потеряны при закрытии).
    pub fn unconfirmed(&self) -> u64 {
        let submitted = self.consume.json_submitted + self.consume.flat_submitted;
        submitted.saturating_sub(self.delivery.delivered + self.delivery.failed)
    }
}

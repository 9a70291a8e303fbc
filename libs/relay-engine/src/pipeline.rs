use onms_model::{MessageKind, Schema, schema_for};
use relay_api::{OutboundRecord, RawRecord, RecordSink};

use crate::error::RecordError;
use crate::flatten::flatten;
use crate::stats::ConsumeStats;

// ═══════════════════════════════════════════════════════════════
//  Pipeline: decode → JSON → (flatten) → produce
// ═══════════════════════════════════════════════════════════════

/// Обработка одной записи. Состояния между записями нет.
#[derive(Debug, Clone)]
pub struct Pipeline {
    schema: &'static Schema,
    json_topic: String,
    flat_topic: Option<String>,
    debug: bool,
}

impl Pipeline {
    pub fn new(kind: MessageKind, json_topic: &str, flat_topic: Option<&str>, debug: bool) -> Self {
        Self {
            schema: schema_for(kind),
            json_topic: json_topic.to_string(),
            flat_topic: flat_topic.map(str::to_string),
            debug,
        }
    }

    pub fn kind(&self) -> MessageKind {
        self.schema.kind()
    }

    /// Декодировать запись, отправить JSON и (если настроен flat topic)
    /// плоский JSON. Ошибки логируются и учитываются в `stats`.
    pub fn process<K: RecordSink>(&self, raw: &RawRecord, sink: &mut K, stats: &mut ConsumeStats) {
        stats.consumed += 1;

        // Битый payload не теряется: уходит дальше то, что успели
        // декодировать (для мусора это пустой объект `{}`).
        let object = match self.schema.decode(&raw.value) {
            Ok(object) => object,
            Err(e) => {
                stats.decode_errors += 1;
                let partial = e.partial.as_ref().clone();
                let e = RecordError::from(e);
                tracing::warn!(
                    partition = raw.partition,
                    offset = raw.offset,
                    error = %e,
                    "forwarding partially decoded message"
                );
                partial
            }
        };

        let json = match object.to_json() {
            Ok(json) => json,
            Err(e) => {
                stats.serialize_errors += 1;
                tracing::error!(
                    partition = raw.partition,
                    offset = raw.offset,
                    error = %RecordError::Serialize(e),
                    "record dropped"
                );
                return;
            }
        };

        if self.debug {
            tracing::info!(topic = %self.json_topic, payload = %String::from_utf8_lossy(&json), "sending JSON");
        }

        let flat = self.flat_topic.as_deref().map(|topic| (topic, flatten(&json)));

        if self.submit(sink, &self.json_topic, raw, json) {
            stats.json_submitted += 1;
        } else {
            stats.produce_errors += 1;
        }

        let Some((topic, flat)) = flat else { return };
        match flat {
            Ok(flat) => {
                if self.debug {
                    tracing::info!(topic = %topic, payload = %String::from_utf8_lossy(&flat), "sending flat JSON");
                }
                if self.submit(sink, topic, raw, flat) {
                    stats.flat_submitted += 1;
                } else {
                    stats.produce_errors += 1;
                }
            }
            Err(e) => {
                stats.flatten_errors += 1;
                tracing::warn!(
                    partition = raw.partition,
                    offset = raw.offset,
                    error = %RecordError::from(e),
                    "flat record skipped"
                );
            }
        }
    }

    fn submit<K: RecordSink>(&self, sink: &mut K, topic: &str, raw: &RawRecord, value: Vec<u8>) -> bool {
        match sink.produce(OutboundRecord::new(topic, raw.key.clone(), value)) {
            Ok(()) => true,
            Err(source) => {
                let e = RecordError::Produce {
                    topic: topic.to_string(),
                    source,
                };
                tracing::warn!(offset = raw.offset, error = %e, "record not sent");
                false
            }
        }
    }
}

use std::time::Duration;

use serde::Serialize;

use onms_model::MessageKind;
use relay_api::ClientSettings;
use relay_api::settings::GROUP_ID;

use crate::RelayError;

pub const DEFAULT_BOOTSTRAP: &str = "localhost:9092";
pub const DEFAULT_GROUP_ID: &str = "opennms";
pub const DEFAULT_MESSAGE_KIND: &str = "alarm";
pub const DEFAULT_SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

// ═══════════════════════════════════════════════════════════════
//  RelayConfig
// ═══════════════════════════════════════════════════════════════

/// Конфигурация одного relay. Не меняется после `Relay::start`.
#[derive(Debug, Clone, Serialize)]
pub struct RelayConfig {
    /// Список broker'ов (`host:port[,host:port]`).
    pub bootstrap: String,
    /// Topic с бинарными (GPB) сообщениями.
    pub source_topic: String,
    /// Topic для JSON.
    pub dest_topic: String,
    /// Topic для плоского JSON. Пустая строка = flatten выключен.
    pub dest_topic_flat: String,
    /// Имя kind'а; проверяется в `validate`.
    pub message_kind: String,
    pub group_id: String,
    /// CSV `key=value` поверх bootstrap для producer'а.
    pub producer_params: String,
    /// CSV `key=value` поверх bootstrap для consumer'а.
    pub consumer_params: String,
    /// Логировать исходящие payload'ы.
    pub debug: bool,
    /// Сколько ждать in-flight доставки при остановке.
    #[serde(with = "millis")]
    pub shutdown_grace: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bootstrap: DEFAULT_BOOTSTRAP.to_string(),
            source_topic: String::new(),
            dest_topic: String::new(),
            dest_topic_flat: String::new(),
            message_kind: DEFAULT_MESSAGE_KIND.to_string(),
            group_id: DEFAULT_GROUP_ID.to_string(),
            producer_params: String::new(),
            consumer_params: String::new(),
            debug: false,
            shutdown_grace: DEFAULT_SHUTDOWN_GRACE,
        }
    }
}

impl RelayConfig {
    /// Проверить обязательные поля и вернуть выбранный kind.
    pub fn validate(&self) -> Result<MessageKind, RelayError> {
        if self.source().is_empty() {
            return Err(RelayError::Config("source topic cannot be empty".into()));
        }
        if self.json_topic().is_empty() {
            return Err(RelayError::Config("destination topic cannot be empty".into()));
        }
        if self.message_kind.is_empty() {
            return Err(RelayError::Config("message kind cannot be empty".into()));
        }
        self.message_kind
            .parse::<MessageKind>()
            .map_err(|e| RelayError::Config(e.to_string()))
    }

    /// Имена topic'ов всегда берутся через accessor'ы, без пробелов по краям.
    pub fn source(&self) -> &str {
        self.source_topic.trim()
    }

    pub fn json_topic(&self) -> &str {
        self.dest_topic.trim()
    }

    pub fn flat_topic(&self) -> Option<&str> {
        let topic = self.dest_topic_flat.trim();
        (!topic.is_empty()).then_some(topic)
    }

    pub fn producer_settings(&self) -> ClientSettings {
        ClientSettings::new(&self.bootstrap).with_overrides(&self.producer_params)
    }

    /// Consumer settings; `group.id` always wins over `consumer_params`.
    pub fn consumer_settings(&self) -> ClientSettings {
        let mut settings = ClientSettings::new(&self.bootstrap).with_overrides(&self.consumer_params);
        settings.set(GROUP_ID, &self.group_id);
        settings
    }
}

mod millis {
    use std::time::Duration;

    use serde::Serializer;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> RelayConfig {
        RelayConfig {
            source_topic: "OpenNMS-alarms".into(),
            dest_topic: "alarms-json".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let cfg = RelayConfig::default();
        assert_eq!(cfg.bootstrap, "localhost:9092");
        assert_eq!(cfg.group_id, "opennms");
        assert_eq!(cfg.message_kind, "alarm");
        assert!(!cfg.debug);
        assert_eq!(cfg.flat_topic(), None);
    }

    #[test]
    fn test_validate_ok() {
        assert_eq!(valid().validate().unwrap(), MessageKind::Alarm);
        let cfg = RelayConfig {
            message_kind: "metric".into(),
            ..valid()
        };
        assert_eq!(cfg.validate().unwrap(), MessageKind::Metric);
    }

    #[test]
    fn test_validate_missing_topics() {
        let cfg = RelayConfig {
            source_topic: String::new(),
            ..valid()
        };
        assert_eq!(cfg.validate().unwrap_err().to_string(), "source topic cannot be empty");

        let cfg = RelayConfig {
            dest_topic: "  ".into(),
            ..valid()
        };
        assert_eq!(
            cfg.validate().unwrap_err().to_string(),
            "destination topic cannot be empty"
        );
    }

    #[test]
    fn test_validate_kind() {
        let cfg = RelayConfig {
            message_kind: String::new(),
            ..valid()
        };
        assert_eq!(cfg.validate().unwrap_err().to_string(), "message kind cannot be empty");

        let cfg = RelayConfig {
            message_kind: "bogus".into(),
            ..valid()
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, RelayError::Config(_)));
        assert!(err.to_string().contains("invalid message kind 'bogus'"));
    }

    #[test]
    fn test_flat_topic() {
        let cfg = RelayConfig {
            dest_topic_flat: "alarms-flat".into(),
            ..valid()
        };
        assert_eq!(cfg.flat_topic(), Some("alarms-flat"));
    }

    #[test]
    fn test_topics_trimmed() {
        let cfg = RelayConfig {
            source_topic: " OpenNMS-alarms\t".into(),
            dest_topic: "  alarms-json ".into(),
            dest_topic_flat: " alarms-flat ".into(),
            ..valid()
        };
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.source(), "OpenNMS-alarms");
        assert_eq!(cfg.json_topic(), "alarms-json");
        assert_eq!(cfg.flat_topic(), Some("alarms-flat"));
    }

    #[test]
    fn test_client_settings() {
        let cfg = RelayConfig {
            bootstrap: "kafka:9092".into(),
            producer_params: "acks=all".into(),
            consumer_params: "auto.offset.reset=earliest, group.id=other".into(),
            group_id: "converter".into(),
            ..valid()
        };
        let producer = cfg.producer_settings();
        assert_eq!(producer.bootstrap(), "kafka:9092");
        assert_eq!(producer.get("acks"), Some("all"));
        assert_eq!(producer.get("group.id"), None);

        let consumer = cfg.consumer_settings();
        assert_eq!(consumer.get("auto.offset.reset"), Some("earliest"));
        assert_eq!(consumer.get("group.id"), Some("converter"));
    }
}

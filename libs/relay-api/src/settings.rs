use std::collections::BTreeMap;

use serde::Serialize;

pub const BOOTSTRAP_SERVERS: &str = "bootstrap.servers";
pub const GROUP_ID: &str = "group.id";

/// Broker client properties: `bootstrap.servers` plus free-form overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientSettings {
    properties: BTreeMap<String, String>,
}

impl ClientSettings {
    pub fn new(bootstrap: &str) -> Self {
        let mut properties = BTreeMap::new();
        properties.insert(BOOTSTRAP_SERVERS.to_string(), bootstrap.to_string());
        Self { properties }
    }

    /// Наложить CSV `key=value` пар поверх текущих значений.
    ///
    /// Пробелы вокруг пар и вокруг ключа/значения отбрасываются.
    /// Некорректные пары логируются и пропускаются.
    pub fn with_overrides(mut self, params: &str) -> Self {
        for pair in params.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match pair.split_once('=') {
                Some((key, value)) if !key.trim().is_empty() && !value.contains('=') => {
                    self.set(key.trim(), value.trim());
                }
                _ => tracing::warn!(pair = %pair, "invalid key-value pair, skipping"),
            }
        }
        self
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.properties.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn bootstrap(&self) -> &str {
        self.get(BOOTSTRAP_SERVERS).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_only() {
        let s = ClientSettings::new("localhost:9092");
        assert_eq!(s.bootstrap(), "localhost:9092");
        assert_eq!(s.iter().count(), 1);
    }

    #[test]
    fn test_overrides_merged_over_bootstrap() {
        let s = ClientSettings::new("localhost:9092")
            .with_overrides("acks=all, linger.ms=5,bootstrap.servers=kafka:9092");
        assert_eq!(s.get("acks"), Some("all"));
        assert_eq!(s.get("linger.ms"), Some("5"));
        assert_eq!(s.bootstrap(), "kafka:9092");
    }

    #[test]
    fn test_invalid_pairs_are_skipped() {
        let s = ClientSettings::new("b:1").with_overrides("novalue, =x, a=b=c, ok=1,,");
        assert_eq!(s.get("ok"), Some("1"));
        assert_eq!(s.get("novalue"), None);
        assert_eq!(s.get("a"), None);
        assert_eq!(s.iter().count(), 2);
    }

    #[test]
    fn test_empty_params() {
        let s = ClientSettings::new("b:1").with_overrides("");
        assert_eq!(s, ClientSettings::new("b:1"));
    }
}

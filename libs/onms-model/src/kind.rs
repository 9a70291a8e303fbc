use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Message kind carried by a source topic. Selects exactly one schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Event,
    Alarm,
    Node,
    Edge,
    Metric,
}

impl MessageKind {
    pub const ALL: [MessageKind; 5] = [
        MessageKind::Event,
        MessageKind::Alarm,
        MessageKind::Node,
        MessageKind::Edge,
        MessageKind::Metric,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            MessageKind::Event => "event",
            MessageKind::Alarm => "alarm",
            MessageKind::Node => "node",
            MessageKind::Edge => "edge",
            MessageKind::Metric => "metric",
        }
    }

    /// Position in [`MessageKind::ALL`] and in the schema table.
    pub(crate) const fn index(self) -> usize {
        match self {
            MessageKind::Event => 0,
            MessageKind::Alarm => 1,
            MessageKind::Node => 2,
            MessageKind::Edge => 3,
            MessageKind::Metric => 4,
        }
    }

    /// Valid names joined for diagnostics: `event, alarm, node, edge, metric`.
    pub fn valid_options() -> String {
        Self::ALL.map(MessageKind::as_str).join(", ")
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid message kind '{name}'. Valid options: {}", MessageKind::valid_options())]
pub struct UnknownKind {
    pub name: String,
}

impl FromStr for MessageKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownKind { name: s.to_string() })
    }
}

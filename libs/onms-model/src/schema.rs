use prost::Message;
use serde::Serialize;

use crate::MessageKind;
use crate::collection::CollectionSet;
use crate::producer::{Alarm, Event, Node, TopologyEdge};

/// The binary value could not be parsed with the selected schema.
///
/// `partial` holds whatever fields were decoded before the failure,
/// on top of the kind's default instance.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid {kind} message: {source}")]
pub struct DecodeError {
    pub kind: MessageKind,
    #[source]
    pub source: prost::DecodeError,
    pub partial: Box<DomainObject>,
}

impl DecodeError {
    pub fn into_partial(self) -> DomainObject {
        *self.partial
    }
}

/// Decoded value of one of the supported kinds.
///
/// Serializes as the inner message, without any wrapper.
#[derive(Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DomainObject {
    Event(Event),
    Alarm(Alarm),
    Node(Node),
    Edge(TopologyEdge),
    Metric(CollectionSet),
}

impl DomainObject {
    pub fn kind(&self) -> MessageKind {
        match self {
            DomainObject::Event(_) => MessageKind::Event,
            DomainObject::Alarm(_) => MessageKind::Alarm,
            DomainObject::Node(_) => MessageKind::Node,
            DomainObject::Edge(_) => MessageKind::Edge,
            DomainObject::Metric(_) => MessageKind::Metric,
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Protobuf encoding of the inner message.
    pub fn encode_to_vec(&self) -> Vec<u8> {
        match self {
            DomainObject::Event(m) => m.encode_to_vec(),
            DomainObject::Alarm(m) => m.encode_to_vec(),
            DomainObject::Node(m) => m.encode_to_vec(),
            DomainObject::Edge(m) => m.encode_to_vec(),
            DomainObject::Metric(m) => m.encode_to_vec(),
        }
    }
}

impl std::fmt::Debug for DomainObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainObject::Event(m) => std::fmt::Debug::fmt(m, f),
            DomainObject::Alarm(m) => std::fmt::Debug::fmt(m, f),
            DomainObject::Node(m) => std::fmt::Debug::fmt(m, f),
            DomainObject::Edge(m) => std::fmt::Debug::fmt(m, f),
            DomainObject::Metric(m) => std::fmt::Debug::fmt(m, f),
        }
    }
}

macro_rules! domain_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for DomainObject {
                fn from(m: $ty) -> Self {
                    DomainObject::$variant(m)
                }
            }
        )*
    };
}

domain_from!(
    Event(Event),
    Alarm(Alarm),
    Node(Node),
    Edge(TopologyEdge),
    Metric(CollectionSet),
);

// ---- Registry ----

/// Schema of one message kind: a zero-value constructor and a decoder.
pub struct Schema {
    kind: MessageKind,
    type_name: &'static str,
    empty: fn() -> DomainObject,
    decode: fn(&[u8]) -> Result<DomainObject, (DomainObject, prost::DecodeError)>,
}

impl Schema {
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Fully-qualified protobuf message name, e.g. `OpenNMS.Alarm`.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Fresh default instance of the decode target.
    pub fn empty(&self) -> DomainObject {
        (self.empty)()
    }

    /// Merge `buf` into a fresh default instance. On failure the error
    /// carries the partially filled instance.
    pub fn decode(&self, buf: &[u8]) -> Result<DomainObject, DecodeError> {
        (self.decode)(buf).map_err(|(partial, source)| DecodeError {
            kind: self.kind,
            source,
            partial: Box::new(partial),
        })
    }
}

impl std::fmt::Debug for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("kind", &self.kind)
            .field("type_name", &self.type_name)
            .finish()
    }
}

fn empty_of<T: Message + Default + Into<DomainObject>>() -> DomainObject {
    T::default().into()
}

fn decode_as<T: Message + Default + Into<DomainObject>>(
    buf: &[u8],
) -> Result<DomainObject, (DomainObject, prost::DecodeError)> {
    let mut msg = T::default();
    match msg.merge(buf) {
        Ok(()) => Ok(msg.into()),
        Err(e) => Err((msg.into(), e)),
    }
}

const fn entry<T: Message + Default + Into<DomainObject>>(
    kind: MessageKind,
    type_name: &'static str,
) -> Schema {
    Schema {
        kind,
        type_name,
        empty: empty_of::<T>,
        decode: decode_as::<T>,
    }
}

/// Indexed by [`MessageKind::index`].
static SCHEMAS: [Schema; 5] = [
    entry::<Event>(MessageKind::Event, "OpenNMS.Event"),
    entry::<Alarm>(MessageKind::Alarm, "OpenNMS.Alarm"),
    entry::<Node>(MessageKind::Node, "OpenNMS.Node"),
    entry::<TopologyEdge>(MessageKind::Edge, "OpenNMS.TopologyEdge"),
    entry::<CollectionSet>(MessageKind::Metric, "CollectionSet"),
];

pub fn schema_for(kind: MessageKind) -> &'static Schema {
    &SCHEMAS[kind.index()]
}

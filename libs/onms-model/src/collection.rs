//! Collection sets (performance metrics) as exported by OpenNMS.

use serde::Serialize;

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct StringAttribute {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub name: String,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub value: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct NumericAttribute {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub group: String,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub name: String,
    #[prost(double, tag = "3")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub value: f64,
    #[prost(enumeration = "numeric_attribute::Type", tag = "4")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub r#type: i32,
}

pub mod numeric_attribute {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum Type {
        Gauge = 0,
        Counter = 1,
    }
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct NodeLevelResource {
    #[prost(int64, tag = "1")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub node_id: i64,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub foreign_source: String,
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub foreign_id: String,
    #[prost(string, tag = "4")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub node_label: String,
    #[prost(string, tag = "5")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub location: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct InterfaceLevelResource {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub node: Option<NodeLevelResource>,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub instance: String,
    #[prost(int32, tag = "3")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub if_index: i32,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct GenericTypeResource {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub node: Option<NodeLevelResource>,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub r#type: String,
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub instance: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct ResponseTimeResource {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub instance: String,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub location: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct CollectionSetResource {
    #[prost(oneof = "collection_set_resource::Resource", tags = "1, 2, 3, 4")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub resource: Option<collection_set_resource::Resource>,
    #[prost(message, repeated, tag = "10")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub string: Vec<StringAttribute>,
    #[prost(message, repeated, tag = "11")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub numeric: Vec<NumericAttribute>,
}

pub mod collection_set_resource {
    use serde::Serialize;

    #[derive(Clone, PartialEq, prost::Oneof, Serialize)]
    #[serde(rename_all = "snake_case")]
    pub enum Resource {
        #[prost(message, tag = "1")]
        Node(super::NodeLevelResource),
        #[prost(message, tag = "2")]
        Interface(super::InterfaceLevelResource),
        #[prost(message, tag = "3")]
        Generic(super::GenericTypeResource),
        #[prost(message, tag = "4")]
        Response(super::ResponseTimeResource),
    }
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct CollectionSet {
    #[prost(int64, tag = "1")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub timestamp: i64,
    #[prost(message, repeated, tag = "2")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub resource: Vec<CollectionSetResource>,
}

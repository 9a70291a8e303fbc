//! Message types published by the OpenNMS Kafka producer
//! (protobuf package `OpenNMS`): events, alarms, nodes and topology edges.
//!
//! JSON form: protobuf field names, enums as numbers; fields holding their
//! default value are omitted, so an empty message serializes as `{}`.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum Severity {
    Indeterminate = 0,
    Cleared = 1,
    Normal = 2,
    Warning = 3,
    Minor = 4,
    Major = 5,
    Critical = 6,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct NodeCriteria {
    #[prost(uint64, tag = "1")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub id: u64,
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
pub struct EventParameter {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub name: String,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub value: String,
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub r#type: String,
}

// ---- Event ----

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct Event {
    #[prost(uint64, tag = "1")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub id: u64,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub uei: String,
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub label: String,
    #[prost(uint64, tag = "4")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub time: u64,
    #[prost(string, tag = "5")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub source: String,
    #[prost(message, repeated, tag = "6")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub parameter: Vec<EventParameter>,
    #[prost(uint64, tag = "7")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub create_time: u64,
    #[prost(string, tag = "8")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub description: String,
    #[prost(string, tag = "9")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub log_message: String,
    #[prost(enumeration = "Severity", tag = "10")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub severity: i32,
    #[prost(bool, tag = "11")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub log: bool,
    #[prost(bool, tag = "12")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub display: bool,
    #[prost(message, optional, tag = "13")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub node_criteria: Option<NodeCriteria>,
    #[prost(string, tag = "14")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub ip_address: String,
    #[prost(string, tag = "15")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub dist_poller: String,
}

// ---- Alarm ----

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct Alarm {
    #[prost(uint64, tag = "1")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub id: u64,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub uei: String,
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub node_criteria: Option<NodeCriteria>,
    #[prost(string, tag = "4")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub ip_address: String,
    #[prost(string, tag = "5")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub service_name: String,
    #[prost(string, tag = "6")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub reduction_key: String,
    #[prost(enumeration = "alarm::Type", tag = "7")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub r#type: i32,
    #[prost(uint64, tag = "8")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub count: u64,
    #[prost(enumeration = "Severity", tag = "9")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub severity: i32,
    #[prost(uint64, tag = "10")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub first_event_time: u64,
    #[prost(string, tag = "11")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub description: String,
    #[prost(string, tag = "12")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub log_message: String,
    #[prost(string, tag = "13")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub ack_user: String,
    #[prost(uint64, tag = "14")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub ack_time: u64,
    #[prost(message, optional, tag = "15")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub last_event: Option<Event>,
    #[prost(uint64, tag = "16")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub last_event_time: u64,
    #[prost(uint32, tag = "17")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub if_index: u32,
    #[prost(string, tag = "18")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub operator_instructions: String,
    #[prost(string, tag = "19")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub clear_key: String,
    #[prost(string, tag = "20")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub managed_object_instance: String,
    #[prost(string, tag = "21")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub managed_object_type: String,
    #[prost(message, repeated, tag = "22")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub related_alarm: Vec<Alarm>,
    #[prost(string, tag = "23")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub trouble_ticket_id: String,
    #[prost(enumeration = "alarm::TroubleTicketState", tag = "24")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub trouble_ticket_state: i32,
    #[prost(uint64, tag = "25")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub last_update_time: u64,
}

pub mod alarm {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum Type {
        ProblemWithoutClear = 0,
        ProblemWithClear = 1,
        Clear = 2,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum TroubleTicketState {
        Open = 0,
        CreatePending = 1,
        CreateFailed = 2,
        UpdatePending = 3,
        UpdateFailed = 4,
        Closed = 5,
        ClosePending = 6,
        CloseFailed = 7,
        Resolved = 8,
        ResolvePending = 9,
        ResolveFailed = 10,
        Cancelled = 11,
        CancelPending = 12,
        CancelFailed = 13,
    }
}

// ---- Node ----

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct IpInterface {
    #[prost(uint64, tag = "1")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub id: u64,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub ip_address: String,
    #[prost(uint32, tag = "3")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub if_index: u32,
    #[prost(enumeration = "ip_interface::PrimaryType", tag = "4")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub primary_type: i32,
    #[prost(string, repeated, tag = "5")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub service: Vec<String>,
}

pub mod ip_interface {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum PrimaryType {
        Primary = 0,
        Secondary = 1,
        NotEligible = 2,
    }
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct SnmpInterface {
    #[prost(uint64, tag = "1")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub id: u64,
    #[prost(uint32, tag = "2")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub if_index: u32,
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub if_descr: String,
    #[prost(uint32, tag = "4")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub if_type: u32,
    #[prost(string, tag = "5")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub if_name: String,
    #[prost(uint64, tag = "6")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub if_speed: u64,
    #[prost(string, tag = "7")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub if_phys_address: String,
    #[prost(uint32, tag = "8")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub if_admin_status: u32,
    #[prost(uint32, tag = "9")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub if_oper_status: u32,
    #[prost(string, tag = "10")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub if_alias: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct HwAlias {
    #[prost(uint32, tag = "1")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub index: u32,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub oid: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct HwEntity {
    #[prost(uint32, tag = "1")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub ent_physical_index: u32,
    #[prost(uint32, tag = "2")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub entity_id: u32,
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub ent_physical_class: String,
    #[prost(string, tag = "4")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub ent_physical_descr: String,
    #[prost(bool, tag = "5")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub ent_physical_is_fru: bool,
    #[prost(string, tag = "6")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub ent_physical_name: String,
    #[prost(string, tag = "7")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub ent_physical_vendor_type: String,
    #[prost(message, repeated, tag = "8")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub ent_hw_alias: Vec<HwAlias>,
    #[prost(message, repeated, tag = "9")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub children: Vec<HwEntity>,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct Node {
    #[prost(uint64, tag = "1")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub id: u64,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub foreign_source: String,
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub foreign_id: String,
    #[prost(string, tag = "4")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub location: String,
    #[prost(string, repeated, tag = "5")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub category: Vec<String>,
    #[prost(string, tag = "6")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub label: String,
    #[prost(uint64, tag = "7")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub create_time: u64,
    #[prost(string, tag = "8")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub sys_contact: String,
    #[prost(string, tag = "9")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub sys_description: String,
    #[prost(string, tag = "10")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub sys_object_id: String,
    #[prost(message, repeated, tag = "11")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub ip_interface: Vec<IpInterface>,
    #[prost(message, repeated, tag = "12")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub snmp_interface: Vec<SnmpInterface>,
    #[prost(message, optional, tag = "13")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub hw_inventory: Option<HwEntity>,
    /// Free-form node metadata (e.g. `hostIP`).
    #[prost(btree_map = "string, string", tag = "14")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub metadata: BTreeMap<String, String>,
}

// ---- Topology ----

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct TopologyRef {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub id: String,
    #[prost(enumeration = "topology_ref::Protocol", tag = "2")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub protocol: i32,
}

pub mod topology_ref {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum Protocol {
        Lldp = 0,
        Ospf = 1,
        Isis = 2,
        Bridge = 3,
        Cdp = 4,
        Userdefined = 5,
    }
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct TopologySegment {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub r#ref: Option<TopologyRef>,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct TopologyPort {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub vertex_id: String,
    #[prost(uint64, tag = "2")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub if_index: u64,
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub if_name: String,
    #[prost(string, tag = "4")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub address: String,
    #[prost(message, optional, tag = "5")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub node_criteria: Option<NodeCriteria>,
}

#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct TopologyEdge {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub r#ref: Option<TopologyRef>,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub source: Option<TopologyPort>,
    #[prost(oneof = "topology_edge::Target", tags = "3, 4")]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub target: Option<topology_edge::Target>,
}

pub mod topology_edge {
    use serde::Serialize;

    #[derive(Clone, PartialEq, prost::Oneof, Serialize)]
    #[serde(rename_all = "snake_case")]
    pub enum Target {
        #[prost(message, tag = "3")]
        TargetPort(super::TopologyPort),
        #[prost(message, tag = "4")]
        TargetSegment(super::TopologySegment),
    }
}

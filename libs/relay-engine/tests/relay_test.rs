use std::time::Duration;

use prost::Message;
use serde_json::{Value, json};

use broker_memory::MemoryBroker;
use onms_model::producer::{Alarm, Event, Node};
use relay_engine::{Relay, RelayConfig, RelayError};

const WAIT: Duration = Duration::from_secs(2);

fn config(kind: &str, flat: &str) -> RelayConfig {
    RelayConfig {
        source_topic: "src".into(),
        dest_topic: "json".into(),
        dest_topic_flat: flat.into(),
        message_kind: kind.into(),
        shutdown_grace: Duration::from_millis(100),
        ..Default::default()
    }
}

fn alarm(id: u64) -> Vec<u8> {
    Alarm {
        id,
        uei: "uei.opennms.org/test".into(),
        ..Default::default()
    }
    .encode_to_vec()
}

fn value(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn test_keys_preserved_on_both_branches() {
    let broker = MemoryBroker::new();
    let relay = Relay::start(&config("alarm", "flat"), &broker).unwrap();

    broker.publish("src", Some(&b"a-1"[..]), alarm(1));
    broker.publish("src", None, alarm(2));
    assert!(broker.wait_for_produced(4, WAIT).await);
    let stats = relay.stop().await.unwrap();

    let json = broker.produced_to("json");
    let flat = broker.produced_to("flat");
    assert_eq!(json.len(), 2);
    assert_eq!(flat.len(), 2);
    assert_eq!(json[0].key.as_deref(), Some(&b"a-1"[..]));
    assert_eq!(flat[0].key.as_deref(), Some(&b"a-1"[..]));
    assert_eq!(json[1].key, None);
    assert_eq!(flat[1].key, None);
    assert_eq!(value(&json[0].value)["id"], 1);
    assert_eq!(value(&flat[1].value)["id"], 2);

    assert_eq!(stats.consume.consumed, 2);
    assert_eq!(stats.consume.json_submitted, 2);
    assert_eq!(stats.consume.flat_submitted, 2);
    assert_eq!(stats.delivery.delivered, 4);
    assert_eq!(stats.unconfirmed(), 0);
}

// Undecodable payloads are still forwarded; nothing decoded means `{}`.
#[tokio::test]
async fn test_corrupt_alarm_forwards_empty_object() {
    let broker = MemoryBroker::new();
    let relay = Relay::start(&config("alarm", ""), &broker).unwrap();

    broker.publish("src", Some(&b"bad"[..]), vec![0xff, 0xff, 0xff, 0xff]);
    assert!(broker.wait_for_produced(1, WAIT).await);
    let stats = relay.stop().await.unwrap();

    let produced = broker.produced();
    assert_eq!(produced.len(), 1);
    assert_eq!(value(&produced[0].value), json!({}));
    assert_eq!(stats.consume.decode_errors, 1);
}

#[tokio::test]
async fn test_truncated_alarm_forwards_decoded_fields() {
    let broker = MemoryBroker::new();
    let relay = Relay::start(&config("alarm", ""), &broker).unwrap();

    let bytes = Alarm {
        id: 42,
        uei: "uei.opennms.org/truncated".into(),
        ..Default::default()
    }
    .encode_to_vec();
    broker.publish("src", None, bytes[..bytes.len() - 3].to_vec());
    assert!(broker.wait_for_produced(1, WAIT).await);
    let stats = relay.stop().await.unwrap();

    let produced = broker.produced();
    assert_eq!(produced.len(), 1);
    assert_eq!(value(&produced[0].value)["id"], 42);
    assert_eq!(stats.consume.decode_errors, 1);
}

#[tokio::test]
async fn test_no_flat_topic_one_record_per_input() {
    let broker = MemoryBroker::new();
    let relay = Relay::start(&config("event", ""), &broker).unwrap();

    for id in 1..=5 {
        let event = Event {
            id,
            ..Default::default()
        };
        broker.publish("src", None, event.encode_to_vec());
    }
    assert!(broker.wait_for_produced(5, WAIT).await);
    relay.stop().await.unwrap();

    let produced = broker.produced();
    assert_eq!(produced.len(), 5);
    assert!(produced.iter().all(|r| r.topic == "json"));
}

#[tokio::test]
async fn test_node_metadata_flattened() {
    let broker = MemoryBroker::new();
    let relay = Relay::start(&config("node", "nodes-flat"), &broker).unwrap();

    let node = Node {
        id: 3,
        label: "router".into(),
        metadata: [("hostIP".to_string(), "10.0.0.1".to_string())].into(),
        ..Default::default()
    };
    broker.publish("src", Some(&b"3"[..]), node.encode_to_vec());
    assert!(broker.wait_for_produced(2, WAIT).await);
    relay.stop().await.unwrap();

    let flat = broker.produced_to("nodes-flat");
    assert_eq!(flat.len(), 1);
    let doc = value(&flat[0].value);
    assert_eq!(doc["metadata_hostIP"], "10.0.0.1");
    assert_eq!(doc["label"], "router");
    assert!(doc.as_object().unwrap().values().all(|v| !v.is_object() && !v.is_array()));
}

#[tokio::test]
async fn test_invalid_config_never_connects() {
    let broker = MemoryBroker::new();

    let cfg = RelayConfig {
        source_topic: String::new(),
        ..config("alarm", "")
    };
    let err = Relay::start(&cfg, &broker).err().unwrap();
    assert!(matches!(err, RelayError::Config(_)));

    let err = Relay::start(&config("bogus", ""), &broker).err().unwrap();
    assert!(err.to_string().contains("invalid message kind 'bogus'"));

    assert_eq!(broker.connections(), 0);
}

#[tokio::test]
async fn test_connection_failure() {
    let broker = MemoryBroker::new();
    broker.reject_connections(true);
    let err = Relay::start(&config("alarm", ""), &broker).err().unwrap();
    assert!(matches!(err, RelayError::Connection { handle: "producer", .. }));
}

#[tokio::test]
async fn test_nothing_produced_after_stop() {
    let broker = MemoryBroker::new();
    let relay = Relay::start(&config("alarm", ""), &broker).unwrap();

    // Backlog still pending when stop begins.
    for id in 1..=1000 {
        broker.publish("src", None, alarm(id));
    }
    assert!(broker.wait_for_produced(1, WAIT).await);
    let stats = relay.stop().await.unwrap();

    let produced = broker.produced().len();
    assert!(produced >= 1);
    assert_eq!(produced as u64, stats.consume.json_submitted);
    assert_eq!(stats.unconfirmed(), 0);

    broker.publish("src", None, alarm(1001));
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(broker.produced().len(), produced);
}

#[tokio::test]
async fn test_padded_topic_names_are_trimmed() {
    let broker = MemoryBroker::new();
    let cfg = RelayConfig {
        source_topic: " src ".into(),
        dest_topic: "\tjson ".into(),
        ..config("alarm", " flat ")
    };
    let relay = Relay::start(&cfg, &broker).unwrap();

    broker.publish("src", None, alarm(1));
    assert!(broker.wait_for_produced(2, WAIT).await);
    relay.stop().await.unwrap();

    assert_eq!(broker.produced_to("json").len(), 1);
    assert_eq!(broker.produced_to("flat").len(), 1);
    assert_eq!(broker.produced().len(), 2);
}

#[tokio::test]
async fn test_read_errors_and_failed_deliveries_do_not_stop_relay() {
    let broker = MemoryBroker::new();
    broker.fail_deliveries_to("json");
    let relay = Relay::start(&config("alarm", "flat"), &broker).unwrap();

    broker.inject_read_error("src", "Broker: transport failure");
    broker.publish("src", None, alarm(1));
    broker.inject_read_error("src", "Broker: transport failure");
    broker.publish("src", None, alarm(2));
    assert!(broker.wait_for_produced(4, WAIT).await);
    let stats = relay.stop().await.unwrap();

    assert_eq!(stats.consume.read_errors, 2);
    assert_eq!(stats.consume.consumed, 2);
    assert_eq!(stats.delivery.failed, 2);
    assert_eq!(stats.delivery.delivered, 2);
}

#[tokio::test]
async fn test_same_key_order_preserved() {
    let broker = MemoryBroker::new();
    let relay = Relay::start(&config("alarm", ""), &broker).unwrap();

    for id in 1..=20 {
        broker.publish("src", Some(&b"same"[..]), alarm(id));
    }
    assert!(broker.wait_for_produced(20, WAIT).await);
    relay.stop().await.unwrap();

    let ids: Vec<u64> = broker
        .produced_to("json")
        .iter()
        .map(|r| value(&r.value)["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, (1..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_two_relays_in_one_process() {
    let broker = MemoryBroker::new();
    let alarms = Relay::start(&config("alarm", ""), &broker).unwrap();
    let nodes = Relay::start(
        &RelayConfig {
            source_topic: "nodes".into(),
            dest_topic: "nodes-json".into(),
            ..config("node", "")
        },
        &broker,
    )
    .unwrap();

    broker.publish("src", None, alarm(1));
    broker.publish("nodes", None, Node::default().encode_to_vec());
    assert!(broker.wait_for_produced(2, WAIT).await);
    alarms.stop().await.unwrap();
    nodes.stop().await.unwrap();

    assert_eq!(broker.produced_to("json").len(), 1);
    assert_eq!(broker.produced_to("nodes-json").len(), 1);
    assert_eq!(broker.connections(), 4);
}

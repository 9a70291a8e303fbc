use std::time::Duration;

use clap::Args;
use prost::Message;

use onms_model::producer::{Alarm, NodeCriteria, Severity};
use relay_api::{ClientSettings, Connector, DeliveryReport, OutboundRecord, RecordSink};

use crate::error::MockError;

const FLUSH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Args, Clone, Debug)]
pub struct MockArgs {
    /// Kafka bootstrap server
    #[arg(long, default_value = "127.0.0.1:9092")]
    pub bootstrap: String,

    /// Topic для alarm'ов
    #[arg(long, default_value = "OpenNMS-alarms")]
    pub topic: String,

    /// Сколько alarm'ов отправить (id = 1..=count)
    #[arg(long, default_value_t = 1)]
    pub count: u64,

    /// UEI alarm'а
    #[arg(long, default_value = "uei.opennms.org/test")]
    pub uei: String,

    /// Node id в node criteria
    #[arg(long, default_value_t = 1)]
    pub node_id: u64,
}

pub fn sample_alarm(id: u64, uei: &str, node_id: u64) -> Alarm {
    Alarm {
        id,
        uei: uei.to_string(),
        node_criteria: Some(NodeCriteria {
            id: node_id,
            ..Default::default()
        }),
        severity: Severity::Warning as i32,
        count: 1,
        ..Default::default()
    }
}

/// Отправить `count` alarm'ов и дождаться их delivery report'ов.
pub async fn run<C: Connector>(connector: &C, args: &MockArgs) -> Result<(), MockError> {
    let (mut sink, mut reports) = connector.connect_sink(&ClientSettings::new(&args.bootstrap))?;

    for id in 1..=args.count {
        let alarm = sample_alarm(id, &args.uei, args.node_id);
        sink.produce(OutboundRecord::new(
            &args.topic,
            Some(id.to_string().into_bytes()),
            alarm.encode_to_vec(),
        ))?;
    }
    tracing::info!(topic = %args.topic, count = args.count, "alarms submitted");

    if let Err(e) = tokio::task::spawn_blocking(move || sink.close(FLUSH_TIMEOUT)).await? {
        tracing::warn!(error = %e, "producer closed with undelivered alarms");
    }

    let (mut delivered, mut failed) = (0u64, 0u64);
    while let Some(report) = reports.recv().await {
        match report {
            DeliveryReport::Delivered { partition, offset, .. } => {
                delivered += 1;
                tracing::info!(partition, offset, "alarm delivered");
            }
            DeliveryReport::Failed { error, .. } => {
                failed += 1;
                tracing::error!(%error, "alarm delivery failed");
            }
        }
    }

    if delivered != args.count {
        return Err(MockError::Undelivered {
            delivered,
            failed,
            total: args.count,
        });
    }
    tracing::info!(delivered, "done");
    Ok(())
}

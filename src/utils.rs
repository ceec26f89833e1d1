use tracing::{debug, info};

use crate::{
    clients::slack::SlackClient,
    error::Result,
    models::{event::DecodedBody, notification::NotificationEnvelope, slack::SlackPayload},
    payload::build_payload,
    routing::attributes_for,
};

/// Runs one SNS envelope through the relay and returns the webhook status.
pub async fn process_notification(payload: &str, slack_client: &SlackClient) -> Result<u16> {
    let message = build_slack_message(payload)?;
    slack_client.post_message(&message).await
}

/// Everything up to, but not including, the webhook POST.
pub fn build_slack_message(payload: &str) -> Result<SlackPayload> {
    let envelope = NotificationEnvelope::from_json(payload)?;
    if envelope.records.len() > 1 {
        debug!(records = envelope.records.len(), "Only the first record is relayed");
    }

    let (record, body) = envelope.unwrap_record()?;
    debug!(message = %record.message, "Decoded notification message");

    let route = record.topic_route()?;
    let decoded = DecodedBody::classify(body);
    let source = decoded.source();

    info!(
        message_id = record.message_id.as_deref().unwrap_or("-"),
        source = %source,
        region = %route.region,
        environment = %route.environment,
        event_type = %route.event_type,
        "Classified notification"
    );

    let message = build_payload(&decoded, &record, attributes_for(&route, source));
    debug!(payload = ?message, "Built Slack payload");

    Ok(message)
}

/// Installs the JSON log formatter, honouring `RUST_LOG` first.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter)
        .init();
}

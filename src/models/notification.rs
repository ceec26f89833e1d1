use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::error::{RelayError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationEnvelope {
    #[serde(rename = "Records", default)]
    pub records: Vec<EnvelopeRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvelopeRecord {
    #[serde(rename = "EventSource", default, skip_serializing_if = "Option::is_none")]
    pub event_source: Option<String>,

    #[serde(rename = "Sns")]
    pub sns: NotificationRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NotificationRecord {
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
    pub topic_arn: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub notification_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Routing components encoded in a topic ARN such as
/// `arn:aws:sns:us-east-1:123456789012:staging-notices`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRoute {
    pub region: String,
    pub environment: String,
    pub event_type: String,
}

impl NotificationEnvelope {
    pub fn from_json(payload: &str) -> Result<Self> {
        serde_json::from_str::<Self>(payload).map_err(|e| {
            RelayError::MalformedEnvelope(format!("envelope is not decodable: {}", e))
        })
    }

    /// Takes the first record and decodes its message body.
    ///
    /// Any further records are ignored.
    pub fn unwrap_record(self) -> Result<(NotificationRecord, Map<String, JsonValue>)> {
        let record = self
            .records
            .into_iter()
            .next()
            .ok_or_else(|| RelayError::MalformedEnvelope("envelope has no records".to_string()))?
            .sns;

        let body = match serde_json::from_str::<JsonValue>(&record.message) {
            Ok(JsonValue::Object(body)) => body,
            Ok(other) => {
                return Err(RelayError::MalformedEnvelope(format!(
                    "message is not a JSON object: {}",
                    other
                )));
            }
            Err(e) => {
                return Err(RelayError::MalformedEnvelope(format!(
                    "message is not valid JSON: {}",
                    e
                )));
            }
        };

        Ok((record, body))
    }
}

impl NotificationRecord {
    /// Subject when present and non-empty, otherwise the raw message.
    pub fn display_text(&self) -> &str {
        match self.subject.as_deref() {
            Some(subject) if !subject.is_empty() => subject,
            _ => &self.message,
        }
    }

    pub fn topic_route(&self) -> Result<TopicRoute> {
        TopicRoute::parse(&self.topic_arn)
    }
}

impl TopicRoute {
    pub fn parse(topic_arn: &str) -> Result<Self> {
        let segments: Vec<&str> = topic_arn.split(':').collect();

        let region = segments
            .get(3)
            .filter(|region| !region.is_empty())
            .ok_or_else(|| {
                RelayError::MalformedEnvelope(format!("topic ARN has no region: {}", topic_arn))
            })?;

        // split() always yields at least one item
        let topic_name = segments.last().copied().unwrap_or_default();
        let environment = topic_name.split('-').next().unwrap_or_default();
        let event_type = topic_name.rsplit('-').next().unwrap_or_default();

        Ok(Self {
            region: region.to_string(),
            environment: environment.to_string(),
            event_type: event_type.to_string(),
        })
    }
}

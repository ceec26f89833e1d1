use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use tracing::debug;

pub const ALARM_NAME_KEY: &str = "AlarmName";
pub const AUTOSCALING_CAUSE_KEY: &str = "Cause";
pub const SNAPSHOT_COMPLETE_KEY: &str = "ElastiCache:SnapshotComplete";

/// Producer of a notification, derived from the shape of its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventSource {
    CloudWatch,
    AutoScaling,
    ElastiCache,
    Other,
}

impl EventSource {
    pub fn from_string(s: &str) -> Self {
        match s {
            "cloudwatch" => EventSource::CloudWatch,
            "autoscaling" => EventSource::AutoScaling,
            "elasticache" => EventSource::ElastiCache,
            _ => EventSource::Other,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventSource::CloudWatch => "cloudwatch",
            EventSource::AutoScaling => "autoscaling",
            EventSource::ElastiCache => "elasticache",
            EventSource::Other => "other",
        }
    }
}

impl Display for EventSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlarmState {
    Ok,
    InsufficientData,
    Alarm,
    Unknown(String),
}

impl AlarmState {
    pub fn from_string(s: &str) -> Self {
        match s {
            "OK" => AlarmState::Ok,
            "INSUFFICIENT_DATA" => AlarmState::InsufficientData,
            "ALARM" => AlarmState::Alarm,
            other => AlarmState::Unknown(other.to_string()),
        }
    }
}

impl Display for AlarmState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AlarmState::Ok => write!(f, "OK"),
            AlarmState::InsufficientData => write!(f, "INSUFFICIENT_DATA"),
            AlarmState::Alarm => write!(f, "ALARM"),
            AlarmState::Unknown(state) => write!(f, "{}", state),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct AlarmNotification {
    #[serde(deserialize_with = "string_or_empty")]
    pub alarm_name: String,

    #[serde(default, deserialize_with = "string_or_empty")]
    pub new_state_value: String,

    #[serde(default, deserialize_with = "string_or_empty")]
    pub new_state_reason: String,
}

impl AlarmNotification {
    pub fn state(&self) -> AlarmState {
        AlarmState::from_string(&self.new_state_value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct AutoScalingNotification {
    #[serde(deserialize_with = "string_or_empty")]
    pub cause: String,

    #[serde(default, deserialize_with = "string_or_empty")]
    pub event: String,
}

/// Notification body tagged with the producer that emitted it.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedBody {
    Alarm(AlarmNotification),
    AutoScaling(AutoScalingNotification),
    CacheSnapshot(Map<String, JsonValue>),
    Other(Map<String, JsonValue>),
}

impl DecodedBody {
    /// Classifies a decoded message body.
    ///
    /// Marker keys are checked in a fixed order (alarm name, lifecycle cause,
    /// snapshot completion) and the first one holding a non-empty value wins.
    /// Non-string marker values are kept as their JSON text.
    pub fn classify(body: Map<String, JsonValue>) -> Self {
        if has_marker(&body, ALARM_NAME_KEY) {
            match serde_json::from_value::<AlarmNotification>(JsonValue::Object(body.clone())) {
                Ok(alarm) => return DecodedBody::Alarm(alarm),
                Err(e) => debug!(error = %e, "Alarm marker present but body does not decode"),
            }
        }

        if has_marker(&body, AUTOSCALING_CAUSE_KEY) {
            match serde_json::from_value::<AutoScalingNotification>(JsonValue::Object(body.clone()))
            {
                Ok(scaling) => return DecodedBody::AutoScaling(scaling),
                Err(e) => debug!(error = %e, "Cause marker present but body does not decode"),
            }
        }

        if has_marker(&body, SNAPSHOT_COMPLETE_KEY) {
            return DecodedBody::CacheSnapshot(body);
        }

        DecodedBody::Other(body)
    }

    pub fn source(&self) -> EventSource {
        match self {
            DecodedBody::Alarm(_) => EventSource::CloudWatch,
            DecodedBody::AutoScaling(_) => EventSource::AutoScaling,
            DecodedBody::CacheSnapshot(_) => EventSource::ElastiCache,
            DecodedBody::Other(_) => EventSource::Other,
        }
    }
}

fn has_marker(body: &Map<String, JsonValue>, key: &str) -> bool {
    match body.get(key) {
        None | Some(JsonValue::Null) => false,
        Some(JsonValue::Bool(b)) => *b,
        Some(JsonValue::String(s)) => !s.is_empty(),
        Some(JsonValue::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(JsonValue::Array(items)) => !items.is_empty(),
        Some(JsonValue::Object(fields)) => !fields.is_empty(),
    }
}

fn string_or_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match JsonValue::deserialize(deserializer)? {
        JsonValue::Null => String::new(),
        JsonValue::String(s) => s,
        other => other.to_string(),
    })
}

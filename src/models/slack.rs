use serde::{Deserialize, Serialize};

/// Incoming-webhook message body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlackPayload {
    pub text: String,
    pub channel: String,
    pub username: String,
    pub icon_emoji: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<SlackAttachment>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlackAttachment {
    pub fallback: String,
    pub color: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<SlackField>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlackField {
    pub title: String,
    pub value: String,
    pub short: bool,
}

impl SlackField {
    pub fn short(title: &str, value: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            value: value.into(),
            short: true,
        }
    }

    pub fn long(title: &str, value: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            value: value.into(),
            short: false,
        }
    }
}

/// Formatting parameters looked up from the static routing tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageAttributes {
    pub channel: String,
    pub username: String,
    pub icon_emoji: String,
}

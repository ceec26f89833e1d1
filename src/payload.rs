use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::models::{
    event::{AlarmNotification, AlarmState, AutoScalingNotification, DecodedBody},
    notification::NotificationRecord,
    slack::{MessageAttributes, SlackAttachment, SlackField, SlackPayload},
};

pub const GOOD_COLOR: &str = "good";
pub const WARNING_COLOR: &str = "warning";
pub const DANGER_COLOR: &str = "danger";
pub const UNKNOWN_STATE_COLOR: &str = "#808080";

pub const NO_CAPACITY_CHANGE: &str = "--";
const DETAILS_TEXT: &str = "Details";

static CAPACITY_CHANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"capacity from (\w+ to \w+)").expect("valid regex"));

pub fn alarm_color(state: &AlarmState) -> &'static str {
    match state {
        AlarmState::Ok => GOOD_COLOR,
        AlarmState::InsufficientData => WARNING_COLOR,
        AlarmState::Alarm => DANGER_COLOR,
        AlarmState::Unknown(state) => {
            warn!(state = %state, "Unmapped alarm state, using default color");
            UNKNOWN_STATE_COLOR
        }
    }
}

/// Extracts e.g. `capacity from 2 to 4` from an autoscaling cause.
pub fn capacity_change(cause: &str) -> String {
    CAPACITY_CHANGE
        .find(cause)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NO_CAPACITY_CHANGE.to_string())
}

pub fn build_payload(
    body: &DecodedBody,
    record: &NotificationRecord,
    attributes: MessageAttributes,
) -> SlackPayload {
    let text = record.display_text();

    let attachment = match body {
        DecodedBody::Alarm(alarm) => Some(alarm_attachment(alarm, &record.message)),
        DecodedBody::AutoScaling(scaling) => Some(autoscaling_attachment(scaling, text)),
        DecodedBody::CacheSnapshot(_) => Some(SlackAttachment {
            fallback: text.to_string(),
            color: GOOD_COLOR.to_string(),
            text: Some(DETAILS_TEXT.to_string()),
            fields: None,
        }),
        DecodedBody::Other(_) => None,
    };

    SlackPayload {
        text: text.to_string(),
        channel: attributes.channel,
        username: attributes.username,
        icon_emoji: attributes.icon_emoji,
        attachments: attachment.map(|attachment| vec![attachment]),
    }
}

fn alarm_attachment(alarm: &AlarmNotification, raw_message: &str) -> SlackAttachment {
    let state = alarm.state();

    SlackAttachment {
        fallback: raw_message.to_string(),
        color: alarm_color(&state).to_string(),
        text: None,
        fields: Some(vec![
            SlackField::short("Alarm", alarm.alarm_name.as_str()),
            SlackField::short("Status", state.to_string()),
            SlackField::long("Reason", alarm.new_state_reason.as_str()),
        ]),
    }
}

fn autoscaling_attachment(scaling: &AutoScalingNotification, text: &str) -> SlackAttachment {
    SlackAttachment {
        fallback: text.to_string(),
        color: GOOD_COLOR.to_string(),
        text: Some(DETAILS_TEXT.to_string()),
        fields: Some(vec![
            SlackField::short("Capacity Change", capacity_change(&scaling.cause)),
            SlackField::long("Event", scaling.event.as_str()),
            SlackField::long("Cause", scaling.cause.as_str()),
        ]),
    }
}

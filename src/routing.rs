//! Static lookup tables mapping topic and event attributes onto Slack
//! message parameters. Every lookup has a default arm and never fails.

use crate::models::{event::EventSource, notification::TopicRoute, slack::MessageAttributes};

pub const FIRE_EMOJI: &str = ":fire:";
pub const DEFAULT_EMOJI: &str = ":mantelpiece_clock:";
pub const DEFAULT_USERNAME: &str = "AWS Lambda";

pub fn icon_for(event_type: &str) -> &'static str {
    match event_type {
        "alerts" => FIRE_EMOJI,
        _ => DEFAULT_EMOJI,
    }
}

pub fn username_for(source: EventSource) -> &'static str {
    match source {
        EventSource::CloudWatch => "AWS CloudWatch",
        EventSource::AutoScaling => "AWS AutoScaling",
        EventSource::ElastiCache => "AWS ElastiCache",
        EventSource::Other => DEFAULT_USERNAME,
    }
}

/// Maps topic names onto channels:
/// `<env>-alerts` goes to `#alerts-<region>`, `<env>-events` to
/// `#events-<region>`, with a `-staging` infix for staging topics.
pub fn channel_for(region: &str, environment: &str, event_type: &str) -> String {
    match (environment, event_type) {
        ("production", "alerts") => format!("#alerts-{}", region),
        ("production", "events") => format!("#events-{}", region),
        ("staging", "alerts") => format!("#alerts-staging-{}", region),
        ("staging", "events") => format!("#events-staging-{}", region),
        _ => format!("#events-{}", region),
    }
}

pub fn attributes_for(route: &TopicRoute, source: EventSource) -> MessageAttributes {
    MessageAttributes {
        channel: channel_for(&route.region, &route.environment, &route.event_type),
        username: username_for(source).to_string(),
        icon_emoji: icon_for(&route.event_type).to_string(),
    }
}

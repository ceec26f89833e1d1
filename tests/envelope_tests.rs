use anyhow::Result;
use serde_json::json;
use sns_slack_service::{
    error::RelayError,
    models::notification::NotificationEnvelope,
    sample::SAMPLE_ALARM_EVENT,
};

fn envelope_json(subject: JsonSubject, message: &str, topic_arn: &str) -> String {
    let mut sns = json!({
        "Message": message,
        "TopicArn": topic_arn,
    });

    match subject {
        JsonSubject::Value(subject) => sns["Subject"] = json!(subject),
        JsonSubject::Null => sns["Subject"] = serde_json::Value::Null,
        JsonSubject::Missing => {}
    }

    json!({ "Records": [{ "EventSource": "aws:sns", "Sns": sns }] }).to_string()
}

enum JsonSubject {
    Value(&'static str),
    Null,
    Missing,
}

/// Test: The embedded sample envelope unwraps to its single record
#[test]
fn test_sample_envelope_unwraps() -> Result<()> {
    let envelope = NotificationEnvelope::from_json(SAMPLE_ALARM_EVENT)?;
    let (record, body) = envelope.unwrap_record()?;

    assert_eq!(
        record.subject.as_deref(),
        Some("OK: sns-slack-test-from-cloudwatch-total-cpu")
    );
    assert_eq!(
        record.message_id.as_deref(),
        Some("95df01b4-ee98-5cb9-9903-4c221d41eb5e")
    );
    assert_eq!(record.notification_type.as_deref(), Some("Notification"));
    assert_eq!(
        body.get("AlarmName").and_then(|v| v.as_str()),
        Some("sns-slack-test-from-cloudwatch-total-cpu")
    );

    Ok(())
}

/// Test: Only the first record of a multi-record envelope is used
#[test]
fn test_only_first_record_is_used() -> Result<()> {
    let payload = json!({
        "Records": [
            { "Sns": { "Message": "{\"Cause\":\"first\"}", "TopicArn": "arn:aws:sns:us-east-1:1:staging-events" } },
            { "Sns": { "Message": "{\"Cause\":\"second\"}", "TopicArn": "arn:aws:sns:us-east-1:1:staging-events" } }
        ]
    })
    .to_string();

    let (_, body) = NotificationEnvelope::from_json(&payload)?.unwrap_record()?;
    assert_eq!(body.get("Cause").and_then(|v| v.as_str()), Some("first"));

    Ok(())
}

/// Test: Subject falls back to the raw message when missing, null or empty
#[test]
fn test_display_text_fallback() -> Result<()> {
    let message = r#"{"Detail":"x"}"#;
    let arn = "arn:aws:sns:us-east-1:1:staging-events";

    for subject in [JsonSubject::Missing, JsonSubject::Null, JsonSubject::Value("")] {
        let payload = envelope_json(subject, message, arn);
        let (record, _) = NotificationEnvelope::from_json(&payload)?.unwrap_record()?;
        assert_eq!(record.display_text(), message);
    }

    let payload = envelope_json(JsonSubject::Value("Heads up"), message, arn);
    let (record, _) = NotificationEnvelope::from_json(&payload)?.unwrap_record()?;
    assert_eq!(record.display_text(), "Heads up");

    Ok(())
}

/// Test: Envelopes without records are malformed
#[test]
fn test_empty_envelope_is_malformed() -> Result<()> {
    for payload in [r#"{"Records":[]}"#, r#"{}"#] {
        let result = NotificationEnvelope::from_json(payload)?.unwrap_record();
        assert!(
            matches!(result, Err(RelayError::MalformedEnvelope(_))),
            "'{}' should be malformed",
            payload
        );
    }

    Ok(())
}

/// Test: Invalid JSON at any level is malformed
#[test]
fn test_undecodable_input_is_malformed() -> Result<()> {
    let result = NotificationEnvelope::from_json("{ invalid json }");
    assert!(matches!(result, Err(RelayError::MalformedEnvelope(_))));

    let arn = "arn:aws:sns:us-east-1:1:staging-events";
    for message in ["not json at all", "[1, 2, 3]", "\"quoted\""] {
        let payload = envelope_json(JsonSubject::Missing, message, arn);
        let result = NotificationEnvelope::from_json(&payload)?.unwrap_record();
        assert!(
            matches!(result, Err(RelayError::MalformedEnvelope(_))),
            "message '{}' should be malformed",
            message
        );
    }

    Ok(())
}

/// Test: Records missing their notification fields are malformed
#[test]
fn test_incomplete_record_is_malformed() {
    let payloads = [
        r#"{"Records":[{}]}"#,
        r#"{"Records":[{"Sns":{"TopicArn":"arn:aws:sns:us-east-1:1:staging-events"}}]}"#,
        r#"{"Records":[{"Sns":{"Message":"{}"}}]}"#,
        r#"{"Records":"not a list"}"#,
    ];

    for payload in payloads {
        let result = NotificationEnvelope::from_json(payload);
        assert!(
            matches!(result, Err(RelayError::MalformedEnvelope(_))),
            "'{}' should be malformed",
            payload
        );
    }
}

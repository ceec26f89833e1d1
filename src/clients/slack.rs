use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::{config::Config, error::RelayError, models::slack::SlackPayload};

pub struct SlackClient {
    http_client: Client,
    webhook_url: String,
}

impl SlackClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        info!(
            timeout_seconds = config.request_timeout_seconds,
            "Slack webhook client initialized"
        );

        Ok(Self {
            http_client,
            webhook_url: config.slack_webhook_url.clone(),
        })
    }

    /// Posts the payload once and returns the webhook's status code.
    ///
    /// Non-success statuses are returned, not raised; only transport
    /// failures produce an error.
    pub async fn post_message(&self, payload: &SlackPayload) -> Result<u16, RelayError> {
        debug!(channel = %payload.channel, username = %payload.username, "Posting Slack message");

        let response = self
            .http_client
            .post(&self.webhook_url)
            .json(payload)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            info!(status = status.as_u16(), channel = %payload.channel, "Slack message delivered");
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!(
                status = status.as_u16(),
                channel = %payload.channel,
                body = %error_text,
                "Slack webhook rejected message"
            );
        }

        Ok(status.as_u16())
    }
}

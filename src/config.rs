use std::{env, fs, path::Path};

use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

// camelCase aliases only apply to the JSON file; envy lowercases variable names.
#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(alias = "slackWebhookUrl")]
    pub slack_webhook_url: String,

    #[serde(default = "default_request_timeout", alias = "requestTimeoutSeconds")]
    pub request_timeout_seconds: u64,

    #[serde(default = "default_log_level", alias = "logLevel")]
    pub log_level: String,
}

fn default_request_timeout() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Loads from the JSON file named by `CONFIG_FILE` when set, otherwise
    /// from environment variables.
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        match env::var("CONFIG_FILE") {
            Ok(path) => Self::from_json_file(path),
            Err(_) => Self::from_env(),
        }
    }

    pub fn from_env() -> Result<Self, Error> {
        let config = envy::from_env::<Self>()
            .map_err(|e| anyhow!("Invalid or missing environmental variable: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;

        let config = serde_json::from_str::<Self>(&contents)
            .map_err(|e| anyhow!("Invalid config file {}: {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.slack_webhook_url.trim().is_empty() {
            return Err(anyhow!("slack_webhook_url cannot be empty"));
        }

        Ok(())
    }
}

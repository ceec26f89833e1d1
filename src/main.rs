use anyhow::{Error, Result};
use sns_slack_service::{
    clients::slack::SlackClient,
    config::Config,
    sample::SAMPLE_ALARM_EVENT,
    utils::{init_tracing, process_notification},
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::load()?;
    init_tracing(&config.log_level);

    let slack_client = SlackClient::new(&config)?;

    info!("Running local self-test with embedded alarm event");
    let status = process_notification(SAMPLE_ALARM_EVENT, &slack_client).await?;

    println!("{}", status);

    Ok(())
}

use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rift_caster::client::{LcuClient, LiveClient};
use rift_caster::commentator::Commentator;
use rift_caster::config::{CasterConfig, LockfileCredentials};
use rift_caster::driver::CommentaryDriver;
use rift_caster::speech::Speaker;

#[tokio::main]
async fn main() -> rift_caster::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = CasterConfig::from_env()?;
    let credentials = LockfileCredentials::read(&config.lockfile_path)?;
    let lcu = LcuClient::new(&credentials);
    let live = LiveClient::new();

    match lcu.get_current_summoner().await {
        Ok(summoner) => info!(summoner = summoner.name(), "connected to the League client"),
        Err(e) => warn!(error = %e, "could not reach the League client yet"),
    }

    let commentator = Commentator::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
    );
    let speaker = Speaker::new(config.elevenlabs_api_key.clone(), config.voice_id.clone());

    info!("starting AI commentator");
    let driver = CommentaryDriver::new(
        lcu,
        live,
        commentator,
        speaker,
        Duration::from_secs(config.poll_interval_secs),
        config.ambient_comment_every,
    );
    driver.run().await;

    Ok(())
}

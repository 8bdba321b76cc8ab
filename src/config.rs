use std::env;
use std::time::Duration;

use log::{debug, error, info};

use crate::error::{BotError, Result};

/// Selection wait used when `SELECTION_TIMEOUT_SECS` is not set.
pub const DEFAULT_SELECTION_TIMEOUT: Duration = Duration::from_secs(300);

/// Discord stops accepting edits and follow-ups on an interaction after this long.
pub const INTERACTION_TOKEN_LIFETIME: Duration = Duration::from_secs(15 * 60);

/// Longest selection wait that still leaves the search and the closing
/// follow-up inside [`INTERACTION_TOKEN_LIFETIME`].
pub const MAX_SELECTION_TIMEOUT: Duration = Duration::from_secs(14 * 60);

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub genius_access_token: String,
    pub application_id: u64,
    pub selection_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment");
        dotenvy::dotenv().ok();

        let discord_token = env::var("DISCORD_BOT_TOKEN").map_err(|e| {
            error!("Failed to load DISCORD_BOT_TOKEN from environment: {e}");
            e
        })?;

        let genius_access_token = env::var("GENIUS_ACCESS_TOKEN").map_err(|e| {
            error!("Failed to load GENIUS_ACCESS_TOKEN from environment: {e}");
            e
        })?;

        let client_id = env::var("CLIENT_ID").map_err(|e| {
            error!("Failed to load CLIENT_ID from environment: {e}");
            e
        })?;
        let application_id = parse_application_id(&client_id)?;

        let selection_timeout = match env::var("SELECTION_TIMEOUT_SECS") {
            Ok(raw) => parse_selection_timeout(&raw)?,
            Err(_) => DEFAULT_SELECTION_TIMEOUT,
        };

        info!("Configuration loaded successfully");
        debug!("Discord token length: {} characters", discord_token.len());
        debug!(
            "Genius access token length: {} characters",
            genius_access_token.len()
        );
        debug!("Application id: {application_id}");
        debug!("Selection timeout: {}s", selection_timeout.as_secs());

        Ok(Self {
            discord_token,
            genius_access_token,
            application_id,
            selection_timeout,
        })
    }
}

fn parse_application_id(raw: &str) -> Result<u64> {
    match raw.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(BotError::Config(format!(
            "CLIENT_ID must be a non-zero numeric id, got {raw:?}"
        ))),
    }
}

fn parse_selection_timeout(raw: &str) -> Result<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 && secs <= MAX_SELECTION_TIMEOUT.as_secs() => {
            Ok(Duration::from_secs(secs))
        }
        _ => Err(BotError::Config(format!(
            "SELECTION_TIMEOUT_SECS must be between 1 and {} seconds, got {raw:?}",
            MAX_SELECTION_TIMEOUT.as_secs()
        ))),
    }
}

//! Discord bot setup, command registration and lifecycle events.

use std::time::Duration;

use log::{debug, error, info, warn};
use poise::{
    Framework, FrameworkError, FrameworkOptions, builtins,
    serenity_prelude::{ApplicationId, ClientBuilder, Context, FullEvent, GatewayIntents},
};

use crate::config::Config;
use crate::error::{BotError, Result};
use crate::fetchlyrics::lyrics_commands;
use crate::lyrics::GeniusClient;

/// Shared state handed to every command invocation.
pub struct Data {
    lyrics_provider: GeniusClient,
    selection_timeout: Duration,
}

impl Data {
    pub fn lyrics_provider(&self) -> &GeniusClient {
        &self.lyrics_provider
    }

    pub fn selection_timeout(&self) -> Duration {
        self.selection_timeout
    }
}

/// Run the Discord bot.
pub async fn run() -> Result<()> {
    info!("Initializing bot");
    let config = Config::from_env()?;

    debug!("Initializing Genius client");
    let lyrics_provider = GeniusClient::new(config.genius_access_token.clone());
    let selection_timeout = config.selection_timeout;

    let intents = GatewayIntents::non_privileged();

    debug!("Building framework");
    let framework = Framework::builder()
        .options(FrameworkOptions {
            commands: lyrics_commands(),
            event_handler: |ctx, event, _framework, _data| Box::pin(event_handler(ctx, event)),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                debug!("Registering commands globally");
                match builtins::register_globally(ctx, &framework.options().commands).await {
                    Ok(()) => info!("Successfully reloaded application (/) commands"),
                    Err(e) => error!("Failed to register application (/) commands: {e}"),
                }
                Ok(Data {
                    lyrics_provider,
                    selection_timeout,
                })
            })
        })
        .build();

    debug!("Creating Discord client");
    let mut client = ClientBuilder::new(&config.discord_token, intents)
        .application_id(ApplicationId::new(config.application_id))
        .framework(framework)
        .await?;

    info!("Starting Discord client");

    tokio::select! {
        result = client.start() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received, shutting down...");
        }
    }

    Ok(())
}

async fn event_handler(_ctx: &Context, event: &FullEvent) -> Result<()> {
    if let FullEvent::Ready { data_about_bot } = event {
        info!("Logged in as {}!", data_about_bot.user.tag());
    }
    Ok(())
}

async fn on_error(error: FrameworkError<'_, Data, BotError>) {
    match error {
        FrameworkError::Setup { error, .. } => {
            error!("Discord client encountered an error during setup: {error}");
        }
        FrameworkError::EventHandler { error, event, .. } => {
            error!(
                "Discord client encountered an error handling {}: {error}",
                event.snake_case_name()
            );
        }
        FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {error}", ctx.command().name);
        }
        other => {
            if let Err(e) = builtins::on_error(other).await {
                warn!("Error while handling error: {e}");
            }
        }
    }
}

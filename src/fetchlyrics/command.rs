//! The `/fetchlyrics` slash command.

use log::{info, warn};

use crate::bot::Data;
use crate::error::{BotError, Result};

use super::discord::DiscordSurface;
use super::flow::{LyricsRequest, handle_invocation};

/// Context type for lyrics commands.
type Context<'a> = poise::Context<'a, Data, BotError>;

/// Fetch lyrics for a song
#[poise::command(slash_command)]
pub async fn fetchlyrics(
    ctx: Context<'_>,
    #[description = "The name of the song"] song: String,
    #[description = "The name of the artist (optional)"] artist: Option<String>,
) -> Result<()> {
    let poise::Context::Application(app_ctx) = ctx else {
        warn!("fetchlyrics invoked outside of an application command");
        return Ok(());
    };

    info!(
        "Received /fetchlyrics from {} (song: {:?}, artist: {:?})",
        ctx.author().tag(),
        song,
        artist
    );

    let surface = DiscordSurface::new(ctx.serenity_context(), app_ctx.interaction);
    let request = LyricsRequest { song, artist };
    let outcome = handle_invocation(
        &surface,
        ctx.data().lyrics_provider(),
        &request,
        ctx.data().selection_timeout(),
    )
    .await;

    info!("/fetchlyrics for {} ended: {outcome:?}", ctx.author().tag());
    Ok(())
}

/// Get available lyrics commands.
#[must_use]
pub fn lyrics_commands() -> Vec<poise::Command<Data, BotError>> {
    vec![fetchlyrics()]
}

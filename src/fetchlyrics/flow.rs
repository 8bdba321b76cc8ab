//! The `/fetchlyrics` invocation lifecycle.
//!
//! `Idle → AwaitingSearch → (AwaitingSelection | Replied | Failed)`: the reply
//! is deferred, the provider searched, a menu shown, and the invoking user's
//! choice resolved into either delivered lyrics or a notice.

use std::time::Duration;

use log::{debug, error, info, warn};

use crate::chunking::deliver_chunks;
use crate::error::Result;
use crate::lyrics::{LyricsProvider, SearchResult, SongCandidate, search_songs};

use super::menu::SelectionMenu;
use super::session::{Resolution, Selection, SelectionSession};
use super::surface::{ComponentInput, InteractionSurface};

pub const SELECT_PROMPT: &str = "Please select a song:";
pub const CANCELLED_NOTICE: &str = "Lyric search cancelled.";
pub const NO_SELECTION_NOTICE: &str = "No song was selected. The lyric search has been cancelled.";

/// Arguments of one `/fetchlyrics` invocation.
#[derive(Debug, Clone)]
pub struct LyricsRequest {
    pub song: String,
    pub artist: Option<String>,
}

/// Terminal state of an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Lyrics for the candidate at this index were delivered.
    Replied { index: usize },
    /// The search failed; the reply carries the reason.
    SearchFailed,
    Cancelled,
    NoSelection,
    /// An error escaped the flow and was contained.
    Errored,
}

/// Run one invocation to completion, containing any error.
///
/// Errors are logged; if the reply is still editable it is replaced with a
/// generic message.
pub async fn handle_invocation<S, P>(
    surface: &S,
    provider: &P,
    request: &LyricsRequest,
    selection_timeout: Duration,
) -> Outcome
where
    S: InteractionSurface + ?Sized,
    P: LyricsProvider + ?Sized,
{
    match run_invocation(surface, provider, request, selection_timeout).await {
        Ok(outcome) => {
            debug!("Invocation finished: {outcome:?}");
            outcome
        }
        Err(e) => {
            error!("Error handling interaction: {e}");
            if surface.can_edit() {
                if let Err(edit_err) = surface.edit_reply(&e.user_message()).await {
                    error!("Failed to report error to user: {edit_err}");
                }
            } else {
                warn!("Reply is no longer editable; error not shown to user");
            }
            Outcome::Errored
        }
    }
}

async fn run_invocation<S, P>(
    surface: &S,
    provider: &P,
    request: &LyricsRequest,
    selection_timeout: Duration,
) -> Result<Outcome>
where
    S: InteractionSurface + ?Sized,
    P: LyricsProvider + ?Sized,
{
    surface.defer().await?;

    let candidates = match search_songs(provider, &request.song, request.artist.as_deref()).await {
        SearchResult::Found(candidates) => candidates,
        SearchResult::Failed(failure) => {
            surface.edit_reply(failure.user_message()).await?;
            return Ok(Outcome::SearchFailed);
        }
    };

    let menu = SelectionMenu::for_candidates(&candidates);
    surface.show_menu(SELECT_PROMPT, &menu).await?;

    let mut session = SelectionSession::new(surface.author_id(), &candidates, selection_timeout);

    while let Some(remaining) = session.remaining() {
        let Some(input) = surface.next_input(remaining).await? else {
            break;
        };

        let Some(selection) = session.offer(&input) else {
            debug!("Ignoring component input from {}", input.user_id());
            continue;
        };

        surface.acknowledge(&input).await?;

        match selection {
            Selection::Cancel => {
                info!("Lyric search cancelled by {}", input.user_id());
                surface.follow_up(CANCELLED_NOTICE).await?;
            }
            Selection::Song { candidate, .. } => {
                info!("User {} selected \"{}\"", input.user_id(), candidate.title);
                send_lyrics(surface, provider, candidate).await?;
            }
        }
    }

    match session.expire() {
        Resolution::Chosen(index) => Ok(Outcome::Replied { index }),
        Resolution::Cancelled => Ok(Outcome::Cancelled),
        Resolution::TimedOut => {
            info!("Selection ended without input");
            surface.follow_up(NO_SELECTION_NOTICE).await?;
            Ok(Outcome::NoSelection)
        }
    }
}

async fn send_lyrics<S, P>(surface: &S, provider: &P, song: &SongCandidate) -> Result<()>
where
    S: InteractionSurface + ?Sized,
    P: LyricsProvider + ?Sized,
{
    let lyrics = provider.lyrics(song).await?;

    surface
        .follow_up(&format!("Fetching lyrics for \"{}\"...", song.title))
        .await?;

    let message = compose_lyrics_message(song, &lyrics);
    deliver_chunks(surface, &message).await?;
    Ok(())
}

/// Header line followed by the lyric body.
#[must_use]
pub fn compose_lyrics_message(song: &SongCandidate, lyrics: &str) -> String {
    format!(
        "Lyrics for \"{}\" by {}:\n\n{lyrics}",
        song.title, song.artist_name
    )
}

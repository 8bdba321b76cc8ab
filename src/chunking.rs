//! Splitting long replies into Discord-sized follow-up messages.

use log::debug;

use crate::error::Result;
use crate::fetchlyrics::InteractionSurface;

/// Segment size used for lyric replies, below Discord's 2000 character limit.
pub const MAX_CHUNK_CHARS: usize = 1950;

/// Split `text` into consecutive segments of at most `max_chars` characters.
///
/// Boundaries are purely positional; words and lines may be cut. Joining the
/// segments in order yields `text` again.
#[must_use]
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    if max_chars == 0 {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut count = 0;

    for c in text.chars() {
        current.push(c);
        count += 1;
        if count == max_chars {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Send `text` as sequential follow-ups, each awaited before the next.
///
/// The first failed send aborts delivery of the remaining segments.
pub async fn deliver_chunks<S>(surface: &S, text: &str) -> Result<usize>
where
    S: InteractionSurface + ?Sized,
{
    let chunks = chunk_text(text, MAX_CHUNK_CHARS);
    debug!(
        "Delivering {} characters in {} messages",
        text.chars().count(),
        chunks.len()
    );

    for chunk in &chunks {
        surface.follow_up(chunk).await?;
    }

    Ok(chunks.len())
}

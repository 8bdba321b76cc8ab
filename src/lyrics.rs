//! Lyrics lookup against the Genius service.

mod genius;
mod page;
mod provider;

pub use genius::GeniusClient;
#[cfg(test)]
pub use provider::MockLyricsProvider;
pub use provider::{
    LyricsProvider, MAX_CANDIDATES, SearchFailure, SearchResult, SongCandidate, build_query,
    search_songs,
};

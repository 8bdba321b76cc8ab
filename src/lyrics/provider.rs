//! Provider seam and the search adapter built on top of it.

use async_trait::async_trait;
use log::{debug, error, info};
use url::Url;

use crate::error::{BotError, Result};

/// Maximum number of candidates offered to the user.
pub const MAX_CANDIDATES: usize = 5;

/// A song returned by a search, scoped to one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongCandidate {
    pub title: String,
    pub artist_name: String,
    pub full_title: String,
    /// Song page the full lyrics are resolved from.
    pub url: Url,
}

/// Outcome of [`search_songs`].
#[derive(Debug)]
pub enum SearchResult {
    /// Between one and [`MAX_CANDIDATES`] songs, in upstream ranking order.
    Found(Vec<SongCandidate>),
    Failed(SearchFailure),
}

#[derive(Debug)]
pub enum SearchFailure {
    /// The service answered with an empty result set.
    NoResults,
    /// The service could not be reached or answered with garbage.
    Provider(BotError),
}

impl SearchFailure {
    /// Message shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchFailure::NoResults => "No lyrics found for this song.",
            SearchFailure::Provider(_) => "Error fetching lyrics.",
        }
    }
}

/// External lyrics service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LyricsProvider: Send + Sync {
    /// Search songs matching `query`, best match first.
    async fn search(&self, query: &str) -> Result<Vec<SongCandidate>>;

    /// Resolve the full lyric text of a candidate.
    async fn lyrics(&self, candidate: &SongCandidate) -> Result<String>;
}

/// Build the search query from a title and an optional artist.
#[must_use]
pub fn build_query(title: &str, artist: Option<&str>) -> String {
    match artist.map(str::trim).filter(|artist| !artist.is_empty()) {
        Some(artist) => format!("{title} {artist}"),
        None => title.to_string(),
    }
}

/// Search the provider and keep the top [`MAX_CANDIDATES`] results.
///
/// Every call reaches the provider exactly once; failures are reported, never retried.
pub async fn search_songs<P>(provider: &P, title: &str, artist: Option<&str>) -> SearchResult
where
    P: LyricsProvider + ?Sized,
{
    let query = build_query(title, artist);
    debug!("Searching lyrics for query: {query}");

    match provider.search(&query).await {
        Ok(candidates) if candidates.is_empty() => {
            info!("No songs found for query: {query}");
            SearchResult::Failed(SearchFailure::NoResults)
        }
        Ok(mut candidates) => {
            debug!("Provider returned {} candidates", candidates.len());
            candidates.truncate(MAX_CANDIDATES);
            SearchResult::Found(candidates)
        }
        Err(e) => {
            error!("Error fetching lyrics for query '{query}': {e}");
            SearchResult::Failed(SearchFailure::Provider(e))
        }
    }
}

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use url::Url;

use crate::error::{BotError, Result};

use super::page::extract_lyrics;
use super::provider::{LyricsProvider, SongCandidate};

const GENIUS_SEARCH_URL: &str = "https://api.genius.com/search";

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    response: SearchResponse,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "type")]
    hit_type: String,
    result: SongResult,
}

#[derive(Debug, Deserialize)]
struct SongResult {
    title: String,
    full_title: String,
    url: Url,
    primary_artist: Artist,
}

#[derive(Debug, Deserialize)]
struct Artist {
    name: String,
}

impl From<SongResult> for SongCandidate {
    fn from(song: SongResult) -> Self {
        SongCandidate {
            title: song.title,
            artist_name: song.primary_artist.name,
            full_title: song.full_title,
            url: song.url,
        }
    }
}

/// Parse a Genius `/search` body into song candidates, keeping upstream order.
fn parse_search_response(body: &str) -> Result<Vec<SongCandidate>> {
    let envelope: SearchEnvelope = serde_json::from_str(body)
        .map_err(|e| BotError::GeniusResponse(format!("Malformed search response: {e}")))?;

    Ok(envelope
        .response
        .hits
        .into_iter()
        .filter(|hit| hit.hit_type == "song")
        .map(|hit| hit.result.into())
        .collect())
}

/// Client for the Genius API and song pages.
pub struct GeniusClient {
    access_token: String,
    client: reqwest::Client,
}

impl GeniusClient {
    pub fn new(access_token: String) -> Self {
        Self {
            access_token,
            client: reqwest::Client::new(),
        }
    }

    async fn get_text(&self, request: reqwest::RequestBuilder) -> Result<String> {
        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response: {e}"));
            return Err(BotError::GeniusApi { status, message });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl LyricsProvider for GeniusClient {
    async fn search(&self, query: &str) -> Result<Vec<SongCandidate>> {
        debug!("Sending search request to Genius API: {query}");

        let request = self
            .client
            .get(GENIUS_SEARCH_URL)
            .bearer_auth(&self.access_token)
            .query(&[("q", query)]);
        let body = self.get_text(request).await?;

        let candidates = parse_search_response(&body)?;
        debug!("Genius returned {} songs", candidates.len());
        Ok(candidates)
    }

    async fn lyrics(&self, candidate: &SongCandidate) -> Result<String> {
        debug!("Fetching lyrics page {}", candidate.url);

        let request = self.client.get(candidate.url.clone());
        let html = self.get_text(request).await?;

        extract_lyrics(&html, candidate.url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_BODY: &str = r#"{
        "meta": { "status": 200 },
        "response": {
            "hits": [
                {
                    "index": "song",
                    "type": "song",
                    "result": {
                        "id": 1,
                        "title": "Imagine",
                        "full_title": "Imagine by John Lennon",
                        "url": "https://genius.com/John-lennon-imagine-lyrics",
                        "primary_artist": { "id": 7, "name": "John Lennon" }
                    }
                },
                {
                    "index": "album",
                    "type": "album",
                    "result": {
                        "title": "Imagine",
                        "full_title": "Imagine (Album)",
                        "url": "https://genius.com/albums/John-lennon/Imagine",
                        "primary_artist": { "name": "John Lennon" }
                    }
                },
                {
                    "index": "song",
                    "type": "song",
                    "result": {
                        "title": "Imagine (Remastered)",
                        "full_title": "Imagine (Remastered) by John Lennon",
                        "url": "https://genius.com/John-lennon-imagine-remastered-lyrics",
                        "primary_artist": { "name": "John Lennon" }
                    }
                }
            ]
        }
    }"#;

    #[test]
    fn parses_song_hits_in_order() {
        let songs = parse_search_response(SEARCH_BODY).expect("valid body");
        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].title, "Imagine");
        assert_eq!(songs[0].artist_name, "John Lennon");
        assert_eq!(songs[0].full_title, "Imagine by John Lennon");
        assert_eq!(
            songs[0].url.as_str(),
            "https://genius.com/John-lennon-imagine-lyrics"
        );
        assert_eq!(songs[1].title, "Imagine (Remastered)");
    }

    #[test]
    fn empty_hits_is_not_an_error() {
        let songs = parse_search_response(r#"{"response": {"hits": []}}"#).expect("valid body");
        assert!(songs.is_empty());
    }

    #[test]
    fn malformed_body_is_a_response_error() {
        let err = parse_search_response("<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, BotError::GeniusResponse(_)));
    }
}

//! Lyric text extraction from Genius song pages.

use scraper::{ElementRef, Html, Node, Selector};

use crate::error::{BotError, Result};

const LYRICS_CONTAINER: &str = r#"div[data-lyrics-container="true"]"#;
const EXCLUDED_ATTR: &str = "data-exclude-from-selection";

/// Pull the lyric body out of a song page.
///
/// `<br>` becomes a newline, annotations marked as excluded are dropped and
/// successive containers are joined by newlines.
pub fn extract_lyrics(html: &str, source: &str) -> Result<String> {
    let selector = Selector::parse(LYRICS_CONTAINER)
        .map_err(|e| BotError::GeniusResponse(format!("Invalid lyrics selector: {e}")))?;
    let document = Html::parse_document(html);

    let sections: Vec<String> = document
        .select(&selector)
        .map(|container| {
            let mut text = String::new();
            collect_text(container, &mut text);
            text
        })
        .collect();

    let lyrics = sections.join("\n").trim().to_string();
    if lyrics.is_empty() {
        return Err(BotError::LyricsUnavailable(source.to_string()));
    }
    Ok(lyrics)
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if el.name() == "br" => out.push('\n'),
            Node::Element(el) if el.attr(EXCLUDED_ATTR).is_some() => {}
            Node::Element(_) => {
                if let Some(nested) = ElementRef::wrap(child) {
                    collect_text(nested, out);
                }
            }
            _ => {}
        }
    }
}

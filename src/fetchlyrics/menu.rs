//! Selection menu rendering for search candidates.

use poise::serenity_prelude::{
    CreateActionRow, CreateSelectMenu, CreateSelectMenuKind, CreateSelectMenuOption,
};

use crate::lyrics::SongCandidate;

/// Custom id of the candidate select menu.
pub const MENU_CUSTOM_ID: &str = "lyric_select";

/// Value of the synthetic cancel entry.
pub const CANCEL_VALUE: &str = "cancel";

/// Discord rejects option labels and descriptions longer than this.
pub const MAX_OPTION_TEXT: usize = 100;

const PLACEHOLDER: &str = "Select a song";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub description: String,
    pub value: String,
}

/// Ordered menu entries: one per candidate, then cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionMenu {
    pub entries: Vec<MenuEntry>,
}

/// What a menu value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Song(usize),
    Cancel,
}

impl SelectionMenu {
    #[must_use]
    pub fn for_candidates(candidates: &[SongCandidate]) -> Self {
        let mut entries: Vec<MenuEntry> = candidates
            .iter()
            .enumerate()
            .map(|(index, song)| MenuEntry {
                label: truncate(&format!("{} by {}", song.title, song.artist_name)),
                description: truncate(&song.full_title),
                value: index.to_string(),
            })
            .collect();

        entries.push(MenuEntry {
            label: "Cancel".to_string(),
            description: "Cancel the lyric search".to_string(),
            value: CANCEL_VALUE.to_string(),
        });

        Self { entries }
    }

    /// Build the Discord component row for this menu.
    #[must_use]
    pub fn to_action_row(&self) -> CreateActionRow {
        let options = self
            .entries
            .iter()
            .map(|entry| {
                CreateSelectMenuOption::new(&entry.label, &entry.value)
                    .description(&entry.description)
            })
            .collect();

        let select = CreateSelectMenu::new(MENU_CUSTOM_ID, CreateSelectMenuKind::String { options })
            .placeholder(PLACEHOLDER);

        CreateActionRow::SelectMenu(select)
    }
}

/// Interpret a selected value against a list of `candidate_count` songs.
#[must_use]
pub fn parse_choice(value: &str, candidate_count: usize) -> Option<MenuChoice> {
    if value == CANCEL_VALUE {
        return Some(MenuChoice::Cancel);
    }

    value
        .parse::<usize>()
        .ok()
        .filter(|index| *index < candidate_count)
        .map(MenuChoice::Song)
}

fn truncate(text: &str) -> String {
    text.chars().take(MAX_OPTION_TEXT).collect()
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    fn song(title: &str, artist: &str) -> SongCandidate {
        SongCandidate {
            title: title.to_string(),
            artist_name: artist.to_string(),
            full_title: format!("{title} by {artist}"),
            url: Url::parse("https://genius.com/a-lyrics").expect("valid url"),
        }
    }

    #[test]
    fn one_entry_per_candidate_then_cancel() {
        for count in 1..=5 {
            let candidates: Vec<_> = (0..count)
                .map(|i| song(&format!("Song {i}"), "Band"))
                .collect();
            let menu = SelectionMenu::for_candidates(&candidates);

            assert_eq!(menu.entries.len(), count + 1);
            for (i, entry) in menu.entries.iter().take(count).enumerate() {
                assert_eq!(entry.value, i.to_string());
                assert_eq!(entry.label, format!("Song {i} by Band"));
            }
            let last = menu.entries.last().expect("cancel entry");
            assert_eq!(last.value, CANCEL_VALUE);
            assert_eq!(last.label, "Cancel");
        }
    }

    #[test]
    fn long_labels_are_truncated_by_character() {
        let title = "ü".repeat(150);
        let menu = SelectionMenu::for_candidates(&[song(&title, "Artist")]);

        let entry = &menu.entries[0];
        assert_eq!(entry.label.chars().count(), MAX_OPTION_TEXT);
        assert_eq!(entry.description.chars().count(), MAX_OPTION_TEXT);
        assert!(entry.label.chars().all(|c| c == 'ü'));
    }

    #[test]
    fn parses_indices_and_cancel() {
        assert_eq!(parse_choice("0", 3), Some(MenuChoice::Song(0)));
        assert_eq!(parse_choice("2", 3), Some(MenuChoice::Song(2)));
        assert_eq!(parse_choice("cancel", 3), Some(MenuChoice::Cancel));
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert_eq!(parse_choice("3", 3), None);
        assert_eq!(parse_choice("-1", 3), None);
        assert_eq!(parse_choice("Cancel", 3), None);
        assert_eq!(parse_choice("", 3), None);
    }
}

//! `/fetchlyrics`: search, pick a song from a menu, receive its lyrics.

mod command;
mod discord;
#[cfg(test)]
pub(crate) mod fake;
mod flow;
mod menu;
mod session;
mod surface;

pub use command::lyrics_commands;
pub use flow::{LyricsRequest, Outcome, handle_invocation};
pub use menu::{CANCEL_VALUE, MENU_CUSTOM_ID, MenuEntry, SelectionMenu};
pub use surface::{ComponentInput, InteractionSurface};

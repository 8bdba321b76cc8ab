//! The reply channel a `/fetchlyrics` invocation talks through.

use std::time::Duration;

use async_trait::async_trait;
use poise::serenity_prelude::UserId;

use crate::error::Result;

use super::menu::SelectionMenu;

/// A component input received while a selection menu is on screen.
pub trait ComponentInput: Send + Sync {
    fn user_id(&self) -> UserId;
    fn custom_id(&self) -> &str;
    /// First selected value of a string select, if any.
    fn selected(&self) -> Option<&str>;
}

/// Everything the invocation flow needs from the chat platform.
#[async_trait]
pub trait InteractionSurface: Send + Sync {
    type Input: ComponentInput;

    /// User who invoked the command.
    fn author_id(&self) -> UserId;

    /// Whether the original reply can still be edited.
    fn can_edit(&self) -> bool;

    /// Acknowledge the invocation and show a pending reply.
    async fn defer(&self) -> Result<()>;

    /// Replace the pending reply with plain text.
    async fn edit_reply(&self, content: &str) -> Result<()>;

    /// Replace the pending reply with a prompt and a selection menu.
    async fn show_menu(&self, prompt: &str, menu: &SelectionMenu) -> Result<()>;

    /// Wait up to `timeout` for the next component input on the menu, from any user.
    ///
    /// `None` means nothing arrived in time.
    async fn next_input(&self, timeout: Duration) -> Result<Option<Self::Input>>;

    /// Acknowledge a component input without changing the menu message.
    async fn acknowledge(&self, input: &Self::Input) -> Result<()>;

    /// Send a new message after the original reply.
    async fn follow_up(&self, content: &str) -> Result<()>;
}

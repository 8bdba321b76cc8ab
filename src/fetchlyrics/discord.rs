//! [`InteractionSurface`] backed by a Discord slash command interaction.

use std::pin::Pin;
use std::time::Duration;

use async_trait::async_trait;
use futures::{Stream, StreamExt};
use log::debug;
use poise::serenity_prelude::{
    CommandInteraction, ComponentInteraction, ComponentInteractionCollector,
    ComponentInteractionDataKind, Context, CreateInteractionResponseFollowup,
    EditInteractionResponse, UserId,
};
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::config::INTERACTION_TOKEN_LIFETIME;
use crate::error::Result;

use super::menu::{MENU_CUSTOM_ID, SelectionMenu};
use super::surface::{ComponentInput, InteractionSurface};

type InputStream = Pin<Box<dyn Stream<Item = ComponentInteraction> + Send>>;

/// Pull the next item from `stream`, giving up after `timeout`.
///
/// Items that arrive while nobody is waiting stay buffered in the stream.
async fn next_within<S>(stream: &mut S, timeout: Duration) -> Option<S::Item>
where
    S: Stream + Unpin,
{
    tokio::time::timeout(timeout, stream.next())
        .await
        .ok()
        .flatten()
}

impl ComponentInput for ComponentInteraction {
    fn user_id(&self) -> UserId {
        self.user.id
    }

    fn custom_id(&self) -> &str {
        &self.data.custom_id
    }

    fn selected(&self) -> Option<&str> {
        match &self.data.kind {
            ComponentInteractionDataKind::StringSelect { values } => {
                values.first().map(String::as_str)
            }
            _ => None,
        }
    }
}

pub struct DiscordSurface<'a> {
    ctx: &'a Context,
    interaction: &'a CommandInteraction,
    received_at: Instant,
    /// Component inputs on the menu message, registered once the menu is shown.
    inputs: Mutex<Option<InputStream>>,
}

impl<'a> DiscordSurface<'a> {
    pub fn new(ctx: &'a Context, interaction: &'a CommandInteraction) -> Self {
        Self {
            ctx,
            interaction,
            received_at: Instant::now(),
            inputs: Mutex::new(None),
        }
    }
}

#[async_trait]
impl InteractionSurface for DiscordSurface<'_> {
    type Input = ComponentInteraction;

    fn author_id(&self) -> UserId {
        self.interaction.user.id
    }

    fn can_edit(&self) -> bool {
        self.received_at.elapsed() < INTERACTION_TOKEN_LIFETIME
    }

    async fn defer(&self) -> Result<()> {
        self.interaction.defer(&self.ctx.http).await?;
        Ok(())
    }

    async fn edit_reply(&self, content: &str) -> Result<()> {
        self.interaction
            .edit_response(
                &self.ctx.http,
                EditInteractionResponse::new().content(content),
            )
            .await?;
        Ok(())
    }

    async fn show_menu(&self, prompt: &str, menu: &SelectionMenu) -> Result<()> {
        let message = self
            .interaction
            .edit_response(
                &self.ctx.http,
                EditInteractionResponse::new()
                    .content(prompt)
                    .components(vec![menu.to_action_row()]),
            )
            .await?;

        debug!(
            "Rendered {} menu entries on message {}",
            menu.entries.len(),
            message.id
        );

        let stream = ComponentInteractionCollector::new(self.ctx)
            .message_id(message.id)
            .custom_ids(vec![MENU_CUSTOM_ID.to_string()])
            .stream();
        *self.inputs.lock().await = Some(Box::pin(stream));
        Ok(())
    }

    async fn next_input(&self, timeout: Duration) -> Result<Option<ComponentInteraction>> {
        let mut inputs = self.inputs.lock().await;
        let Some(stream) = inputs.as_mut() else {
            debug!("No menu shown yet, nothing to wait for");
            return Ok(None);
        };

        Ok(next_within(stream, timeout).await)
    }

    async fn acknowledge(&self, input: &ComponentInteraction) -> Result<()> {
        input.defer(&self.ctx.http).await?;
        Ok(())
    }

    async fn follow_up(&self, content: &str) -> Result<()> {
        self.interaction
            .create_followup(
                &self.ctx.http,
                CreateInteractionResponseFollowup::new().content(content),
            )
            .await?;
        Ok(())
    }
}

//! Recording surface for exercising the invocation flow without Discord.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use poise::serenity_prelude::{self as serenity, UserId};

use crate::error::{BotError, Result};

use super::menu::{MENU_CUSTOM_ID, SelectionMenu};
use super::surface::{ComponentInput, InteractionSurface};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Deferred,
    Edited(String),
    Menu { prompt: String, menu: SelectionMenu },
    Acknowledged(UserId),
    FollowUp(String),
}

#[derive(Debug, Clone)]
pub struct FakeInput {
    user: UserId,
    custom_id: String,
    value: String,
}

impl FakeInput {
    pub fn select(user: u64, value: &str) -> Self {
        Self {
            user: UserId::new(user),
            custom_id: MENU_CUSTOM_ID.to_string(),
            value: value.to_string(),
        }
    }
}

impl ComponentInput for FakeInput {
    fn user_id(&self) -> UserId {
        self.user
    }

    fn custom_id(&self) -> &str {
        &self.custom_id
    }

    fn selected(&self) -> Option<&str> {
        Some(&self.value)
    }
}

/// Replays scripted inputs and records everything sent.
///
/// Once the scripted inputs run out, `next_input` reports a timeout.
pub struct FakeSurface {
    author: UserId,
    inputs: Mutex<VecDeque<FakeInput>>,
    events: Mutex<Vec<SurfaceEvent>>,
    follow_ups_sent: Mutex<usize>,
    fail_follow_up_at: Option<usize>,
    editable: bool,
}

impl FakeSurface {
    pub fn new(author: u64, inputs: Vec<FakeInput>) -> Self {
        Self {
            author: UserId::new(author),
            inputs: Mutex::new(inputs.into()),
            events: Mutex::new(Vec::new()),
            follow_ups_sent: Mutex::new(0),
            fail_follow_up_at: None,
            editable: true,
        }
    }

    /// Make the follow-up with this zero-based position fail.
    pub fn failing_follow_up_at(mut self, position: usize) -> Self {
        self.fail_follow_up_at = Some(position);
        self
    }

    pub fn expired(mut self) -> Self {
        self.editable = false;
        self
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.lock().expect("events lock").clone()
    }

    pub fn follow_ups(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SurfaceEvent::FollowUp(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn menus(&self) -> Vec<SelectionMenu> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SurfaceEvent::Menu { menu, .. } => Some(menu),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: SurfaceEvent) {
        self.events.lock().expect("events lock").push(event);
    }
}

#[async_trait]
impl InteractionSurface for FakeSurface {
    type Input = FakeInput;

    fn author_id(&self) -> UserId {
        self.author
    }

    fn can_edit(&self) -> bool {
        self.editable
    }

    async fn defer(&self) -> Result<()> {
        self.record(SurfaceEvent::Deferred);
        Ok(())
    }

    async fn edit_reply(&self, content: &str) -> Result<()> {
        self.record(SurfaceEvent::Edited(content.to_string()));
        Ok(())
    }

    async fn show_menu(&self, prompt: &str, menu: &SelectionMenu) -> Result<()> {
        self.record(SurfaceEvent::Menu {
            prompt: prompt.to_string(),
            menu: menu.clone(),
        });
        Ok(())
    }

    async fn next_input(&self, _timeout: Duration) -> Result<Option<FakeInput>> {
        Ok(self.inputs.lock().expect("inputs lock").pop_front())
    }

    async fn acknowledge(&self, input: &FakeInput) -> Result<()> {
        self.record(SurfaceEvent::Acknowledged(input.user));
        Ok(())
    }

    async fn follow_up(&self, content: &str) -> Result<()> {
        let position = {
            let mut sent = self.follow_ups_sent.lock().expect("counter lock");
            let position = *sent;
            *sent += 1;
            position
        };
        if self.fail_follow_up_at == Some(position) {
            return Err(BotError::from(serenity::Error::Other("follow-up rejected")));
        }
        self.record(SurfaceEvent::FollowUp(content.to_string()));
        Ok(())
    }
}

//! Per-invocation selection state.

use std::time::Duration;

use log::debug;
use poise::serenity_prelude::UserId;
use tokio::time::Instant;

use crate::lyrics::SongCandidate;

use super::menu::{MENU_CUSTOM_ID, MenuChoice, parse_choice};
use super::surface::ComponentInput;

/// How a selection session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Chosen(usize),
    Cancelled,
    TimedOut,
}

/// Accepted input that resolved the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Song {
        index: usize,
        candidate: &'a SongCandidate,
    },
    Cancel,
}

/// Selection state for one invocation.
///
/// Only the invoking user can resolve it, and only once.
#[derive(Debug)]
pub struct SelectionSession<'a> {
    author: UserId,
    candidates: &'a [SongCandidate],
    deadline: Instant,
    resolution: Option<Resolution>,
}

impl<'a> SelectionSession<'a> {
    pub fn new(author: UserId, candidates: &'a [SongCandidate], timeout: Duration) -> Self {
        Self {
            author,
            candidates,
            deadline: Instant::now() + timeout,
            resolution: None,
        }
    }

    #[cfg(test)]
    #[must_use]
    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }

    /// Time left before the session times out, `None` once it is resolved or expired.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        if self.resolution.is_some() {
            return None;
        }
        self.deadline
            .checked_duration_since(Instant::now())
            .filter(|left| !left.is_zero())
    }

    /// Offer an input to the session.
    ///
    /// Returns the selection when the input resolves the session. Input from
    /// another user, another component, with an unknown value, or arriving
    /// after resolution leaves the session untouched.
    pub fn offer<I: ComponentInput + ?Sized>(&mut self, input: &I) -> Option<Selection<'a>> {
        if self.resolution.is_some() {
            debug!("Ignoring input from {}: session already resolved", input.user_id());
            return None;
        }
        if input.user_id() != self.author || input.custom_id() != MENU_CUSTOM_ID {
            return None;
        }

        let choice = input
            .selected()
            .and_then(|value| parse_choice(value, self.candidates.len()))?;

        match choice {
            MenuChoice::Cancel => {
                self.resolution = Some(Resolution::Cancelled);
                Some(Selection::Cancel)
            }
            MenuChoice::Song(index) => {
                let candidate = self.candidates.get(index)?;
                self.resolution = Some(Resolution::Chosen(index));
                Some(Selection::Song { index, candidate })
            }
        }
    }

    /// Mark the session as ended without a selection. No-op once resolved.
    pub fn expire(&mut self) -> Resolution {
        *self.resolution.get_or_insert(Resolution::TimedOut)
    }
}

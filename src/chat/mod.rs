//! The chat assistant's message log.
//!
//! An append-only ordered sequence of bot/user turns. `append` is the only
//! mutator for real messages; the transient typing placeholder is managed
//! separately and never counts toward the log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{ConnectionState, Platform};
use crate::workflow::Action;

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    Bot,
    User,
}

/// Visual weight of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Secondary,
}

/// A selectable action attached to a bot message. Selecting it feeds the
/// action into the workflow controller.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionButton {
    pub label: String,
    pub action: Action,
    pub variant: ButtonVariant,
}

impl ActionButton {
    pub fn new(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            action,
            variant: ButtonVariant::Default,
        }
    }

    pub fn outline(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            action,
            variant: ButtonVariant::Outline,
        }
    }

    pub fn secondary(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            action,
            variant: ButtonVariant::Secondary,
        }
    }
}

/// Inline integration-status widget rendered inside a bot message.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationWidget {
    pub entries: Vec<(Platform, ConnectionState)>,
}

/// One turn in the conversation.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: Uuid,
    pub author: Author,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub buttons: Vec<ActionButton>,
    pub widget: Option<IntegrationWidget>,
}

impl Message {
    pub fn bot(content: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: Author::Bot,
            content: content.to_string(),
            timestamp: Utc::now(),
            buttons: Vec::new(),
            widget: None,
        }
    }

    pub fn user(content: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: Author::User,
            content: content.to_string(),
            timestamp: Utc::now(),
            buttons: Vec::new(),
            widget: None,
        }
    }

    pub fn with_buttons(mut self, buttons: Vec<ActionButton>) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn with_widget(mut self, widget: IntegrationWidget) -> Self {
        self.widget = Some(widget);
        self
    }
}

/// Append-only FIFO log of conversation turns.
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
    typing: bool,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message. The only mutator; ordering is insertion order.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Show the transient "typing" placeholder. Presentational only; the
    /// placeholder is never part of the log.
    pub fn begin_typing(&mut self) {
        self.typing = true;
    }

    pub fn end_typing(&mut self) {
        self.typing = false;
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }
}

//! Inbound events.

use crate::{command::Command, session::UserId};

/// Something a user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotEvent {
    /// Who did it.
    pub user: UserId,
    /// What they did.
    pub kind: EventKind,
}

/// Kind of inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// Slash command.
    Command(Command),

    /// Inline button press.
    Callback {
        /// Opaque payload attached to the button.
        payload: String,
    },

    /// Free-form text message.
    Text(String),
}

impl BotEvent {
    /// Classify a text message from `user` (command or free text).
    ///
    /// Command mentions are not checked; see [`BotEvent::message_to`].
    pub fn message(user: UserId, text: &str) -> Self {
        Self { user, kind: crate::command::parse(text, None) }
    }

    /// Classify a text message from `user` to the bot named `bot`.
    ///
    /// Commands addressed to another bot become `Command::Unknown`.
    pub fn message_to(user: UserId, text: &str, bot: &str) -> Self {
        Self { user, kind: crate::command::parse(text, Some(bot)) }
    }

    /// Button press by `user`.
    pub fn callback(user: UserId, payload: impl Into<String>) -> Self {
        Self { user, kind: EventKind::Callback { payload: payload.into() } }
    }

    /// `/start` from `user`.
    pub fn start(user: UserId) -> Self {
        Self { user, kind: EventKind::Command(Command::Start) }
    }
}

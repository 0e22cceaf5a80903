//! Per-user conversation sessions.
//!
//! A [`Session`] is a plain value; handlers never mutate one in place but
//! compute the next value and hand it back to the [`SessionStore`], which
//! performs the read-modify-write under its lock. Two events for the same
//! user therefore cannot interleave and drop each other's choices.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::{locale::Language, width::BitWidth};

/// Chat platform user identity.
pub type UserId = u64;

/// Where a user is in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    /// No language chosen yet.
    AwaitingLanguage,
    /// Language chosen, switch count not yet.
    AwaitingBitWidth,
    /// Ready to turn addresses into images.
    AwaitingAddress,
}

/// Choices a user has made so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    language: Option<Language>,
    width: Option<BitWidth>,
}

impl Session {
    /// Chosen language, if any.
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    /// Chosen width, if any.
    pub fn width(&self) -> Option<BitWidth> {
        self.width
    }

    /// Chosen language, or Ukrainian.
    pub fn language_or_default(&self) -> Language {
        self.language.unwrap_or_default()
    }

    /// Chosen width, or 8 switches.
    pub fn width_or_default(&self) -> BitWidth {
        self.width.unwrap_or_default()
    }

    /// Session with `language` recorded.
    #[must_use]
    pub fn with_language(self, language: Language) -> Self {
        Self { language: Some(language), ..self }
    }

    /// Session with `width` recorded.
    #[must_use]
    pub fn with_width(self, width: BitWidth) -> Self {
        Self { width: Some(width), ..self }
    }

    /// Conversation state implied by the recorded choices.
    pub fn state(&self) -> ConversationState {
        match (self.language, self.width) {
            (None, _) => ConversationState::AwaitingLanguage,
            (Some(_), None) => ConversationState::AwaitingBitWidth,
            (Some(_), Some(_)) => ConversationState::AwaitingAddress,
        }
    }
}

/// Sessions keyed by user.
///
/// Sessions live for the lifetime of the process.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<UserId, Session>>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session for `user`; an empty session if there is none.
    pub fn get(&self, user: UserId) -> Session {
        self.lock().get(&user).copied().unwrap_or_default()
    }

    /// Atomically replace the session for `user`.
    ///
    /// `f` receives the current session (empty on first contact) and returns
    /// the replacement plus a value passed back to the caller. The entry is
    /// created if missing.
    pub fn update<T>(&self, user: UserId, f: impl FnOnce(Session) -> (Session, T)) -> T {
        let mut sessions = self.lock();
        let entry = sessions.entry(user).or_default();
        let (next, out) = f(*entry);
        *entry = next;
        out
    }

    /// Whether `user` has interacted with the bot.
    pub fn contains(&self, user: UserId) -> bool {
        self.lock().contains_key(&user)
    }

    /// Number of known users.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no user has interacted yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Entries are replaced whole, so a poisoned map still holds valid data.
    fn lock(&self) -> MutexGuard<'_, HashMap<UserId, Session>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

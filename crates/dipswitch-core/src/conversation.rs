//! Conversation state machine.
//!
//! # Architecture: Action-Based State Machine
//!
//! [`Conversation::handle`] takes an inbound [`BotEvent`] and returns the
//! [`BotAction`]s a driver should execute. No I/O happens here; the only
//! shared state is the [`SessionStore`].
//!
//! # State Machine
//!
//! ```text
//!                /start           lang_xx             bits_n
//! ┌──────────────────┐ ───> ┌──────────────────┐ ───> ┌─────────────────┐
//! │ AwaitingLanguage │      │ AwaitingBitWidth │      │ AwaitingAddress │<─┐
//! └──────────────────┘      └──────────────────┘      └─────────────────┘  │
//!                                    ^  /start (language known)   │ text   │
//!                                    └────────────────────────────┤        │
//!                                                                 └────────┘
//! ```
//!
//! Address replies never change the session: valid addresses produce an
//! image, invalid ones a localized explanation, and the user stays where
//! they were.

use tracing::{debug, warn};

use crate::{
    action::{BotAction, Keyboard},
    address::parse_address,
    callback::CallbackData,
    command::Command,
    error::AddressError,
    event::{BotEvent, EventKind},
    locale::Language,
    renderer::{PngRenderer, Renderer},
    session::{Session, SessionStore, UserId},
    text::Text,
    width::BitWidth,
};

/// Per-user conversation logic over a shared session store.
#[derive(Debug, Default)]
pub struct Conversation<R = PngRenderer> {
    sessions: SessionStore,
    renderer: R,
}

impl Conversation {
    /// Conversation using the PNG renderer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: Renderer> Conversation<R> {
    /// Conversation using a custom renderer.
    pub fn with_renderer(renderer: R) -> Self {
        Self { sessions: SessionStore::new(), renderer }
    }

    /// Session store backing the conversation.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Renderer used for valid addresses.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Current session for `user`.
    pub fn session(&self, user: UserId) -> Session {
        self.sessions.get(user)
    }

    /// Process one event and return the actions to execute, in order.
    pub fn handle(&self, event: &BotEvent) -> Vec<BotAction> {
        let user = event.user;
        match &event.kind {
            EventKind::Command(Command::Start) => self.start(user),
            EventKind::Command(Command::Unknown { name }) => {
                debug!(user, command = %name, "ignoring unknown command");
                Vec::new()
            },
            EventKind::Callback { payload } => self.callback(user, payload),
            EventKind::Text(text) => self.address(user, text),
        }
    }

    /// Validate `text` as an address for `width` and render it.
    ///
    /// Returns the PNG for a valid address. Validation and rendering
    /// failures come back as [`AddressError`].
    pub fn render_address(&self, text: &str, width: BitWidth) -> Result<Vec<u8>, AddressError> {
        let bank = parse_address(text, width)?;
        Ok(self.renderer.render_png(&bank)?)
    }

    fn start(&self, user: UserId) -> Vec<BotAction> {
        let session = self.sessions.update(user, |session| (session, session));
        debug!(user, state = ?session.state(), "start");

        match session.language() {
            None => vec![BotAction::SendText {
                text: Text::ChooseLanguage.localize(Language::default()),
                keyboard: Some(Keyboard::languages()),
            }],
            Some(language) => vec![BotAction::SendText {
                text: Text::ChooseBits.localize(language),
                keyboard: Some(Keyboard::widths()),
            }],
        }
    }

    fn callback(&self, user: UserId, payload: &str) -> Vec<BotAction> {
        let mut actions = vec![BotAction::AcknowledgeCallback];

        match CallbackData::parse(payload) {
            Ok(CallbackData::Language(language)) => {
                self.sessions.update(user, |session| (session.with_language(language), ()));
                debug!(user, %language, "language selected");

                actions.push(BotAction::EditText {
                    text: Text::ChooseBits.localize(language),
                    keyboard: Some(Keyboard::widths()),
                });
            },
            Ok(CallbackData::Width(width)) => {
                let session = self.sessions.update(user, |session| {
                    let next = session.with_width(width);
                    (next, next)
                });
                debug!(user, %width, "width selected");

                let text = Text::SendAddress { max: width.max_address() };
                actions.push(BotAction::EditText {
                    text: text.localize(session.language_or_default()),
                    keyboard: None,
                });
            },
            Err(error) => warn!(user, %error, "ignoring callback"),
        }

        actions
    }

    fn address(&self, user: UserId, text: &str) -> Vec<BotAction> {
        let session = self.sessions.get(user);
        let language = session.language_or_default();
        let width = session.width_or_default();

        let reply = match self.render_address(text, width) {
            Ok(png) => {
                debug!(user, %width, bytes = png.len(), "rendered switch bank");
                return vec![BotAction::SendPhoto { png }];
            },
            Err(AddressError::Malformed) => Text::InvalidNumber,
            Err(AddressError::Negative) => Text::NegativeNumber,
            Err(AddressError::TooLarge { max }) => Text::TooLarge { max },
            Err(AddressError::Render(error)) => {
                warn!(user, %error, "failed to render switch bank");
                Text::InvalidInput
            },
        };

        debug!(user, ?reply, "rejected address");
        vec![BotAction::SendText { text: reply.localize(language), keyboard: None }]
    }
}

//! DIP switch bot core logic
//!
//! Pure conversation logic for the DIP switch bot, completely decoupled from
//! the chat platform. Events go in, declarative actions come out.
//!
//! # Architecture
//!
//! The conversation is a small state machine keyed by user. Each user walks
//! through language selection, switch count selection and then sends any
//! number of addresses. Choices live in an explicit [`SessionStore`] owned
//! by the [`Conversation`], never in ambient framework state.
//!
//! Handlers return [`BotAction`]s (send text, edit the prompt, send a photo)
//! instead of performing them. A runtime or test harness interprets the
//! actions, so the whole flow is testable without a messaging SDK.
//!
//! # Components
//!
//! - [`conversation`]: the state machine
//! - [`session`]: per-user sessions and the keyed store
//! - [`address`]: address validation into a switch bank
//! - [`callback`]: button payload encoding (`lang_*`, `bits_*`)
//! - [`command`]: slash command classification
//! - [`text`]: localized messages
//! - [`renderer`]: image backend seam
//! - [`error`]: input error types

pub mod action;
pub mod address;
pub mod callback;
pub mod command;
pub mod conversation;
pub mod error;
pub mod event;
pub mod locale;
pub mod renderer;
pub mod session;
pub mod text;
pub mod width;

pub use action::{BotAction, Button, Keyboard};
pub use callback::CallbackData;
pub use command::Command;
pub use conversation::Conversation;
pub use error::{AddressError, CallbackError};
pub use event::{BotEvent, EventKind};
pub use locale::Language;
pub use renderer::{PngRenderer, Renderer};
pub use session::{ConversationState, Session, SessionStore, UserId};
pub use text::Text;
pub use width::BitWidth;

//! Actions produced by the conversation state machine.
//!
//! The state machine never talks to the chat platform. It returns a list of
//! [`BotAction`]s which a driver executes in order.

use crate::{callback::CallbackData, locale::Language, width::BitWidth};

/// Inline button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    /// Text shown on the button.
    pub label: String,
    /// Callback payload sent back when pressed.
    pub payload: String,
}

impl Button {
    /// Button carrying `data`.
    pub fn new(label: impl Into<String>, data: CallbackData) -> Self {
        Self { label: label.into(), payload: data.payload() }
    }
}

/// Rows of inline buttons attached to a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    /// Button rows, top to bottom.
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    /// One row with every language.
    pub fn languages() -> Self {
        let row = Language::ALL
            .into_iter()
            .map(|language| Button::new(language.native_name(), CallbackData::Language(language)))
            .collect();
        Self { rows: vec![row] }
    }

    /// One row with every switch count.
    pub fn widths() -> Self {
        let row = BitWidth::ALL
            .into_iter()
            .map(|width| Button::new(width.to_string(), CallbackData::Width(width)))
            .collect();
        Self { rows: vec![row] }
    }

    /// All buttons, row by row.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }
}

/// Effect requested by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotAction {
    /// Send a new text message.
    SendText {
        /// Message body.
        text: String,
        /// Buttons under the message.
        keyboard: Option<Keyboard>,
    },

    /// Replace the message whose button was pressed.
    EditText {
        /// New message body.
        text: String,
        /// New buttons; `None` removes them.
        keyboard: Option<Keyboard>,
    },

    /// Send a PNG image.
    SendPhoto {
        /// Encoded PNG.
        png: Vec<u8>,
    },

    /// Confirm a button press to the client.
    AcknowledgeCallback,
}

impl BotAction {
    /// Text body of a `SendText` or `EditText`.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::SendText { text, .. } | Self::EditText { text, .. } => Some(text),
            Self::SendPhoto { .. } | Self::AcknowledgeCallback => None,
        }
    }

    /// Keyboard of a `SendText` or `EditText`.
    pub fn keyboard(&self) -> Option<&Keyboard> {
        match self {
            Self::SendText { keyboard, .. } | Self::EditText { keyboard, .. } => keyboard.as_ref(),
            Self::SendPhoto { .. } | Self::AcknowledgeCallback => None,
        }
    }
}

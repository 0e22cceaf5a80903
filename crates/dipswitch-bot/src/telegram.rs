//! Telegram frontend.
//!
//! Long-polls the Bot API through teloxide's dispatcher, converts updates into
//! [`BotEvent`]s and executes the resulting actions with a
//! [`TelegramDriver`] bound to the originating chat.

use std::sync::Arc;

use dipswitch_app::{Driver, Runtime};
use dipswitch_core::{BotEvent, Keyboard};
use teloxide::{
    RequestError,
    payloads::{EditMessageTextSetters, SendMessageSetters},
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, InputFile, Me, MessageId},
};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;

const PHOTO_FILE_NAME: &str = "dip-switch.png";

/// Errors from the Telegram driver.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// A Bot API request failed.
    #[error("telegram request failed: {0}")]
    Request(#[from] RequestError),
}

/// Executes actions for one update.
pub struct TelegramDriver {
    bot: Bot,
    chat_id: ChatId,
    query: Option<CallbackQuery>,
    message_id: Option<MessageId>,
}

impl TelegramDriver {
    /// Driver replying into `chat_id`.
    pub fn for_chat(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id, query: None, message_id: None }
    }

    /// Driver for a button press.
    ///
    /// Edits go to the message carrying the button. When that message is
    /// inaccessible, replies are sent as new messages to its chat, or to the
    /// presser's private chat if Telegram omitted the message entirely.
    pub fn for_callback(bot: Bot, query: CallbackQuery) -> Self {
        let (chat_id, message_id) = match &query.message {
            Some(message) => (message.chat().id, message.regular_message().map(|m| m.id)),
            None => (ChatId::from(query.from.id), None),
        };
        Self { bot, chat_id, query: Some(query), message_id }
    }

    /// Chat replies are sent to.
    pub fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    /// Message that `edit_text` replaces, if it can be edited.
    pub fn editable_message(&self) -> Option<MessageId> {
        self.message_id
    }
}

impl Driver for TelegramDriver {
    type Error = TelegramError;

    async fn send_text(&mut self, text: &str, keyboard: Option<&Keyboard>) -> Result<(), TelegramError> {
        let mut request = self.bot.send_message(self.chat_id, text);
        if let Some(keyboard) = keyboard {
            request = request.reply_markup(markup(keyboard));
        }
        request.await?;
        Ok(())
    }

    async fn edit_text(&mut self, text: &str, keyboard: Option<&Keyboard>) -> Result<(), TelegramError> {
        let Some(message_id) = self.message_id else {
            debug!(chat = %self.chat_id, "no message to edit, sending instead");
            return self.send_text(text, keyboard).await;
        };

        let mut request = self.bot.edit_message_text(self.chat_id, message_id, text);
        if let Some(keyboard) = keyboard {
            request = request.reply_markup(markup(keyboard));
        }
        request.await?;
        Ok(())
    }

    async fn send_photo(&mut self, png: Vec<u8>) -> Result<(), TelegramError> {
        let photo = InputFile::memory(png).file_name(PHOTO_FILE_NAME);
        self.bot.send_photo(self.chat_id, photo).await?;
        Ok(())
    }

    async fn acknowledge(&mut self) -> Result<(), TelegramError> {
        if let Some(query) = &self.query {
            self.bot.answer_callback_query(query.id.clone()).await?;
        }
        Ok(())
    }
}

/// Inline keyboard for `keyboard`.
pub fn markup(keyboard: &Keyboard) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(keyboard.rows.iter().map(|row| {
        row.iter()
            .map(|button| InlineKeyboardButton::callback(button.label.clone(), button.payload.clone()))
    }))
}

async fn on_message(bot: Bot, me: Me, msg: Message, runtime: Arc<Runtime>) -> Result<(), TelegramError> {
    let (Some(user), Some(text)) = (msg.from.as_ref(), msg.text()) else {
        return Ok(());
    };

    let event = match me.user.username.as_deref() {
        Some(username) => BotEvent::message_to(user.id.0, text, username),
        None => BotEvent::message(user.id.0, text),
    };
    let mut driver = TelegramDriver::for_chat(bot, msg.chat.id);
    runtime.dispatch(&event, &mut driver).await
}

async fn on_callback(bot: Bot, query: CallbackQuery, runtime: Arc<Runtime>) -> Result<(), TelegramError> {
    let event = BotEvent::callback(query.from.id.0, query.data.clone().unwrap_or_default());
    let mut driver = TelegramDriver::for_callback(bot, query);
    runtime.dispatch(&event, &mut driver).await
}

/// Serve updates until Ctrl-C.
///
/// The dispatcher resolves the bot's own [`Me`] on startup, so group
/// commands addressed to other bots are ignored.
pub async fn run(config: Config) {
    let bot = Bot::new(config.token);
    let runtime = Arc::new(Runtime::new());

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback));

    info!("polling for updates");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![runtime])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
    info!("dispatcher stopped");
}

#[cfg(test)]
mod tests {
    use teloxide::types::InlineKeyboardButtonKind;

    use super::*;

    fn query(message: Option<serde_json::Value>) -> CallbackQuery {
        let mut json = serde_json::json!({
            "id": "4382",
            "from": { "id": 42, "is_bot": false, "first_name": "Ada" },
            "chat_instance": "-1",
            "data": "bits_8",
        });
        if let Some(message) = message {
            json["message"] = message;
        }
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn inaccessible_message_is_not_edited() {
        let query = query(Some(serde_json::json!({
            "chat": { "id": 77, "type": "private", "first_name": "Bob" },
            "message_id": 7,
            "date": 0,
        })));
        assert!(query.message.as_ref().unwrap().regular_message().is_none());

        let driver = TelegramDriver::for_callback(Bot::new("1:test"), query);
        assert_eq!(driver.chat_id(), ChatId(77));
        assert_eq!(driver.editable_message(), None);
    }

    #[test]
    fn missing_message_replies_privately() {
        let driver = TelegramDriver::for_callback(Bot::new("1:test"), query(None));
        assert_eq!(driver.chat_id(), ChatId(42));
        assert_eq!(driver.editable_message(), None);
    }

    #[test]
    fn keyboard_maps_to_callback_buttons() {
        let markup = markup(&Keyboard::widths());

        assert_eq!(markup.inline_keyboard.len(), 1);
        let row = &markup.inline_keyboard[0];
        let labels: Vec<_> = row.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(labels, ["6", "8", "10", "12"]);
        assert!(matches!(
            &row[3].kind,
            InlineKeyboardButtonKind::CallbackData(payload) if payload == "bits_12"
        ));
    }

    #[test]
    fn language_buttons_carry_codes() {
        let markup = markup(&Keyboard::languages());
        let payloads: Vec<_> = markup.inline_keyboard[0]
            .iter()
            .filter_map(|b| match &b.kind {
                InlineKeyboardButtonKind::CallbackData(payload) => Some(payload.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(payloads, ["lang_ua", "lang_cz"]);
    }
}

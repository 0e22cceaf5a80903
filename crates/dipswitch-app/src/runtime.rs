//! Generic runtime connecting the conversation to a [`Driver`].

use dipswitch_core::{BotAction, BotEvent, Conversation, PngRenderer, Renderer};
use tracing::{Instrument, debug, debug_span};

use crate::Driver;

/// Feeds events through the conversation and executes the resulting actions.
///
/// Shared between concurrently handled events; all mutable state lives in the
/// conversation's session store.
#[derive(Debug, Default)]
pub struct Runtime<R = PngRenderer> {
    conversation: Conversation<R>,
}

impl Runtime {
    /// Runtime with the PNG renderer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: Renderer> Runtime<R> {
    /// Runtime over an existing conversation.
    pub fn with_conversation(conversation: Conversation<R>) -> Self {
        Self { conversation }
    }

    /// Underlying state machine.
    pub fn conversation(&self) -> &Conversation<R> {
        &self.conversation
    }

    /// Handle `event` and execute every action on `driver`, in order.
    ///
    /// # Errors
    ///
    /// Returns the first driver error; later actions are not executed.
    pub async fn dispatch<D: Driver>(&self, event: &BotEvent, driver: &mut D) -> Result<(), D::Error> {
        let actions = self.conversation.handle(event);
        let span = debug_span!("dispatch", user = event.user, actions = actions.len());

        async move {
            for action in actions {
                execute(action, driver).await?;
            }
            Ok(())
        }
        .instrument(span)
        .await
    }
}

async fn execute<D: Driver>(action: BotAction, driver: &mut D) -> Result<(), D::Error> {
    match action {
        BotAction::SendText { text, keyboard } => {
            debug!("send text");
            driver.send_text(&text, keyboard.as_ref()).await
        },
        BotAction::EditText { text, keyboard } => {
            debug!("edit text");
            driver.edit_text(&text, keyboard.as_ref()).await
        },
        BotAction::SendPhoto { png } => {
            debug!(bytes = png.len(), "send photo");
            driver.send_photo(png).await
        },
        BotAction::AcknowledgeCallback => driver.acknowledge().await,
    }
}

//! Driver trait for abstracting chat platform I/O.
//!
//! The [`Driver`] trait decouples the runtime from a specific messaging SDK.
//! Each frontend implements the trait for one inbound event, while the
//! generic [`crate::Runtime`] decides what to send.

use std::future::Future;

use dipswitch_core::Keyboard;

/// Response sink for one inbound event.
///
/// A driver is bound to the chat the event came from and, for button
/// presses, to the message that carried the button.
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send a new text message, optionally with inline buttons.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform rejects the message.
    fn send_text(
        &mut self,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Replace the text and buttons of the message whose button was pressed.
    ///
    /// # Errors
    ///
    /// Returns an error if the edit fails.
    fn edit_text(
        &mut self,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Send a PNG image.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload fails.
    fn send_photo(&mut self, png: Vec<u8>) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Confirm the button press to the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform rejects the answer.
    fn acknowledge(&mut self) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

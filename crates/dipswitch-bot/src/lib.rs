//! Telegram bot for DIP switch settings
//!
//! A thin shell over [`dipswitch_app::Driver`] that talks to the Telegram Bot
//! API. All conversation logic lives in [`dipswitch_core`]; this crate only
//! moves updates in and actions out.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod telegram;

pub use config::{Args, Config, ConfigError};
pub use dipswitch_app::{Driver, Runtime};
pub use telegram::{TelegramDriver, TelegramError};

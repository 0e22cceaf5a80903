//! Application layer for the DIP switch bot
//!
//! Generic runtime that runs the pure conversation state machine and hands
//! its actions to a platform driver, so the same orchestration runs in
//! production and in tests.
//!
//! # Components
//!
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Event dispatch over a Driver

mod driver;
mod runtime;

pub use driver::Driver;
pub use runtime::Runtime;

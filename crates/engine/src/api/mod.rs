//! API layer - host entry points.
//!
//! The render hook builds panels; user actions come back as commands.

pub mod commands;
pub mod console_input;
pub mod hooks;

pub use commands::{CommandHandler, CommandOutcome, SheetCommand};
pub use console_input::ConsoleInput;
pub use hooks::{RenderSubscription, SheetHooks};

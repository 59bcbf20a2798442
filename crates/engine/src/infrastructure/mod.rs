//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod console;
pub mod localization;
pub mod persistence;
pub mod ports;
pub mod settings;

//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases orchestrate across entity modules to fulfill user stories.

pub mod loadouts;
pub mod sheet;

// Re-export main types
pub use loadouts::LoadoutUseCases;
pub use sheet::RenderLoadoutPanels;

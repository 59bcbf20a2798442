//! Spellkits Engine library.
//!
//! Saved spell-preparation loadouts for spellcasting entries on a character
//! sheet.
//!
//! ## Structure
//!
//! - `entities/` - Entity modules wrapping port operations
//! - `use_cases/` - User story orchestration across entities
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - Render hook and user command entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod use_cases;

/// End-to-end flows over the JSON actor store.
#[cfg(test)]
mod e2e_tests;

pub use app::App;

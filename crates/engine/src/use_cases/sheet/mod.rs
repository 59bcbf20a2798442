//! Sheet use cases.
//!
//! Turns a rendered character sheet into loadout panels, one per spellcasting
//! entry that supports preparation.

mod panel;
mod render_panels;

pub use panel::{discover_entries, wire_entry, LoadoutOption, LoadoutPanel, ToggleControl};
pub use render_panels::RenderLoadoutPanels;

//! Render loadout panels use case.

use std::sync::Arc;

use crate::entities::LoadoutStore;
use crate::infrastructure::ports::{LocalizationPort, RenderedSheet};

use super::panel::{discover_entries, wire_entry, LoadoutPanel};

/// Builds the panels for every qualifying entry of a freshly rendered sheet.
pub struct RenderLoadoutPanels {
    store: Arc<LoadoutStore>,
    localization: Arc<dyn LocalizationPort>,
}

impl RenderLoadoutPanels {
    pub fn new(store: Arc<LoadoutStore>, localization: Arc<dyn LocalizationPort>) -> Self {
        Self {
            store,
            localization,
        }
    }

    /// Entries whose data cannot be read are left without controls; the rest
    /// of the sheet still gets wired.
    pub async fn execute(&self, sheet: &RenderedSheet) -> Vec<LoadoutPanel> {
        let mut panels = Vec::new();

        for entry in discover_entries(sheet) {
            let live = match self.store.current_slots(&entry).await {
                Ok(Some(live)) => live,
                Ok(None) => {
                    tracing::warn!(entry = %entry, "Rendered entry has no document, skipping");
                    continue;
                }
                Err(e) => {
                    tracing::warn!(entry = %entry, error = %e, "Failed to read entry slots, skipping");
                    continue;
                }
            };

            let loadouts = match self.store.loadouts(&entry).await {
                Ok(loadouts) => loadouts,
                Err(e) => {
                    tracing::warn!(entry = %entry, error = %e, "Failed to read saved loadouts, skipping");
                    continue;
                }
            };

            let panel = wire_entry(entry, &live, &loadouts, self.localization.as_ref());
            tracing::debug!(
                entry = %panel.entry,
                selection = %panel.selection,
                loadout_count = loadouts.len(),
                "Wired loadout panel"
            );
            panels.push(panel);
        }

        panels
    }
}

//! Loadout panel view model.
//!
//! Everything the host needs to draw the controls under one spellcasting
//! entry. Built from scratch on every render; nothing here is retained.

use serde::Serialize;
use spellkits_domain::{match_loadout, LoadoutSet, PanelState, Selection, SlotState};

use crate::infrastructure::localization::keys;
use crate::infrastructure::ports::{EntryRef, LocalizationPort, RenderedSheet};

/// Arrow control that expands or collapses the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleControl {
    pub arrow: &'static str,
    pub tooltip: String,
}

impl ToggleControl {
    pub fn for_state(state: PanelState, localization: &dyn LocalizationPort) -> Self {
        let tooltip_key = if state.is_expanded() {
            keys::TOGGLE_HIDE
        } else {
            keys::TOGGLE_SHOW
        };
        Self {
            arrow: state.arrow(),
            tooltip: localization.localize(tooltip_key),
        }
    }
}

/// One dropdown option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadoutOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadoutPanel {
    pub entry: EntryRef,
    pub state: PanelState,
    pub toggle: ToggleControl,
    /// Sentinel first, then saved loadouts in stored order.
    pub options: Vec<LoadoutOption>,
    pub selection: Selection,
    pub name_placeholder: String,
    pub save_tooltip: String,
    pub delete_tooltip: String,
    pub delete_enabled: bool,
}

impl LoadoutPanel {
    /// Flip the panel to `state` without re-wiring it.
    pub fn set_state(&mut self, state: PanelState, toggle: ToggleControl) {
        self.state = state;
        self.toggle = toggle;
    }
}

/// Entries of a rendered sheet that get loadout controls.
///
/// Only list items that carry an entry id and expose the prepare-spells
/// control qualify; everything else is skipped silently.
pub fn discover_entries(sheet: &RenderedSheet) -> Vec<EntryRef> {
    sheet
        .entries
        .iter()
        .filter(|entry| entry.has_prepare_control)
        .filter_map(|entry| entry.entry_id.clone())
        .map(|entry_id| EntryRef::new(sheet.actor_id.clone(), entry_id))
        .collect()
}

/// Build the panel for one entry.
///
/// The initial selection is whatever saved loadout the live state matches.
/// Panels always start collapsed.
pub fn wire_entry(
    entry: EntryRef,
    live: &SlotState,
    loadouts: &LoadoutSet,
    localization: &dyn LocalizationPort,
) -> LoadoutPanel {
    let selection = match_loadout(live, loadouts);
    let state = PanelState::default();

    let mut options = Vec::with_capacity(loadouts.len() + 1);
    options.push(LoadoutOption {
        value: Selection::Custom.as_str().to_string(),
        label: localization.localize(keys::CUSTOM_OPTION),
        selected: selection.is_custom(),
    });
    options.extend(loadouts.names().map(|name| LoadoutOption {
        value: name.as_str().to_string(),
        label: name.as_str().to_string(),
        selected: selection.loadout() == Some(name),
    }));

    LoadoutPanel {
        entry,
        state,
        toggle: ToggleControl::for_state(state, localization),
        options,
        delete_enabled: !selection.is_custom(),
        selection,
        name_placeholder: localization.localize(keys::NAME_PLACEHOLDER),
        save_tooltip: localization.localize(keys::SAVE_TOOLTIP),
        delete_tooltip: localization.localize(keys::DELETE_TOOLTIP),
    }
}

//! Static localization table.
//!
//! Stands in for the host's i18n lookup. Unknown keys come back unchanged,
//! matching how the host behaves for missing translations.

use std::collections::HashMap;

use crate::infrastructure::ports::LocalizationPort;

/// Localization keys used by the loadout controls.
pub mod keys {
    pub const CUSTOM_OPTION: &str = "SPELLKITS.Select.Custom";
    pub const TOGGLE_SHOW: &str = "SPELLKITS.Toggle.Show";
    pub const TOGGLE_HIDE: &str = "SPELLKITS.Toggle.Hide";
    pub const NAME_PLACEHOLDER: &str = "SPELLKITS.Input.Placeholder";
    pub const SAVE_TOOLTIP: &str = "SPELLKITS.Save.Tooltip";
    pub const DELETE_TOOLTIP: &str = "SPELLKITS.Delete.Tooltip";
    pub const OVERWRITE_TITLE: &str = "SPELLKITS.Overwrite.Title";
    pub const OVERWRITE_MESSAGE: &str = "SPELLKITS.Overwrite.Message";
    pub const DELETE_TITLE: &str = "SPELLKITS.Delete.Title";
    pub const DELETE_MESSAGE: &str = "SPELLKITS.Delete.Message";
    pub const SAVED: &str = "SPELLKITS.Notify.Saved";
    pub const APPLIED: &str = "SPELLKITS.Notify.Applied";
    pub const DELETED: &str = "SPELLKITS.Notify.Deleted";
    pub const ERROR_EMPTY_NAME: &str = "SPELLKITS.Error.EmptyName";
    pub const ERROR_NAME_LENGTH: &str = "SPELLKITS.Error.NameLength";
    pub const ERROR_RESERVED_NAME: &str = "SPELLKITS.Error.ReservedName";
    pub const ERROR_ENTRY_MISSING: &str = "SPELLKITS.Error.EntryMissing";
    pub const ERROR_STORAGE: &str = "SPELLKITS.Error.Storage";
}

const ENGLISH: &[(&str, &str)] = &[
    (keys::CUSTOM_OPTION, "custom"),
    (keys::TOGGLE_SHOW, "Show Spellkits Loadouts"),
    (keys::TOGGLE_HIDE, "Hide Spellkits Loadouts"),
    (keys::NAME_PLACEHOLDER, "Spellkit Loadout Name"),
    (keys::SAVE_TOOLTIP, "Save Spellkit Loadout"),
    (keys::DELETE_TOOLTIP, "Delete Spellkit Loadout"),
    (keys::OVERWRITE_TITLE, "Overwrite Spellkit Loadout"),
    (
        keys::OVERWRITE_MESSAGE,
        "A loadout named {name} already exists. Overwrite it with the current preparation?",
    ),
    (keys::DELETE_TITLE, "Delete Spellkit Loadout"),
    (keys::DELETE_MESSAGE, "Delete the loadout {name}? This cannot be undone."),
    (keys::SAVED, "Saved loadout {name}."),
    (keys::APPLIED, "Prepared loadout {name}."),
    (keys::DELETED, "Deleted loadout {name}."),
    (keys::ERROR_EMPTY_NAME, "Enter a name for the loadout."),
    (
        keys::ERROR_NAME_LENGTH,
        "Loadout names must be between {min} and {max} characters.",
    ),
    (
        keys::ERROR_RESERVED_NAME,
        "{name} is reserved and cannot be used as a loadout name.",
    ),
    (keys::ERROR_ENTRY_MISSING, "The spellcasting entry could not be found."),
    (keys::ERROR_STORAGE, "The loadout could not be stored."),
];

/// In-memory key to string table.
#[derive(Debug, Clone)]
pub struct StaticLocalizer {
    entries: HashMap<String, String>,
}

impl StaticLocalizer {
    /// English defaults for every key in [`keys`].
    pub fn english() -> Self {
        Self::from_pairs(ENGLISH.iter().copied())
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }

    /// Override or add a single entry.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl Default for StaticLocalizer {
    fn default() -> Self {
        Self::english()
    }
}

impl LocalizationPort for StaticLocalizer {
    fn localize(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::format_localized;

    #[test]
    fn english_covers_labels_from_the_sheet() {
        let l10n = StaticLocalizer::english();
        assert_eq!(l10n.localize(keys::TOGGLE_SHOW), "Show Spellkits Loadouts");
        assert_eq!(l10n.localize(keys::NAME_PLACEHOLDER), "Spellkit Loadout Name");
        assert_eq!(l10n.localize(keys::SAVE_TOOLTIP), "Save Spellkit Loadout");
    }

    #[test]
    fn unknown_key_is_returned_verbatim() {
        let l10n = StaticLocalizer::english();
        assert_eq!(l10n.localize("SPELLKITS.Nope"), "SPELLKITS.Nope");
    }

    #[test]
    fn overrides_replace_defaults() {
        let l10n = StaticLocalizer::english().with_entry(keys::CUSTOM_OPTION, "eigene");
        assert_eq!(l10n.localize(keys::CUSTOM_OPTION), "eigene");
    }

    #[test]
    fn formats_name_length_message() {
        let l10n = StaticLocalizer::english();
        let text = format_localized(&l10n, keys::ERROR_NAME_LENGTH, &[("min", "3"), ("max", "30")]);
        assert_eq!(text, "Loadout names must be between 3 and 30 characters.");
    }
}

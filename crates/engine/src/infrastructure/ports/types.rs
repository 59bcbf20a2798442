//! Helper types for port operations.

use std::fmt;

use serde::{Deserialize, Serialize};
use spellkits_domain::{ActorId, DomainError, EntryId, LoadoutName};

// =============================================================================
// Document addressing
// =============================================================================

/// Flag namespace used when none is configured.
pub const DEFAULT_MODULE_ID: &str = "pf2e-spellkits";

/// Namespace under which this extension stores flags on host documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleId(String);

impl ModuleId {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Module id cannot be empty"));
        }
        if trimmed.contains('.') {
            return Err(DomainError::validation(
                "Module id cannot contain '.' (flag paths are dot separated)",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ModuleId {
    fn default() -> Self {
        Self(DEFAULT_MODULE_ID.to_string())
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ModuleId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModuleId> for String {
    fn from(value: ModuleId) -> String {
        value.0
    }
}

/// One spellcasting entry embedded in one actor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryRef {
    pub actor_id: ActorId,
    pub entry_id: EntryId,
}

impl EntryRef {
    pub fn new(actor_id: ActorId, entry_id: EntryId) -> Self {
        Self { actor_id, entry_id }
    }
}

impl fmt::Display for EntryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.actor_id, self.entry_id)
    }
}

/// Address of the loadout mapping of one entry inside the module's flags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlagKey {
    pub module_id: ModuleId,
    pub entry: EntryRef,
}

impl FlagKey {
    pub fn new(module_id: ModuleId, entry: EntryRef) -> Self {
        Self { module_id, entry }
    }

    /// Dot path of the whole mapping, relative to the document's `flags`.
    pub fn path(&self) -> String {
        format!("{}.{}", self.module_id, self.entry.entry_id)
    }

    /// Dot path of one named loadout.
    pub fn loadout_path(&self, name: &LoadoutName) -> String {
        format!("{}.{}", self.path(), name)
    }
}

// =============================================================================
// Rendered sheet (host render hook payload)
// =============================================================================

/// Sheet classes the host renders. Only one kind is hooked at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetKind {
    Character,
    Creature,
}

/// A spellcasting list item found in the rendered sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedEntry {
    /// Entry id from the list item, if it carried one.
    pub entry_id: Option<EntryId>,
    /// Whether the item exposes a "prepare spells" control.
    pub has_prepare_control: bool,
}

/// What the host hands over after rendering a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedSheet {
    pub kind: SheetKind,
    pub actor_id: ActorId,
    pub entries: Vec<RenderedEntry>,
}

// =============================================================================
// Dialog / notification types
// =============================================================================

/// Icon shown on a confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmIcon {
    /// Overwriting existing data.
    Overwrite,
    /// Removing data.
    Delete,
}

impl ConfirmIcon {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Overwrite => "fa-solid fa-floppy-disk",
            Self::Delete => "fa-solid fa-trash",
        }
    }
}

/// A yes/no question put to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub icon: ConfirmIcon,
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> EntryRef {
        EntryRef::new(ActorId::new("actor1").unwrap(), EntryId::new("entry1").unwrap())
    }

    #[test]
    fn flag_paths_are_module_scoped() {
        let key = FlagKey::new(ModuleId::new("pf2e-spellkits").unwrap(), entry());
        let name = LoadoutName::from_stored("burst").unwrap();
        assert_eq!(key.path(), "pf2e-spellkits.entry1");
        assert_eq!(key.loadout_path(&name), "pf2e-spellkits.entry1.burst");
    }

    #[test]
    fn module_id_rejects_dots_and_blank() {
        assert!(ModuleId::new("a.b").is_err());
        assert!(ModuleId::new("  ").is_err());
    }
}

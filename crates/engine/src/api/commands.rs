//! User command dispatch.
//!
//! Every control on a loadout panel maps to one [`SheetCommand`]. The handler
//! runs the matching use case, turns failures into user notifications, and
//! never lets an error escape past the command that caused it.

use std::sync::Arc;

use serde::Serialize;
use spellkits_domain::{LoadoutNameError, PanelState, Selection};

use crate::infrastructure::localization::keys;
use crate::infrastructure::ports::{
    format_localized, EntryRef, LocalizationPort, NotificationLevel, NotificationPort,
};
use crate::use_cases::loadouts::{
    ApplyOutcome, DeleteOutcome, LoadoutError, LoadoutUseCases, SaveOutcome,
};
use crate::use_cases::sheet::ToggleControl;

/// A user action on one entry's loadout panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetCommand {
    /// Dropdown selection changed.
    Apply { entry: EntryRef, selection: Selection },
    /// Save control clicked with the text field's content.
    Save { entry: EntryRef, name: String },
    /// Delete control clicked with the dropdown's current value.
    Delete { entry: EntryRef, selection: Selection },
    /// Arrow clicked while the panel was in `state`.
    Toggle { entry: EntryRef, state: PanelState },
}

impl SheetCommand {
    pub fn entry(&self) -> &EntryRef {
        match self {
            Self::Apply { entry, .. }
            | Self::Save { entry, .. }
            | Self::Delete { entry, .. }
            | Self::Toggle { entry, .. } => entry,
        }
    }
}

/// What the host should do after a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommandOutcome {
    /// Persisted data changed; the dropdown should show `selection`.
    Changed { entry: EntryRef, selection: Selection },
    /// Panel visibility flipped.
    Toggled {
        entry: EntryRef,
        state: PanelState,
        toggle: ToggleControl,
    },
    /// Nothing happened (sentinel selected, declined, or stale).
    NoOp,
    /// The command failed and the user was notified.
    Rejected,
}

pub struct CommandHandler {
    loadouts: LoadoutUseCases,
    notifier: Arc<dyn NotificationPort>,
    localization: Arc<dyn LocalizationPort>,
}

impl CommandHandler {
    pub fn new(
        loadouts: LoadoutUseCases,
        notifier: Arc<dyn NotificationPort>,
        localization: Arc<dyn LocalizationPort>,
    ) -> Self {
        Self {
            loadouts,
            notifier,
            localization,
        }
    }

    pub async fn handle(&self, command: SheetCommand) -> CommandOutcome {
        tracing::debug!(
            actor_id = %command.entry().actor_id,
            entry_id = %command.entry().entry_id,
            "Handling sheet command"
        );
        match command {
            SheetCommand::Apply { entry, selection } => self.on_apply(entry, selection).await,
            SheetCommand::Save { entry, name } => self.on_save(entry, &name).await,
            SheetCommand::Delete { entry, selection } => self.on_delete(entry, selection).await,
            SheetCommand::Toggle { entry, state } => self.on_toggle(entry, state),
        }
    }

    pub async fn on_apply(&self, entry: EntryRef, selection: Selection) -> CommandOutcome {
        match self.loadouts.apply.execute(&entry, &selection).await {
            Ok(ApplyOutcome::Applied { name, .. }) => {
                self.notify_named(NotificationLevel::Info, keys::APPLIED, name.as_str());
                CommandOutcome::Changed {
                    entry,
                    selection: Selection::Loadout(name),
                }
            }
            Ok(ApplyOutcome::Custom | ApplyOutcome::Stale { .. }) => CommandOutcome::NoOp,
            Err(e) => self.reject(&entry, e),
        }
    }

    pub async fn on_save(&self, entry: EntryRef, raw_name: &str) -> CommandOutcome {
        match self.loadouts.save.execute(&entry, raw_name).await {
            Ok(SaveOutcome::Saved { name, .. }) => {
                self.notify_named(NotificationLevel::Info, keys::SAVED, name.as_str());
                CommandOutcome::Changed {
                    entry,
                    selection: Selection::Loadout(name),
                }
            }
            Ok(SaveOutcome::Declined { .. }) => CommandOutcome::NoOp,
            Err(e) => self.reject(&entry, e),
        }
    }

    pub async fn on_delete(&self, entry: EntryRef, selection: Selection) -> CommandOutcome {
        match self.loadouts.delete.execute(&entry, &selection).await {
            Ok(DeleteOutcome::Deleted { name }) => {
                self.notify_named(NotificationLevel::Info, keys::DELETED, name.as_str());
                CommandOutcome::Changed {
                    entry,
                    selection: Selection::Custom,
                }
            }
            Ok(DeleteOutcome::Custom | DeleteOutcome::Declined { .. } | DeleteOutcome::Stale { .. }) => {
                CommandOutcome::NoOp
            }
            Err(e) => self.reject(&entry, e),
        }
    }

    pub fn on_toggle(&self, entry: EntryRef, state: PanelState) -> CommandOutcome {
        let state = state.toggled();
        CommandOutcome::Toggled {
            toggle: ToggleControl::for_state(state, self.localization.as_ref()),
            entry,
            state,
        }
    }

    fn notify_named(&self, level: NotificationLevel, key: &str, name: &str) {
        let message = format_localized(self.localization.as_ref(), key, &[("name", name)]);
        self.notifier.notify(level, &message);
    }

    fn reject(&self, entry: &EntryRef, error: LoadoutError) -> CommandOutcome {
        let l10n = self.localization.as_ref();
        let (level, message) = match &error {
            LoadoutError::InvalidName(LoadoutNameError::Empty) => (
                NotificationLevel::Warning,
                l10n.localize(keys::ERROR_EMPTY_NAME),
            ),
            LoadoutError::InvalidName(LoadoutNameError::InvalidLength { min, max, .. }) => {
                let (min, max) = (min.to_string(), max.to_string());
                (
                    NotificationLevel::Error,
                    format_localized(
                        l10n,
                        keys::ERROR_NAME_LENGTH,
                        &[("min", min.as_str()), ("max", max.as_str())],
                    ),
                )
            }
            LoadoutError::InvalidName(LoadoutNameError::Reserved(name)) => (
                NotificationLevel::Error,
                format_localized(l10n, keys::ERROR_RESERVED_NAME, &[("name", name.as_str())]),
            ),
            // Sanitized input never carries disallowed characters.
            LoadoutError::InvalidName(other @ LoadoutNameError::InvalidCharacters(_)) => {
                (NotificationLevel::Error, other.to_string())
            }
            LoadoutError::EntryNotFound(_) => (
                NotificationLevel::Error,
                l10n.localize(keys::ERROR_ENTRY_MISSING),
            ),
            LoadoutError::Repo(_) => (
                NotificationLevel::Error,
                l10n.localize(keys::ERROR_STORAGE),
            ),
        };

        match &error {
            LoadoutError::InvalidName(_) => {
                tracing::warn!(entry = %entry, error = %error, "Loadout command rejected");
            }
            _ => {
                tracing::error!(entry = %entry, error = %error, "Loadout command failed");
            }
        }

        self.notifier.notify(level, &message);
        CommandOutcome::Rejected
    }
}

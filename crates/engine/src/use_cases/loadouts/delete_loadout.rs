//! Delete loadout use case.

use std::sync::Arc;

use spellkits_domain::{LoadoutName, Selection};

use crate::entities::LoadoutStore;
use crate::infrastructure::localization::keys;
use crate::infrastructure::ports::{
    format_localized, ConfirmIcon, ConfirmPort, ConfirmRequest, EntryRef, LocalizationPort,
};

use super::error::LoadoutError;
use super::types::DeleteOutcome;

/// Removes the selected loadout after the user confirms.
pub struct DeleteLoadout {
    store: Arc<LoadoutStore>,
    confirm: Arc<dyn ConfirmPort>,
    localization: Arc<dyn LocalizationPort>,
}

impl DeleteLoadout {
    pub fn new(
        store: Arc<LoadoutStore>,
        confirm: Arc<dyn ConfirmPort>,
        localization: Arc<dyn LocalizationPort>,
    ) -> Self {
        Self {
            store,
            confirm,
            localization,
        }
    }

    /// Execute the delete loadout use case.
    ///
    /// No prompt is shown for the sentinel or for a loadout that is already
    /// gone. The live preparation is never touched.
    pub async fn execute(
        &self,
        entry: &EntryRef,
        selection: &Selection,
    ) -> Result<DeleteOutcome, LoadoutError> {
        let Some(name) = selection.loadout() else {
            return Ok(DeleteOutcome::Custom);
        };

        let loadouts = self.store.loadouts(entry).await?;
        if !loadouts.contains(name.as_str()) {
            tracing::debug!(
                entry = %entry,
                loadout = %name,
                "Selected loadout no longer exists, nothing deleted"
            );
            return Ok(DeleteOutcome::Stale { name: name.clone() });
        }

        if !self.confirm_delete(name).await {
            return Ok(DeleteOutcome::Declined { name: name.clone() });
        }

        self.store.remove(entry, name).await?;

        tracing::info!(entry = %entry, loadout = %name, "Deleted spellkit loadout");

        Ok(DeleteOutcome::Deleted { name: name.clone() })
    }

    async fn confirm_delete(&self, name: &LoadoutName) -> bool {
        let request = ConfirmRequest {
            title: self.localization.localize(keys::DELETE_TITLE),
            message: format_localized(
                self.localization.as_ref(),
                keys::DELETE_MESSAGE,
                &[("name", name.as_str())],
            ),
            icon: ConfirmIcon::Delete,
        };
        self.confirm.confirm(request).await
    }
}

//! Apply loadout use case.

use std::sync::Arc;

use spellkits_domain::Selection;

use crate::entities::LoadoutStore;
use crate::infrastructure::ports::EntryRef;

use super::error::LoadoutError;
use super::types::ApplyOutcome;

/// Writes a stored snapshot back onto the entry's live slots.
pub struct ApplyLoadout {
    store: Arc<LoadoutStore>,
}

impl ApplyLoadout {
    pub fn new(store: Arc<LoadoutStore>) -> Self {
        Self { store }
    }

    /// Execute the apply loadout use case.
    ///
    /// Selecting the sentinel, or a loadout deleted since the sheet was
    /// rendered, leaves the entry untouched.
    pub async fn execute(
        &self,
        entry: &EntryRef,
        selection: &Selection,
    ) -> Result<ApplyOutcome, LoadoutError> {
        let Some(name) = selection.loadout() else {
            return Ok(ApplyOutcome::Custom);
        };

        let loadouts = self.store.loadouts(entry).await?;
        let Some(slots) = loadouts.get(name.as_str()).cloned() else {
            tracing::debug!(
                entry = %entry,
                loadout = %name,
                "Selected loadout no longer exists, nothing applied"
            );
            return Ok(ApplyOutcome::Stale { name: name.clone() });
        };

        self.store.restore_slots(entry, &slots).await?;

        tracing::info!(
            entry = %entry,
            loadout = %name,
            slot_count = slots.len(),
            "Applied spellkit loadout"
        );

        Ok(ApplyOutcome::Applied {
            name: name.clone(),
            slots,
        })
    }
}

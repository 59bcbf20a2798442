//! Loadout store entity module.
//!
//! Scopes the entry repository to this extension's flag namespace so callers
//! never build flag keys by hand.

use std::sync::Arc;

use spellkits_domain::{LoadoutName, LoadoutSet, SlotState};

use crate::infrastructure::ports::{
    EntryRef, FlagKey, ModuleId, RepoError, SpellcastingEntryRepo,
};

/// Loadout store entity - per-entry loadout flags plus live slot access.
pub struct LoadoutStore {
    repo: Arc<dyn SpellcastingEntryRepo>,
    module_id: ModuleId,
}

impl LoadoutStore {
    pub fn new(repo: Arc<dyn SpellcastingEntryRepo>, module_id: ModuleId) -> Self {
        Self { repo, module_id }
    }

    fn key(&self, entry: &EntryRef) -> FlagKey {
        FlagKey::new(self.module_id.clone(), entry.clone())
    }

    /// Live `system.slots` of the entry, `None` if the entry is gone.
    pub async fn current_slots(&self, entry: &EntryRef) -> Result<Option<SlotState>, RepoError> {
        self.repo.get_slots(entry).await
    }

    /// Overwrite the entry's live slots with a stored snapshot.
    pub async fn restore_slots(&self, entry: &EntryRef, slots: &SlotState) -> Result<(), RepoError> {
        self.repo.update_slots(entry, slots).await
    }

    /// All loadouts saved for the entry.
    pub async fn loadouts(&self, entry: &EntryRef) -> Result<LoadoutSet, RepoError> {
        self.repo.get_loadouts(&self.key(entry)).await
    }

    /// Create or overwrite one loadout.
    pub async fn save(
        &self,
        entry: &EntryRef,
        name: &LoadoutName,
        slots: &SlotState,
    ) -> Result<(), RepoError> {
        self.repo.set_loadout(&self.key(entry), name, slots).await
    }

    /// Remove one loadout.
    pub async fn remove(&self, entry: &EntryRef, name: &LoadoutName) -> Result<(), RepoError> {
        self.repo.unset_loadout(&self.key(entry), name).await
    }
}

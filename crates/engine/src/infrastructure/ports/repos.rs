//! Document store port for spellcasting entries.

use async_trait::async_trait;
use spellkits_domain::{LoadoutName, LoadoutSet, SlotState};

use super::error::RepoError;
use super::types::{EntryRef, FlagKey};

/// Read and write access to the host's spellcasting-entry documents.
///
/// Every write is a single atomic request against the owning document; the
/// store never applies partial updates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpellcastingEntryRepo: Send + Sync {
    /// Current `system.slots` of the entry, `None` if the entry does not exist.
    async fn get_slots(&self, entry: &EntryRef) -> Result<Option<SlotState>, RepoError>;

    /// Replace `system.slots` wholesale.
    async fn update_slots(&self, entry: &EntryRef, slots: &SlotState) -> Result<(), RepoError>;

    /// Saved loadouts of the entry; empty when none were ever saved.
    async fn get_loadouts(&self, key: &FlagKey) -> Result<LoadoutSet, RepoError>;

    /// Set one named flag to a snapshot (create or overwrite).
    async fn set_loadout(
        &self,
        key: &FlagKey,
        name: &LoadoutName,
        slots: &SlotState,
    ) -> Result<(), RepoError>;

    /// Unset one named flag.
    async fn unset_loadout(&self, key: &FlagKey, name: &LoadoutName) -> Result<(), RepoError>;
}

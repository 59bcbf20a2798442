//! Save loadout use case.
//!
//! Snapshots the entry's current preparation under a user-supplied name.

use std::sync::Arc;

use spellkits_domain::{LoadoutName, NameBounds};

use crate::entities::LoadoutStore;
use crate::infrastructure::localization::keys;
use crate::infrastructure::ports::{
    format_localized, ConfirmIcon, ConfirmPort, ConfirmRequest, EntryRef, LocalizationPort,
};

use super::error::LoadoutError;
use super::types::SaveOutcome;

/// Save loadout use case.
///
/// Orchestrates: name validation, current-state snapshot, overwrite
/// confirmation, single flag write.
pub struct SaveLoadout {
    store: Arc<LoadoutStore>,
    confirm: Arc<dyn ConfirmPort>,
    localization: Arc<dyn LocalizationPort>,
    bounds: NameBounds,
}

impl SaveLoadout {
    pub fn new(
        store: Arc<LoadoutStore>,
        confirm: Arc<dyn ConfirmPort>,
        localization: Arc<dyn LocalizationPort>,
        bounds: NameBounds,
    ) -> Self {
        Self {
            store,
            confirm,
            localization,
            bounds,
        }
    }

    /// Execute the save loadout use case.
    ///
    /// # Arguments
    /// * `entry` - The spellcasting entry whose preparation is captured
    /// * `raw_name` - Name as typed by the user (trimmed and sanitized here)
    ///
    /// # Returns
    /// * `Ok(SaveOutcome::Saved)` - Snapshot stored under the sanitized name
    /// * `Ok(SaveOutcome::Declined)` - Name taken and overwrite was declined
    /// * `Err(LoadoutError)` - Name rejected, entry missing, or store failure
    pub async fn execute(
        &self,
        entry: &EntryRef,
        raw_name: &str,
    ) -> Result<SaveOutcome, LoadoutError> {
        let name = LoadoutName::parse(raw_name, self.bounds)?;

        let slots = self
            .store
            .current_slots(entry)
            .await?
            .ok_or_else(|| LoadoutError::EntryNotFound(entry.clone()))?;

        let existing = self.store.loadouts(entry).await?;
        let overwritten = existing.contains(name.as_str());

        if overwritten && !self.confirm_overwrite(&name).await {
            tracing::debug!(
                entry = %entry,
                loadout = %name,
                "Overwrite declined, loadout left unchanged"
            );
            return Ok(SaveOutcome::Declined { name });
        }

        self.store.save(entry, &name, &slots).await?;

        tracing::info!(
            entry = %entry,
            loadout = %name,
            overwritten,
            slot_count = slots.len(),
            "Saved spellkit loadout"
        );

        Ok(SaveOutcome::Saved { name, overwritten })
    }

    async fn confirm_overwrite(&self, name: &LoadoutName) -> bool {
        let request = ConfirmRequest {
            title: self.localization.localize(keys::OVERWRITE_TITLE),
            message: format_localized(
                self.localization.as_ref(),
                keys::OVERWRITE_MESSAGE,
                &[("name", name.as_str())],
            ),
            icon: ConfirmIcon::Overwrite,
        };
        self.confirm.confirm(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::localization::StaticLocalizer;
    use crate::infrastructure::ports::{
        MockConfirmPort, MockSpellcastingEntryRepo, ModuleId, RepoError,
    };
    use spellkits_domain::{ActorId, EntryId, LoadoutNameError, LoadoutSet, SlotState, SpellSlot};

    fn entry() -> EntryRef {
        EntryRef::new(ActorId::new("actor1").unwrap(), EntryId::new("entry1").unwrap())
    }

    fn state(ids: &[&str]) -> SlotState {
        SlotState::new().with_slot(
            "slot1",
            SpellSlot::from_spell_ids(ids.iter().copied().map(Some)),
        )
    }

    fn existing(name: &str) -> LoadoutSet {
        LoadoutSet::new().with_loadout(LoadoutName::from_stored(name).unwrap(), state(&["old"]))
    }

    fn use_case(repo: MockSpellcastingEntryRepo, confirm: MockConfirmPort) -> SaveLoadout {
        let store = LoadoutStore::new(Arc::new(repo), ModuleId::default());
        SaveLoadout::new(
            Arc::new(store),
            Arc::new(confirm),
            Arc::new(StaticLocalizer::english()),
            NameBounds::default(),
        )
    }

    #[tokio::test]
    async fn when_name_too_short_returns_error_without_touching_store() {
        let use_case = use_case(MockSpellcastingEntryRepo::new(), MockConfirmPort::new());

        let result = use_case.execute(&entry(), "ab").await;

        assert!(matches!(
            result,
            Err(LoadoutError::InvalidName(LoadoutNameError::InvalidLength { length: 2, .. }))
        ));
    }

    #[tokio::test]
    async fn when_name_too_short_and_colliding_still_length_error() {
        let mut repo = MockSpellcastingEntryRepo::new();
        repo.expect_get_loadouts().returning(|_| Ok(existing("ab")));
        let use_case = use_case(repo, MockConfirmPort::new());

        let result = use_case.execute(&entry(), "ab").await;

        assert!(matches!(
            result,
            Err(LoadoutError::InvalidName(LoadoutNameError::InvalidLength { .. }))
        ));
    }

    #[tokio::test]
    async fn when_name_reserved_returns_error() {
        let use_case = use_case(MockSpellcastingEntryRepo::new(), MockConfirmPort::new());

        let result = use_case.execute(&entry(), "custom").await;

        assert!(matches!(
            result,
            Err(LoadoutError::InvalidName(LoadoutNameError::Reserved(_)))
        ));
    }

    #[tokio::test]
    async fn when_name_blank_returns_empty_error() {
        let use_case = use_case(MockSpellcastingEntryRepo::new(), MockConfirmPort::new());

        let result = use_case.execute(&entry(), "   ").await;

        assert!(matches!(
            result,
            Err(LoadoutError::InvalidName(LoadoutNameError::Empty))
        ));
    }

    #[tokio::test]
    async fn when_entry_missing_returns_error() {
        let mut repo = MockSpellcastingEntryRepo::new();
        repo.expect_get_slots().returning(|_| Ok(None));
        let use_case = use_case(repo, MockConfirmPort::new());

        let result = use_case.execute(&entry(), "fireball-kit").await;

        assert!(matches!(result, Err(LoadoutError::EntryNotFound(_))));
    }

    #[tokio::test]
    async fn when_new_name_saves_current_state_without_prompt() {
        let mut repo = MockSpellcastingEntryRepo::new();
        repo.expect_get_slots()
            .returning(|_| Ok(Some(state(&["a", "b"]))));
        repo.expect_get_loadouts().returning(|_| Ok(LoadoutSet::new()));
        repo.expect_set_loadout()
            .withf(|_, name, slots| name.as_str() == "fireball-kit" && *slots == state(&["a", "b"]))
            .times(1)
            .returning(|_, _, _| Ok(()));
        let use_case = use_case(repo, MockConfirmPort::new());

        let result = use_case.execute(&entry(), "fireball-kit").await.unwrap();

        assert_eq!(
            result,
            SaveOutcome::Saved {
                name: LoadoutName::from_stored("fireball-kit").unwrap(),
                overwritten: false
            }
        );
    }

    #[tokio::test]
    async fn when_name_sanitized_saves_under_sanitized_key() {
        let mut repo = MockSpellcastingEntryRepo::new();
        repo.expect_get_slots().returning(|_| Ok(Some(state(&["a"]))));
        repo.expect_get_loadouts().returning(|_| Ok(LoadoutSet::new()));
        repo.expect_set_loadout()
            .withf(|_, name, _| name.as_str() == "my_big_kit_")
            .times(1)
            .returning(|_, _, _| Ok(()));
        let use_case = use_case(repo, MockConfirmPort::new());

        let result = use_case.execute(&entry(), " my big.kit! ").await.unwrap();

        assert!(matches!(result, SaveOutcome::Saved { .. }));
    }

    #[tokio::test]
    async fn when_overwrite_declined_nothing_is_written() {
        let mut repo = MockSpellcastingEntryRepo::new();
        repo.expect_get_slots().returning(|_| Ok(Some(state(&["a"]))));
        repo.expect_get_loadouts().returning(|_| Ok(existing("burst")));
        repo.expect_set_loadout().never();
        let mut confirm = MockConfirmPort::new();
        confirm
            .expect_confirm()
            .withf(|request| request.icon == ConfirmIcon::Overwrite && request.message.contains("burst"))
            .times(1)
            .returning(|_| false);
        let use_case = use_case(repo, confirm);

        let result = use_case.execute(&entry(), "burst").await.unwrap();

        assert_eq!(
            result,
            SaveOutcome::Declined {
                name: LoadoutName::from_stored("burst").unwrap()
            }
        );
    }

    #[tokio::test]
    async fn when_overwrite_confirmed_replaces_snapshot() {
        let mut repo = MockSpellcastingEntryRepo::new();
        repo.expect_get_slots().returning(|_| Ok(Some(state(&["new"]))));
        repo.expect_get_loadouts().returning(|_| Ok(existing("burst")));
        repo.expect_set_loadout()
            .withf(|_, name, slots| name.as_str() == "burst" && *slots == state(&["new"]))
            .times(1)
            .returning(|_, _, _| Ok(()));
        let mut confirm = MockConfirmPort::new();
        confirm.expect_confirm().times(1).returning(|_| true);
        let use_case = use_case(repo, confirm);

        let result = use_case.execute(&entry(), "burst").await.unwrap();

        assert!(matches!(result, SaveOutcome::Saved { overwritten: true, .. }));
    }

    #[tokio::test]
    async fn collision_check_is_case_sensitive() {
        let mut repo = MockSpellcastingEntryRepo::new();
        repo.expect_get_slots().returning(|_| Ok(Some(state(&["a"]))));
        repo.expect_get_loadouts().returning(|_| Ok(existing("Burst")));
        repo.expect_set_loadout().times(1).returning(|_, _, _| Ok(()));
        let use_case = use_case(repo, MockConfirmPort::new());

        let result = use_case.execute(&entry(), "burst").await.unwrap();

        assert!(matches!(result, SaveOutcome::Saved { overwritten: false, .. }));
    }

    #[tokio::test]
    async fn when_repo_error_propagates() {
        let mut repo = MockSpellcastingEntryRepo::new();
        repo.expect_get_slots()
            .returning(|_| Err(RepoError::storage("get_slots", "unavailable")));
        let use_case = use_case(repo, MockConfirmPort::new());

        let result = use_case.execute(&entry(), "burst").await;

        assert!(matches!(result, Err(LoadoutError::Repo(_))));
    }
}

//! JSON-file backed actor store.
//!
//! Holds one actor document in memory and, when backed by a file, rewrites the
//! file after every mutation (write and fsync a sibling temp file, then rename)
//! so each request lands completely or not at all.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use spellkits_domain::{LoadoutName, LoadoutSet, SlotState};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::actor_document::ActorDocument;
use crate::infrastructure::ports::{EntryRef, FlagKey, RepoError, SpellcastingEntryRepo};

pub struct JsonActorStore {
    path: Option<PathBuf>,
    document: Mutex<ActorDocument>,
}

impl JsonActorStore {
    /// Store without a backing file.
    pub fn in_memory(document: ActorDocument) -> Self {
        Self {
            path: None,
            document: Mutex::new(document),
        }
    }

    /// Load the actor document at `path`; later mutations are written back there.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, RepoError> {
        let path = path.as_ref().to_path_buf();
        let bytes = fs::read(&path)
            .await
            .map_err(|e| RepoError::storage("open", format!("{}: {}", path.display(), e)))?;
        let document: ActorDocument = serde_json::from_slice(&bytes)?;

        tracing::info!(
            actor_id = %document.id,
            path = %path.display(),
            "Loaded actor document"
        );

        Ok(Self {
            path: Some(path),
            document: Mutex::new(document),
        })
    }

    /// Copy of the current document.
    pub async fn snapshot(&self) -> ActorDocument {
        self.document.lock().await.clone()
    }

    /// Apply `change` to a copy of the document, persist it, then commit.
    ///
    /// The in-memory document is only replaced once the file write succeeded.
    async fn mutate<F>(&self, operation: &'static str, change: F) -> Result<(), RepoError>
    where
        F: FnOnce(&mut ActorDocument) -> Result<(), RepoError>,
    {
        let mut document = self.document.lock().await;
        let mut updated = document.clone();
        change(&mut updated)?;

        if let Some(path) = &self.path {
            write_atomically(path, &updated)
                .await
                .map_err(|e| RepoError::storage(operation, e))?;
        }

        *document = updated;
        Ok(())
    }
}

/// Write to a sibling temp file, fsync it, rename over `path`, then fsync the
/// parent directory so the rename itself is durable.
async fn write_atomically(path: &Path, document: &ActorDocument) -> Result<(), std::io::Error> {
    let bytes = serde_json::to_vec_pretty(document)?;
    let temp = path.with_extension("json.tmp");

    let mut file = fs::File::create(&temp).await?;
    file.write_all(&bytes).await?;
    file.sync_all().await?;
    drop(file);

    fs::rename(&temp, path).await?;
    sync_parent_dir(path).await
}

#[cfg(unix)]
async fn sync_parent_dir(path: &Path) -> Result<(), std::io::Error> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::File::open(parent).await?.sync_all().await
}

// Directories cannot be opened for syncing here.
#[cfg(not(unix))]
async fn sync_parent_dir(_path: &Path) -> Result<(), std::io::Error> {
    Ok(())
}

fn ensure_actor(document: &ActorDocument, entry: &EntryRef) -> Result<(), RepoError> {
    if document.id != entry.actor_id {
        return Err(RepoError::not_found("Actor", &entry.actor_id));
    }
    Ok(())
}

#[async_trait]
impl SpellcastingEntryRepo for JsonActorStore {
    async fn get_slots(&self, entry: &EntryRef) -> Result<Option<SlotState>, RepoError> {
        let document = self.document.lock().await;
        ensure_actor(&document, entry)?;
        document
            .spellcasting_entry(&entry.entry_id)
            .map(|item| item.slots().map_err(RepoError::from))
            .transpose()
    }

    async fn update_slots(&self, entry: &EntryRef, slots: &SlotState) -> Result<(), RepoError> {
        self.mutate("update_slots", |document| {
            ensure_actor(document, entry)?;
            let item = document
                .spellcasting_entry_mut(&entry.entry_id)
                .ok_or_else(|| RepoError::not_found("Spellcasting entry", &entry.entry_id))?;
            item.set_slots(slots)?;
            Ok(())
        })
        .await
    }

    async fn get_loadouts(&self, key: &FlagKey) -> Result<LoadoutSet, RepoError> {
        let document = self.document.lock().await;
        ensure_actor(&document, &key.entry)?;
        Ok(document.loadouts(&key.module_id, &key.entry.entry_id)?)
    }

    async fn set_loadout(
        &self,
        key: &FlagKey,
        name: &LoadoutName,
        slots: &SlotState,
    ) -> Result<(), RepoError> {
        self.mutate("set_loadout", |document| {
            ensure_actor(document, &key.entry)?;
            document.set_loadout(&key.module_id, &key.entry.entry_id, name, slots)?;
            Ok(())
        })
        .await
    }

    async fn unset_loadout(&self, key: &FlagKey, name: &LoadoutName) -> Result<(), RepoError> {
        self.mutate("unset_loadout", |document| {
            ensure_actor(document, &key.entry)?;
            if !document.unset_loadout(&key.module_id, &key.entry.entry_id, name) {
                tracing::debug!(path = %key.loadout_path(name), "Flag already unset");
            }
            Ok(())
        })
        .await
    }
}

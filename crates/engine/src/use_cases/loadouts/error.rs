//! Loadout operation errors.

use spellkits_domain::LoadoutNameError;

use crate::infrastructure::ports::{EntryRef, RepoError};

/// Errors that can occur during loadout operations.
///
/// Declined confirmations and stale selections are outcomes, not errors.
#[derive(Debug, thiserror::Error)]
pub enum LoadoutError {
    #[error("Invalid loadout name: {0}")]
    InvalidName(#[from] LoadoutNameError),

    #[error("Spellcasting entry not found: {0}")]
    EntryNotFound(EntryRef),

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

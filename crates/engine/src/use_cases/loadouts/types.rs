//! Loadout operation results.

use spellkits_domain::{LoadoutName, SlotState};

/// Result of a save request.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Snapshot stored; `overwritten` is true when a loadout of that name existed.
    Saved {
        name: LoadoutName,
        overwritten: bool,
    },
    /// The name was taken and the user chose not to overwrite it.
    Declined { name: LoadoutName },
}

/// Result of an apply request.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    /// The stored snapshot was written back to the entry.
    Applied { name: LoadoutName, slots: SlotState },
    /// The sentinel was selected; live state left alone.
    Custom,
    /// The selected loadout no longer exists.
    Stale { name: LoadoutName },
}

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted { name: LoadoutName },
    /// The sentinel was selected; nothing to delete.
    Custom,
    /// The user chose not to delete.
    Declined { name: LoadoutName },
    /// The selected loadout no longer exists.
    Stale { name: LoadoutName },
}

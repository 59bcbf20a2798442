//! Loadout use cases.
//!
//! Save, apply and delete named snapshots of a spellcasting entry's slots.

use std::sync::Arc;

mod apply_loadout;
mod delete_loadout;
mod error;
mod save_loadout;
mod types;

pub use apply_loadout::ApplyLoadout;
pub use delete_loadout::DeleteLoadout;
pub use error::LoadoutError;
pub use save_loadout::SaveLoadout;
pub use types::{ApplyOutcome, DeleteOutcome, SaveOutcome};

/// Container for loadout use cases.
#[derive(Clone)]
pub struct LoadoutUseCases {
    pub save: Arc<SaveLoadout>,
    pub apply: Arc<ApplyLoadout>,
    pub delete: Arc<DeleteLoadout>,
}

impl LoadoutUseCases {
    pub fn new(
        save: Arc<SaveLoadout>,
        apply: Arc<ApplyLoadout>,
        delete: Arc<DeleteLoadout>,
    ) -> Self {
        Self {
            save,
            apply,
            delete,
        }
    }
}

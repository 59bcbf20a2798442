//! Spellkits domain: prepared-spell snapshots, loadout names, and matching.
//!
//! Everything here is pure data and pure functions. Persistence, prompts and
//! rendering live behind the engine's ports.

pub mod entities;
pub mod error;
pub mod ids;
pub mod matcher;
pub mod value_objects;

pub use entities::{Loadout, LoadoutSet, PreparedSpellRef, SlotState, SpellSlot};

pub use error::DomainError;

pub use ids::{ActorId, EntryId};

pub use matcher::{match_loadout, matches_live_state};

pub use value_objects::{
    sanitize_loadout_name, LoadoutName, LoadoutNameError, NameBounds, PanelState, Selection,
    DEFAULT_MAX_NAME_LENGTH, DEFAULT_MIN_NAME_LENGTH, RESERVED_LOADOUT_NAME,
};

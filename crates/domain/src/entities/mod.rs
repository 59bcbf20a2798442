//! Domain entities - Core business objects with identity

mod loadout;
mod slot_state;

pub use loadout::{Loadout, LoadoutSet};
pub use slot_state::{PreparedSpellRef, SlotState, SpellSlot};

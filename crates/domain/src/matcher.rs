//! Loadout matching
//!
//! Figures out which saved loadout, if any, the live preparation state of an
//! entry corresponds to, so the dropdown opens on reality rather than on an
//! arbitrary default.

use crate::entities::{LoadoutSet, SlotState, SpellSlot};
use crate::value_objects::Selection;

/// Return the first loadout (in set order) whose stored state matches `live`.
///
/// Every slot present in `live` must hold the same spell identities, position
/// for position, as the candidate's slot of the same name. A slot the candidate
/// lacks compares as an empty sequence. Slots only the candidate has are
/// ignored.
pub fn match_loadout(live: &SlotState, loadouts: &LoadoutSet) -> Selection {
    loadouts
        .iter()
        .find(|loadout| matches_live_state(live, &loadout.slots))
        .map(|loadout| Selection::Loadout(loadout.name.clone()))
        .unwrap_or(Selection::Custom)
}

/// Whether `stored` reproduces `live` for every slot `live` has.
pub fn matches_live_state(live: &SlotState, stored: &SlotState) -> bool {
    let empty = SpellSlot::default();
    live.slots().all(|(name, live_slot)| {
        let stored_slot = stored.get(name).unwrap_or(&empty);
        live_slot.same_preparation(stored_slot)
    })
}

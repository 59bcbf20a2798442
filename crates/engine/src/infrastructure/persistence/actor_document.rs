//! Host actor document model.
//!
//! Mirrors the parts of an actor's JSON that the extension touches: embedded
//! items (spellcasting entries carry `system.slots`) and module-scoped flags.
//! Everything else is kept as raw JSON so a load/save cycle loses nothing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use spellkits_domain::{ActorId, EntryId, Loadout, LoadoutName, LoadoutSet, SlotState};

use crate::infrastructure::ports::{ModuleId, RenderedEntry, RenderedSheet, SheetKind};

/// Item type of spellcasting entries.
pub const SPELLCASTING_ENTRY_TYPE: &str = "spellcastingEntry";

/// Actor type rendered with the character sheet.
const CHARACTER_TYPE: &str = "character";

/// Preparation mode that exposes the "prepare spells" control.
const PREPARED_MODE: &str = "prepared";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDocument {
    #[serde(rename = "_id")]
    pub id: EntryId,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "type")]
    pub item_type: String,

    #[serde(default)]
    pub system: Map<String, Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ItemDocument {
    pub fn is_spellcasting_entry(&self) -> bool {
        self.item_type == SPELLCASTING_ENTRY_TYPE
    }

    /// Prepared casters get the prepare-spells control; spontaneous ones do not.
    pub fn supports_preparation(&self) -> bool {
        self.system
            .get("prepared")
            .and_then(|prepared| prepared.get("value"))
            .and_then(Value::as_str)
            == Some(PREPARED_MODE)
    }

    /// `system.slots`, empty when absent.
    pub fn slots(&self) -> Result<SlotState, serde_json::Error> {
        match self.system.get("slots") {
            Some(Value::Null) | None => Ok(SlotState::default()),
            Some(slots) => serde_json::from_value(slots.clone()),
        }
    }

    /// Replace `system.slots` wholesale.
    pub fn set_slots(&mut self, slots: &SlotState) -> Result<(), serde_json::Error> {
        self.system
            .insert("slots".to_string(), serde_json::to_value(slots)?);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorDocument {
    #[serde(rename = "_id")]
    pub id: ActorId,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default)]
    pub actor_type: String,

    #[serde(default)]
    pub items: Vec<ItemDocument>,

    #[serde(default)]
    pub flags: Map<String, Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ActorDocument {
    pub fn spellcasting_entry(&self, entry_id: &EntryId) -> Option<&ItemDocument> {
        self.items
            .iter()
            .find(|item| item.is_spellcasting_entry() && &item.id == entry_id)
    }

    pub fn spellcasting_entry_mut(&mut self, entry_id: &EntryId) -> Option<&mut ItemDocument> {
        self.items
            .iter_mut()
            .find(|item| item.is_spellcasting_entry() && &item.id == entry_id)
    }

    /// `flags.<module>.<entry>`, empty when never written.
    ///
    /// Stored loadouts with an unusable name or snapshot are skipped with a
    /// warning; they stay in the document untouched.
    pub fn loadouts(
        &self,
        module_id: &ModuleId,
        entry_id: &EntryId,
    ) -> Result<LoadoutSet, serde_json::Error> {
        match self
            .flags
            .get(module_id.as_str())
            .and_then(|scope| scope.get(entry_id.as_str()))
        {
            Some(Value::Object(stored)) => Ok(stored
                .iter()
                .filter_map(|(key, value)| stored_loadout(entry_id, key, value))
                .collect()),
            Some(value) => serde_json::from_value(value.clone()),
            None => Ok(LoadoutSet::new()),
        }
    }

    /// Set `flags.<module>.<entry>.<name>`, creating intermediate objects.
    pub fn set_loadout(
        &mut self,
        module_id: &ModuleId,
        entry_id: &EntryId,
        name: &LoadoutName,
        slots: &SlotState,
    ) -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(slots)?;
        let mut scope = take_object(&mut self.flags, module_id.as_str());
        let mut loadouts = take_object(&mut scope, entry_id.as_str());
        loadouts.insert(name.as_str().to_string(), value);
        scope.insert(entry_id.as_str().to_string(), Value::Object(loadouts));
        self.flags
            .insert(module_id.as_str().to_string(), Value::Object(scope));
        Ok(())
    }

    /// Unset `flags.<module>.<entry>.<name>`. Returns whether anything was removed.
    pub fn unset_loadout(
        &mut self,
        module_id: &ModuleId,
        entry_id: &EntryId,
        name: &LoadoutName,
    ) -> bool {
        self.flags
            .get_mut(module_id.as_str())
            .and_then(|scope| scope.get_mut(entry_id.as_str()))
            .and_then(Value::as_object_mut)
            .is_some_and(|loadouts| loadouts.shift_remove(name.as_str()).is_some())
    }

    /// Player characters get the character sheet; every other actor type
    /// renders as a creature sheet.
    pub fn sheet_kind(&self) -> SheetKind {
        if self.actor_type == CHARACTER_TYPE {
            SheetKind::Character
        } else {
            SheetKind::Creature
        }
    }

    /// What the host's sheet would list for this actor.
    pub fn rendered_sheet(&self) -> RenderedSheet {
        RenderedSheet {
            kind: self.sheet_kind(),
            actor_id: self.id.clone(),
            entries: self
                .items
                .iter()
                .filter(|item| item.is_spellcasting_entry())
                .map(|item| RenderedEntry {
                    entry_id: Some(item.id.clone()),
                    has_prepare_control: item.supports_preparation(),
                })
                .collect(),
        }
    }
}

fn stored_loadout(entry_id: &EntryId, key: &str, value: &Value) -> Option<Loadout> {
    let name = match LoadoutName::from_stored(key) {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!(
                entry_id = %entry_id,
                loadout = %key,
                error = %e,
                "Skipping stored loadout with invalid name"
            );
            return None;
        }
    };

    match serde_json::from_value(value.clone()) {
        Ok(slots) => Some(Loadout::new(name, slots)),
        Err(e) => {
            tracing::warn!(
                entry_id = %entry_id,
                loadout = %key,
                error = %e,
                "Skipping stored loadout with unreadable slots"
            );
            None
        }
    }
}

/// Move the object at `map[key]` out, leaving an empty one in its position.
/// Non-object values are discarded.
fn take_object(map: &mut Map<String, Value>, key: &str) -> Map<String, Value> {
    match map.get_mut(key) {
        Some(Value::Object(object)) => std::mem::take(object),
        _ => Map::new(),
    }
}

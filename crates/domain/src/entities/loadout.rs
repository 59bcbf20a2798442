//! Saved loadouts ("spellkits") of one spellcasting entry.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::slot_state::SlotState;
use crate::value_objects::LoadoutName;

/// A named, persisted snapshot of a [`SlotState`].
#[derive(Debug, Clone, PartialEq)]
pub struct Loadout {
    pub name: LoadoutName,
    pub slots: SlotState,
}

impl Loadout {
    pub fn new(name: LoadoutName, slots: SlotState) -> Self {
        Self { name, slots }
    }
}

/// Loadouts owned by one spellcasting entry.
///
/// Names are unique. Insertion order is kept because the matcher reports the
/// first loadout that fits; overwriting a name keeps its position.
/// Persisted as a plain object keyed by loadout name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadoutSet {
    loadouts: Vec<Loadout>,
}

impl LoadoutSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.loadouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loadouts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Loadout> {
        self.loadouts.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &LoadoutName> {
        self.loadouts.iter().map(|loadout| &loadout.name)
    }

    pub fn get(&self, name: &str) -> Option<&SlotState> {
        self.loadouts
            .iter()
            .find(|loadout| loadout.name.as_str() == name)
            .map(|loadout| &loadout.slots)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Insert or replace; returns the previous snapshot when replacing.
    pub fn insert(&mut self, name: LoadoutName, slots: SlotState) -> Option<SlotState> {
        match self.loadouts.iter_mut().find(|loadout| loadout.name == name) {
            Some(existing) => Some(std::mem::replace(&mut existing.slots, slots)),
            None => {
                self.loadouts.push(Loadout::new(name, slots));
                None
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Loadout> {
        let index = self
            .loadouts
            .iter()
            .position(|loadout| loadout.name.as_str() == name)?;
        Some(self.loadouts.remove(index))
    }

    pub fn with_loadout(mut self, name: LoadoutName, slots: SlotState) -> Self {
        self.insert(name, slots);
        self
    }
}

impl FromIterator<Loadout> for LoadoutSet {
    fn from_iter<I: IntoIterator<Item = Loadout>>(iter: I) -> Self {
        let mut set = Self::new();
        for loadout in iter {
            set.insert(loadout.name, loadout.slots);
        }
        set
    }
}

impl Serialize for LoadoutSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.loadouts.len()))?;
        for loadout in &self.loadouts {
            map.serialize_entry(loadout.name.as_str(), &loadout.slots)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LoadoutSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LoadoutSetVisitor;

        impl<'de> Visitor<'de> for LoadoutSetVisitor {
            type Value = LoadoutSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of loadout names to slot states")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut set = LoadoutSet::new();
                while let Some((name, slots)) = access.next_entry::<LoadoutName, SlotState>()? {
                    set.insert(name, slots);
                }
                Ok(set)
            }

            // An entry with no saved loadouts yet may store `null`.
            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(LoadoutSet::new())
            }

            fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(LoadoutSet::new())
            }
        }

        deserializer.deserialize_any(LoadoutSetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::SpellSlot;
    use serde_json::json;

    fn name(value: &str) -> LoadoutName {
        LoadoutName::from_stored(value).unwrap()
    }

    fn state(ids: &[&str]) -> SlotState {
        SlotState::new().with_slot(
            "slot1",
            SpellSlot::from_spell_ids(ids.iter().copied().map(Some)),
        )
    }

    #[test]
    fn insert_keeps_position_when_overwriting() {
        let mut set = LoadoutSet::new()
            .with_loadout(name("alpha"), state(&["a"]))
            .with_loadout(name("beta"), state(&["b"]));

        let previous = set.insert(name("alpha"), state(&["c"]));

        assert_eq!(previous, Some(state(&["a"])));
        let names: Vec<_> = set.names().map(LoadoutName::as_str).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
        assert_eq!(set.get("alpha"), Some(&state(&["c"])));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let set = LoadoutSet::new().with_loadout(name("Burst"), state(&["a"]));
        assert!(set.contains("Burst"));
        assert!(!set.contains("burst"));
    }

    #[test]
    fn remove_returns_loadout() {
        let mut set = LoadoutSet::new().with_loadout(name("alpha"), state(&["a"]));
        let removed = set.remove("alpha").unwrap();
        assert_eq!(removed.name.as_str(), "alpha");
        assert!(set.is_empty());
        assert!(set.remove("alpha").is_none());
    }

    #[test]
    fn serializes_as_object_keyed_by_name() {
        let set = LoadoutSet::new().with_loadout(name("burst"), state(&["a"]));
        assert_eq!(
            serde_json::to_value(&set).unwrap(),
            json!({ "burst": { "slot1": { "prepared": [{ "id": "a" }] } } })
        );
    }

    #[test]
    fn deserializes_in_document_order() {
        let set: LoadoutSet = serde_json::from_str(
            r#"{ "zeta": { "slot1": { "prepared": [] } }, "alpha": { "slot1": { "prepared": [] } } }"#,
        )
        .unwrap();
        let names: Vec<_> = set.names().map(LoadoutName::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn null_reads_as_empty_set() {
        let set: LoadoutSet = serde_json::from_str("null").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn rejects_invalid_stored_key() {
        let result = serde_json::from_str::<LoadoutSet>(r#"{ "bad key": {} }"#);
        assert!(result.is_err());
    }
}

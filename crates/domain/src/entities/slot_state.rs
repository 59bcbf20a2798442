//! Prepared-spell state of one spellcasting entry
//!
//! The host owns the slot structure; we only need the spell identity at each
//! prepared position. Every other field is carried through untouched so that a
//! snapshot restores exactly what was captured.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Deserialize a field that is present in the input, `null` included.
///
/// Paired with `#[serde(default)]`, an absent key stays `None` while an
/// explicit `null` becomes `Some(..)`, so both survive a round trip.
fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// One prepared position inside a slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreparedSpellRef {
    /// Opaque spell identity as the host stored it (string, number, `null`).
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    id: Option<Value>,

    /// Host fields such as `expended`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PreparedSpellRef {
    pub fn new(spell_id: impl Into<String>) -> Self {
        Self {
            id: Some(Value::String(spell_id.into())),
            extra: Map::new(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Spell identity at this position; `null` and empty strings count as no spell.
    pub fn spell_id(&self) -> Option<&Value> {
        self.id.as_ref().filter(|id| match id {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            _ => true,
        })
    }
}

/// A named bucket of preparation capacity (a spell rank, cantrips, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpellSlot {
    /// Outer `None` when the host omitted the field, inner `None` for an
    /// explicit `null`. Both read as empty.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    prepared: Option<Option<Vec<Option<PreparedSpellRef>>>>,

    /// Host fields such as `max` and `value`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SpellSlot {
    pub fn new(prepared: Vec<Option<PreparedSpellRef>>) -> Self {
        Self {
            prepared: Some(Some(prepared)),
            extra: Map::new(),
        }
    }

    /// Slot with one prepared position per id; `None` leaves the position empty.
    pub fn from_spell_ids<'a>(ids: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        Self::new(
            ids.into_iter()
                .map(|id| Some(id.map(PreparedSpellRef::new).unwrap_or_default()))
                .collect(),
        )
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn prepared(&self) -> &[Option<PreparedSpellRef>] {
        self.prepared.as_ref().and_then(Option::as_deref).unwrap_or(&[])
    }

    /// Spell identity per prepared position, `None` for empty positions.
    pub fn spell_ids(&self) -> impl Iterator<Item = Option<&Value>> + '_ {
        self.prepared()
            .iter()
            .map(|entry| entry.as_ref().and_then(PreparedSpellRef::spell_id))
    }

    /// Position-by-position identity comparison. Lengths must agree.
    pub fn same_preparation(&self, other: &SpellSlot) -> bool {
        self.prepared().len() == other.prepared().len()
            && self.spell_ids().zip(other.spell_ids()).all(|(a, b)| a == b)
    }
}

/// Complete preparation state of one spellcasting entry, keyed by slot name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotState(BTreeMap<String, SpellSlot>);

impl SlotState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(mut self, name: impl Into<String>, slot: SpellSlot) -> Self {
        self.0.insert(name.into(), slot);
        self
    }

    pub fn get(&self, name: &str) -> Option<&SpellSlot> {
        self.0.get(name)
    }

    pub fn slots(&self) -> impl Iterator<Item = (&str, &SpellSlot)> {
        self.0.iter().map(|(name, slot)| (name.as_str(), slot))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, SpellSlot)> for SlotState {
    fn from_iter<I: IntoIterator<Item = (String, SpellSlot)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

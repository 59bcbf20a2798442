use std::fmt;

use serde::{Deserialize, Serialize};

use super::loadout_name::{LoadoutName, RESERVED_LOADOUT_NAME};

/// What the loadout dropdown shows for an entry.
///
/// Derived on every render and never persisted. On the wire the sentinel is
/// the literal `"custom"`, which no saved loadout may use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    /// Live state matches no saved loadout.
    #[default]
    Custom,
    Loadout(LoadoutName),
}

impl Selection {
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom)
    }

    pub fn loadout(&self) -> Option<&LoadoutName> {
        match self {
            Self::Custom => None,
            Self::Loadout(name) => Some(name),
        }
    }

    /// Value of the matching dropdown option.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Custom => RESERVED_LOADOUT_NAME,
            Self::Loadout(name) => name.as_str(),
        }
    }
}

/// Dropdown values that are not valid loadout names fall back to the sentinel.
impl From<String> for Selection {
    fn from(value: String) -> Self {
        LoadoutName::from_stored(value)
            .map(Self::Loadout)
            .unwrap_or(Self::Custom)
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> String {
        selection.as_str().to_string()
    }
}

impl From<LoadoutName> for Selection {
    fn from(name: LoadoutName) -> Self {
        Self::Loadout(name)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Visibility of the loadout controls under a spellcasting entry.
///
/// Presentation only; nothing persisted depends on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    #[default]
    Collapsed,
    Expanded,
}

impl PanelState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }

    /// Arrow shown on the toggle control.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Collapsed => "\u{25BC}",
            Self::Expanded => "\u{25B6}",
        }
    }
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collapsed => write!(f, "collapsed"),
            Self::Expanded => write!(f, "expanded"),
        }
    }
}

impl FromStr for PanelState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "collapsed" => Ok(Self::Collapsed),
            "expanded" => Ok(Self::Expanded),
            other => Err(DomainError::parse(format!("Unknown panel state: {}", other))),
        }
    }
}

//! Validated loadout name
//!
//! Loadout names double as persisted flag keys, so they are restricted to
//! word characters and hyphens. User input is sanitized rather than rejected:
//! every other character is replaced with `_`.

use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Selection value reserved for "the live state matches no saved loadout".
pub const RESERVED_LOADOUT_NAME: &str = "custom";

/// Default inclusive lower bound on sanitized name length.
pub const DEFAULT_MIN_NAME_LENGTH: usize = 3;

/// Default inclusive upper bound on sanitized name length.
pub const DEFAULT_MAX_NAME_LENGTH: usize = 30;

static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]").expect("valid regex"));

/// Replace every character outside `[A-Za-z0-9_-]` with `_`.
///
/// One replacement per character, so the result has the same character count
/// as the input. Idempotent.
pub fn sanitize_loadout_name(raw: &str) -> String {
    DISALLOWED_CHARS.replace_all(raw, "_").into_owned()
}

/// Reasons a loadout name is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadoutNameError {
    #[error("Loadout name cannot be empty")]
    Empty,

    #[error("Loadout name must be between {min} and {max} characters (got {length})")]
    InvalidLength {
        length: usize,
        min: usize,
        max: usize,
    },

    #[error("Loadout name '{0}' is reserved")]
    Reserved(String),

    #[error("Loadout name '{0}' contains characters outside [A-Za-z0-9_-]")]
    InvalidCharacters(String),
}

/// Inclusive length bounds applied to sanitized names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameBounds {
    min: usize,
    max: usize,
}

impl NameBounds {
    /// Create bounds, rejecting `min == 0` and `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, DomainError> {
        if min == 0 {
            return Err(DomainError::validation(
                "Minimum loadout name length must be at least 1",
            ));
        }
        if min > max {
            return Err(DomainError::validation(format!(
                "Minimum loadout name length {} exceeds maximum {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, length: usize) -> bool {
        (self.min..=self.max).contains(&length)
    }
}

impl Default for NameBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_NAME_LENGTH,
            max: DEFAULT_MAX_NAME_LENGTH,
        }
    }
}

/// A sanitized loadout name, unique within its owning entry's loadout set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoadoutName(String);

impl LoadoutName {
    /// Turn raw user input into a name fit for saving.
    ///
    /// Checks run in a fixed order and the first failure wins: empty input,
    /// then length bounds, then the reserved sentinel. Collision with an
    /// existing loadout is the caller's concern.
    pub fn parse(raw: &str, bounds: NameBounds) -> Result<Self, LoadoutNameError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LoadoutNameError::Empty);
        }

        let sanitized = sanitize_loadout_name(trimmed);
        // Sanitized names are pure ASCII, so byte length is character length.
        let length = sanitized.len();
        if !bounds.contains(length) {
            return Err(LoadoutNameError::InvalidLength {
                length,
                min: bounds.min(),
                max: bounds.max(),
            });
        }

        if is_reserved(&sanitized) {
            return Err(LoadoutNameError::Reserved(sanitized));
        }

        Ok(Self(sanitized))
    }

    /// Accept a name read back from storage.
    ///
    /// Length bounds are not re-checked so loadouts saved under earlier
    /// bounds stay usable; the character class and sentinel still are.
    pub fn from_stored(name: impl Into<String>) -> Result<Self, LoadoutNameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(LoadoutNameError::Empty);
        }
        if DISALLOWED_CHARS.is_match(&name) {
            return Err(LoadoutNameError::InvalidCharacters(name));
        }
        if is_reserved(&name) {
            return Err(LoadoutNameError::Reserved(name));
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_reserved(name: &str) -> bool {
    name.eq_ignore_ascii_case(RESERVED_LOADOUT_NAME)
}

impl fmt::Display for LoadoutName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for LoadoutName {
    type Error = LoadoutNameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_stored(s)
    }
}

impl From<LoadoutName> for String {
    fn from(name: LoadoutName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sanitize_replaces_each_disallowed_char() {
        assert_eq!(sanitize_loadout_name("fire ball!"), "fire_ball_");
        assert_eq!(sanitize_loadout_name("heal-kit_2"), "heal-kit_2");
        assert_eq!(sanitize_loadout_name("é."), "__");
    }

    #[test]
    fn parse_trims_before_sanitizing() {
        let name = LoadoutName::parse("  burst kit  ", NameBounds::default()).unwrap();
        assert_eq!(name.as_str(), "burst_kit");
    }

    #[test]
    fn parse_rejects_blank_input_as_empty() {
        assert_eq!(
            LoadoutName::parse("   ", NameBounds::default()),
            Err(LoadoutNameError::Empty)
        );
    }

    #[test]
    fn parse_rejects_two_characters() {
        assert_eq!(
            LoadoutName::parse("ab", NameBounds::default()),
            Err(LoadoutNameError::InvalidLength {
                length: 2,
                min: 3,
                max: 30
            })
        );
    }

    #[test]
    fn parse_accepts_bounds_inclusively() {
        let bounds = NameBounds::default();
        assert!(LoadoutName::parse("abc", bounds).is_ok());
        assert!(LoadoutName::parse(&"a".repeat(30), bounds).is_ok());
        assert!(matches!(
            LoadoutName::parse(&"a".repeat(31), bounds),
            Err(LoadoutNameError::InvalidLength { length: 31, .. })
        ));
    }

    #[test]
    fn parse_counts_characters_not_bytes() {
        // Three two-byte characters become three underscores.
        let name = LoadoutName::parse("äöü", NameBounds::default()).unwrap();
        assert_eq!(name.as_str(), "___");
    }

    #[test]
    fn parse_rejects_reserved_sentinel_in_any_case() {
        let bounds = NameBounds::default();
        assert_eq!(
            LoadoutName::parse("custom", bounds),
            Err(LoadoutNameError::Reserved("custom".to_string()))
        );
        assert!(matches!(
            LoadoutName::parse("CUSTOM", bounds),
            Err(LoadoutNameError::Reserved(_))
        ));
    }

    #[test]
    fn length_is_checked_before_reserved_name() {
        let bounds = NameBounds::new(7, 10).unwrap();
        assert!(matches!(
            LoadoutName::parse("custom", bounds),
            Err(LoadoutNameError::InvalidLength { length: 6, .. })
        ));
    }

    #[test]
    fn from_stored_skips_length_but_checks_charset() {
        assert!(LoadoutName::from_stored("ab").is_ok());
        assert!(matches!(
            LoadoutName::from_stored("a b"),
            Err(LoadoutNameError::InvalidCharacters(_))
        ));
        assert!(matches!(
            LoadoutName::from_stored("custom"),
            Err(LoadoutNameError::Reserved(_))
        ));
    }

    #[test]
    fn bounds_reject_inverted_range() {
        assert!(NameBounds::new(5, 4).is_err());
        assert!(NameBounds::new(0, 4).is_err());
        assert_eq!(NameBounds::new(3, 3).unwrap().max(), 3);
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent(raw in ".*") {
            let once = sanitize_loadout_name(&raw);
            prop_assert_eq!(sanitize_loadout_name(&once), once.clone());
        }

        #[test]
        fn sanitize_preserves_character_count(raw in ".*") {
            prop_assert_eq!(sanitize_loadout_name(&raw).chars().count(), raw.chars().count());
        }
    }
}

//! Environment-backed configuration.
//!
//! Supported environment variables:
//! - SPELLKITS_MODULE_ID: flag namespace on host documents (default `pf2e-spellkits`)
//! - SPELLKITS_NAME_MIN_LEN / SPELLKITS_NAME_MAX_LEN: inclusive loadout name bounds (default 3..=30)
//! - SPELLKITS_ACTOR_FILE: actor document used by the command-line host

use std::path::PathBuf;

use spellkits_domain::{DomainError, NameBounds, DEFAULT_MAX_NAME_LENGTH, DEFAULT_MIN_NAME_LENGTH};

use crate::infrastructure::ports::ModuleId;

const MODULE_ID_VAR: &str = "SPELLKITS_MODULE_ID";
const NAME_MIN_LEN_VAR: &str = "SPELLKITS_NAME_MIN_LEN";
const NAME_MAX_LEN_VAR: &str = "SPELLKITS_NAME_MAX_LEN";
const ACTOR_FILE_VAR: &str = "SPELLKITS_ACTOR_FILE";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid number: {value}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] DomainError),
}

/// Process-wide configuration, passed explicitly to whoever needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpellkitsConfig {
    pub module_id: ModuleId,
    pub name_bounds: NameBounds,
    pub actor_file: Option<PathBuf>,
}

impl SpellkitsConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |var: &str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let module_id = match read(MODULE_ID_VAR) {
            Some(value) => ModuleId::new(value)?,
            None => ModuleId::default(),
        };

        let min = parse_length(NAME_MIN_LEN_VAR, read(NAME_MIN_LEN_VAR))?
            .unwrap_or(DEFAULT_MIN_NAME_LENGTH);
        let max = parse_length(NAME_MAX_LEN_VAR, read(NAME_MAX_LEN_VAR))?
            .unwrap_or(DEFAULT_MAX_NAME_LENGTH);
        let name_bounds = NameBounds::new(min, max)?;

        let actor_file = read(ACTOR_FILE_VAR).map(PathBuf::from);

        tracing::debug!(
            module_id = %module_id,
            name_min = name_bounds.min(),
            name_max = name_bounds.max(),
            "Loaded spellkits configuration"
        );

        Ok(Self {
            module_id,
            name_bounds,
            actor_file,
        })
    }
}

fn parse_length(var: &'static str, value: Option<String>) -> Result<Option<usize>, ConfigError> {
    value
        .map(|value| {
            value
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidNumber { var, value })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::types::DEFAULT_MODULE_ID;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = SpellkitsConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, SpellkitsConfig::default());
        assert_eq!(config.module_id.as_str(), "pf2e-spellkits");
        assert_eq!(config.name_bounds.min(), 3);
        assert_eq!(config.name_bounds.max(), 30);
    }

    #[test]
    fn reads_overrides() {
        let config = SpellkitsConfig::from_lookup(lookup_from(&[
            ("SPELLKITS_MODULE_ID", "my-kits"),
            ("SPELLKITS_NAME_MIN_LEN", "4"),
            ("SPELLKITS_NAME_MAX_LEN", " 20 "),
            ("SPELLKITS_ACTOR_FILE", "actor.json"),
        ]))
        .unwrap();
        assert_eq!(config.module_id.as_str(), "my-kits");
        assert_eq!(config.name_bounds, NameBounds::new(4, 20).unwrap());
        assert_eq!(config.actor_file, Some(PathBuf::from("actor.json")));
    }

    #[test]
    fn rejects_non_numeric_bound() {
        let result = SpellkitsConfig::from_lookup(lookup_from(&[("SPELLKITS_NAME_MAX_LEN", "lots")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidNumber { var: "SPELLKITS_NAME_MAX_LEN", .. })
        ));
    }

    #[test]
    fn rejects_inverted_bounds() {
        let result = SpellkitsConfig::from_lookup(lookup_from(&[
            ("SPELLKITS_NAME_MIN_LEN", "10"),
            ("SPELLKITS_NAME_MAX_LEN", "5"),
        ]));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config =
            SpellkitsConfig::from_lookup(lookup_from(&[("SPELLKITS_MODULE_ID", "   ")])).unwrap();
        assert_eq!(config.module_id.as_str(), DEFAULT_MODULE_ID);
    }
}

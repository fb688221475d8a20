//! Runtime configuration read from the environment.

use crate::model::{Defaults, Periodicity};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;

pub const CHANNEL_BUFFER_VAR: &str = "CATALOG_CHANNEL_BUFFER";
pub const DEFAULT_CIRCULATION_VAR: &str = "CATALOG_DEFAULT_CIRCULATION";
pub const DEFAULT_PERIODICITY_VAR: &str = "CATALOG_DEFAULT_PERIODICITY";
pub const DEFAULT_NAME_VAR: &str = "CATALOG_DEFAULT_NAME";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// An environment variable is set but cannot be parsed.
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

/// Settings for a [`CatalogSystem`](crate::lifecycle::CatalogSystem).
///
/// The `CATALOG_DEFAULT_*` overrides land in [`CatalogConfig::defaults`] and only
/// reach values built with an explicit `from_defaults(&config.defaults)` call,
/// for example [`Magazine::from_defaults`](crate::model::Magazine::from_defaults)
/// with [`CatalogSystem::defaults`](crate::lifecycle::CatalogSystem::defaults).
/// The `Default` impls of the model types always use the built-in [`Defaults`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Capacity of the actor's request channel.
    pub channel_buffer: usize,
    /// Values handed to `from_defaults` constructors.
    pub defaults: Defaults,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            defaults: Defaults::default(),
        }
    }
}

impl CatalogConfig {
    /// Reads the configuration from the process environment.
    ///
    /// Unset variables keep their default; set but unparsable ones fail.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(buffer) = parse_var::<usize>(&lookup, CHANNEL_BUFFER_VAR)? {
            config.channel_buffer = buffer;
        }
        if let Some(circulation) = parse_var::<u64>(&lookup, DEFAULT_CIRCULATION_VAR)? {
            config.defaults.circulation = circulation;
        }
        if let Some(periodicity) = parse_var::<Periodicity>(&lookup, DEFAULT_PERIODICITY_VAR)? {
            config.defaults.periodicity = periodicity;
        }
        if let Some(name) = lookup(DEFAULT_NAME_VAR) {
            config.defaults.name = name;
        }

        Ok(config)
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value.trim().parse::<T>().map(Some).map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Magazine;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_unset_variables_keep_defaults() {
        let config = CatalogConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.channel_buffer, 32);
        assert_eq!(config.defaults.circulation, 1000);
    }

    #[test]
    fn test_variables_override_defaults() {
        let config = CatalogConfig::from_lookup(lookup_from(&[
            (CHANNEL_BUFFER_VAR, "8"),
            (DEFAULT_CIRCULATION_VAR, "250"),
            (DEFAULT_PERIODICITY_VAR, "Yearly"),
            (DEFAULT_NAME_VAR, "Anonymous"),
        ]))
        .unwrap();

        assert_eq!(config.channel_buffer, 8);
        assert_eq!(config.defaults.circulation, 250);
        assert_eq!(config.defaults.periodicity, Periodicity::Yearly);
        assert_eq!(config.defaults.name, "Anonymous");
    }

    #[test]
    fn test_overrides_reach_from_defaults_only() {
        let config = CatalogConfig::from_lookup(lookup_from(&[
            (DEFAULT_CIRCULATION_VAR, "250"),
            (DEFAULT_NAME_VAR, "Anonymous"),
        ]))
        .unwrap();

        let configured = Magazine::from_defaults(&config.defaults);
        assert_eq!(configured.name(), "Anonymous");
        assert_eq!(configured.circulation(), 250);

        let built_in = Magazine::default();
        assert_eq!(built_in.name(), "Unknown");
        assert_eq!(built_in.circulation(), 1000);
    }

    #[test]
    fn test_unparsable_values_are_rejected() {
        let err = CatalogConfig::from_lookup(lookup_from(&[(DEFAULT_PERIODICITY_VAR, "Daily")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: DEFAULT_PERIODICITY_VAR.to_string(),
                value: "Daily".to_string(),
            }
        );

        // negative circulation cannot be configured
        assert!(CatalogConfig::from_lookup(lookup_from(&[(DEFAULT_CIRCULATION_VAR, "-5")])).is_err());
    }
}

// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.3
// Author: Lukas Bower
// Date Modified: 2026-03-01

//! Driver configuration tables.
//!
//! Tuning entries and the name table are plain data owned by a
//! [`DriverConfig`], never compile-time device arrays; each
//! `DriverState` carries its own copy so independent states stay
//! independent.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::descriptor::ConfigKey;

/// Static pair of tuning values associated with a [`ConfigKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigEntry {
    pub item1: i32,
    pub item2: i32,
}

static DEFAULT_CONFIG_TABLE: Lazy<HashMap<ConfigKey, ConfigEntry>> = Lazy::new(|| {
    HashMap::from([
        (ConfigKey::PcdevA1x, ConfigEntry { item1: 60, item2: 21 }),
        (ConfigKey::PcdevB1x, ConfigEntry { item1: 50, item2: 22 }),
        (ConfigKey::PcdevC1x, ConfigEntry { item1: 40, item2: 23 }),
        (ConfigKey::PcdevD1x, ConfigEntry { item1: 30, item2: 24 }),
    ])
});

static DEFAULT_NAME_TABLE: Lazy<HashMap<String, ConfigKey>> = Lazy::new(|| {
    HashMap::from([
        ("pcdev-A1x".to_string(), ConfigKey::PcdevA1x),
        ("pcdev-B1x".to_string(), ConfigKey::PcdevB1x),
        ("pcdev-C1x".to_string(), ConfigKey::PcdevC1x),
        ("pcdev-D1x".to_string(), ConfigKey::PcdevD1x),
    ])
});

/// Matching tables consulted when a descriptor arrives.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Tuning entries keyed by explicit config key.
    pub config_table: HashMap<ConfigKey, ConfigEntry>,
    /// Fallback mapping from bus names to config keys.
    pub name_table: HashMap<String, ConfigKey>,
    /// When set, an unmatched descriptor is rejected instead of
    /// proceeding without a config entry.
    pub require_match: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            config_table: DEFAULT_CONFIG_TABLE.clone(),
            name_table: DEFAULT_NAME_TABLE.clone(),
            require_match: false,
        }
    }
}

impl DriverConfig {
    /// Config for a driver build that ships no tables at all.
    pub fn empty() -> Self {
        Self {
            config_table: HashMap::new(),
            name_table: HashMap::new(),
            require_match: false,
        }
    }
}

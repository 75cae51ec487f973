// CLASSIFICATION: COMMUNITY
// Filename: matcher.rs v0.3
// Author: Lukas Bower
// Date Modified: 2026-03-02

//! Binds arriving descriptors to config entries.
//!
//! Two strategies sit behind one entry point: an explicit config key
//! carried by the descriptor wins, the name table covers descriptors
//! authored before explicit keys existed.

use log::debug;

use crate::config::{ConfigEntry, DriverConfig};
use crate::descriptor::DeviceDescriptor;
use crate::error::{DriverError, DriverResult};

/// How a descriptor was bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Bound through the descriptor's explicit config key.
    ByKey,
    /// Bound by looking the bus name up in the name table.
    ByName,
    /// No table entry applied; the device proceeds without tuning data.
    Unmatched,
}

/// Result of resolving a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub config: Option<ConfigEntry>,
    pub matched: MatchKind,
}

/// Resolve a descriptor against the driver's tables.
///
/// Fails with `NoMatch` only when the config demands a match and
/// neither strategy produced one.
pub fn resolve(descriptor: &DeviceDescriptor, config: &DriverConfig) -> DriverResult<Binding> {
    if let Some(key) = descriptor.config_key {
        if let Some(entry) = config.config_table.get(&key) {
            debug!("device '{}' bound by key {:?}", descriptor.name, key);
            return Ok(Binding {
                config: Some(*entry),
                matched: MatchKind::ByKey,
            });
        }
    } else if let Some(key) = config.name_table.get(descriptor.name.as_str()) {
        if let Some(entry) = config.config_table.get(key) {
            debug!("device '{}' bound by name to {:?}", descriptor.name, key);
            return Ok(Binding {
                config: Some(*entry),
                matched: MatchKind::ByName,
            });
        }
    }
    if config.require_match {
        return Err(DriverError::NoMatch(descriptor.name.clone()));
    }
    debug!("device '{}' proceeds unmatched", descriptor.name);
    Ok(Binding {
        config: None,
        matched: MatchKind::Unmatched,
    })
}

// CLASSIFICATION: COMMUNITY
// Filename: descriptor.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-02-23

//! Static device descriptions announced by the bus.

use crate::access::DevicePermission;

/// Key selecting a static tuning-parameter tuple for a device family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    PcdevA1x,
    PcdevB1x,
    PcdevC1x,
    PcdevD1x,
}

/// Static attributes of a device, as announced by the registry.
///
/// Immutable once created; the core only ever reads it. Descriptors
/// authored before explicit keys existed carry `config_key: None` and
/// are matched by name instead.
#[derive(Debug, Clone)]
pub struct DeviceDescriptor {
    /// Bus-visible device name, used for name-table matching.
    pub name: String,
    /// Buffer size in bytes. Must be positive.
    pub capacity: usize,
    /// Declared access permission.
    pub permission: DevicePermission,
    /// Serial identifier, diagnostics only.
    pub serial: String,
    /// Explicit config key, when the bus supplies one.
    pub config_key: Option<ConfigKey>,
}

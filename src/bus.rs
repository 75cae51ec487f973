// CLASSIFICATION: COMMUNITY
// Filename: bus.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-03-05

//! Simulated platform bus.
//!
//! Ships the classic four-device setup as plain data and feeds it to a
//! driver state, standing in for a real bus announcing hardware.

use log::info;

use crate::access::DevicePermission;
use crate::descriptor::{ConfigKey, DeviceDescriptor};
use crate::driver::{DeviceId, DriverState};
use crate::error::DriverResult;

/// The stock device fleet announced at bus bring-up.
pub fn static_descriptors() -> Vec<DeviceDescriptor> {
    vec![
        DeviceDescriptor {
            name: "pcdev-A1x".into(),
            capacity: 512,
            permission: DevicePermission::ReadWrite,
            serial: "PCDEVABC1111".into(),
            config_key: Some(ConfigKey::PcdevA1x),
        },
        DeviceDescriptor {
            name: "pcdev-B1x".into(),
            capacity: 1024,
            permission: DevicePermission::ReadWrite,
            serial: "PCDEVABC2222".into(),
            config_key: Some(ConfigKey::PcdevB1x),
        },
        DeviceDescriptor {
            name: "pcdev-C1x".into(),
            capacity: 128,
            permission: DevicePermission::ReadOnly,
            serial: "PCDEVABC3333".into(),
            config_key: Some(ConfigKey::PcdevC1x),
        },
        DeviceDescriptor {
            name: "pcdev-D1x".into(),
            capacity: 32,
            permission: DevicePermission::WriteOnly,
            serial: "PCDEVABC4444".into(),
            config_key: Some(ConfigKey::PcdevD1x),
        },
    ]
}

/// Announce every stock descriptor to `state`, returning the assigned
/// ids in announcement order.
pub fn register_all(state: &DriverState) -> DriverResult<Vec<DeviceId>> {
    let mut ids = Vec::new();
    for descriptor in static_descriptors() {
        ids.push(state.on_arrival(descriptor)?);
    }
    info!("platform bus registered {} devices", ids.len());
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_fleet_covers_all_permissions() {
        let fleet = static_descriptors();
        assert_eq!(fleet.len(), 4);
        assert!(fleet.iter().all(|d| d.capacity > 0));
        assert!(fleet.iter().any(|d| d.permission == DevicePermission::ReadOnly));
        assert!(fleet.iter().any(|d| d.permission == DevicePermission::WriteOnly));
        assert!(fleet.iter().all(|d| d.config_key.is_some()));
    }
}

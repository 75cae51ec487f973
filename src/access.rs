// CLASSIFICATION: COMMUNITY
// Filename: access.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-02-21

//! Open-time permission gate.

use bitflags::bitflags;

use crate::error::{DriverError, DriverResult};

/// Access permission a device declares for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevicePermission {
    ReadOnly,
    WriteOnly,
    ReadWrite,
}

bitflags! {
    /// Access mode a client requests when opening a device.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AccessMode: u8 {
        const READ = 0b01;
        const WRITE = 0b10;
    }
}

/// Validate a requested access mode against a device permission.
///
/// Pure and total: read-write devices accept anything, read-only
/// devices accept read-and-only-read, write-only devices accept
/// write-and-only-write. Everything else is denied.
pub fn check_access(permission: DevicePermission, mode: AccessMode) -> DriverResult<()> {
    let ok = match permission {
        DevicePermission::ReadWrite => true,
        DevicePermission::ReadOnly => {
            mode.contains(AccessMode::READ) && !mode.contains(AccessMode::WRITE)
        }
        DevicePermission::WriteOnly => {
            mode.contains(AccessMode::WRITE) && !mode.contains(AccessMode::READ)
        }
    };
    if ok {
        Ok(())
    } else {
        Err(DriverError::PermissionDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_write_accepts_everything() {
        for mode in [
            AccessMode::READ,
            AccessMode::WRITE,
            AccessMode::READ | AccessMode::WRITE,
        ] {
            assert!(check_access(DevicePermission::ReadWrite, mode).is_ok());
        }
    }

    #[test]
    fn read_only_accepts_pure_reads() {
        assert!(check_access(DevicePermission::ReadOnly, AccessMode::READ).is_ok());
        assert_eq!(
            check_access(DevicePermission::ReadOnly, AccessMode::WRITE),
            Err(DriverError::PermissionDenied)
        );
        assert_eq!(
            check_access(DevicePermission::ReadOnly, AccessMode::READ | AccessMode::WRITE),
            Err(DriverError::PermissionDenied)
        );
    }

    #[test]
    fn write_only_accepts_pure_writes() {
        assert!(check_access(DevicePermission::WriteOnly, AccessMode::WRITE).is_ok());
        assert_eq!(
            check_access(DevicePermission::WriteOnly, AccessMode::READ),
            Err(DriverError::PermissionDenied)
        );
        assert_eq!(
            check_access(DevicePermission::WriteOnly, AccessMode::READ | AccessMode::WRITE),
            Err(DriverError::PermissionDenied)
        );
    }
}

// CLASSIFICATION: COMMUNITY
// Filename: error.rs v0.3
// Author: Lukas Bower
// Date Modified: 2026-02-21

//! Error taxonomy shared by every driver operation.
//!
//! All errors are recoverable and surfaced to the caller as values; a
//! malformed device never takes the rest of the fleet down with it.

use thiserror::Error;

use crate::driver::DeviceId;

/// Errors returned by driver core operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DriverError {
    /// Requested access mode is not allowed by the device permission.
    #[error("access mode not permitted by device")]
    PermissionDenied,
    /// Malformed descriptor or out-of-range seek argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// No live device with this id.
    #[error("no device with id {0}")]
    NotFound(DeviceId),
    /// Arriving descriptor could not be bound to any config entry.
    #[error("device '{0}' does not match any config entry")]
    NoMatch(String),
    /// The fixed device id range is exhausted.
    #[error("device id range exhausted")]
    CapacityExceeded,
    /// Buffer allocation for a new instance failed.
    #[error("allocation of {0} bytes failed")]
    AllocationFailure(usize),
    /// A driver-internal lock was poisoned by a panicking holder.
    #[error("driver state lock poisoned")]
    LockPoisoned,
}

pub type DriverResult<T> = Result<T, DriverError>;

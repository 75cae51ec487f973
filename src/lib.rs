// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.4
// Date Modified: 2026-03-09
// Author: Lukas Bower

//! Driver core for a fleet of pseudo character devices.
//!
//! Devices arrive over a simulated platform bus, each backed by an
//! in-memory buffer of its own size and access permission, and are
//! exposed to clients through open/read/write/seek/release sessions.

/// Error taxonomy and result alias
pub mod error;

/// Open-time permission gate
pub mod access;

/// Static device descriptions announced by the bus
pub mod descriptor;

/// Config tables consulted when binding descriptors
pub mod config;

/// Buffer-backed device instances and sessions
pub mod device;

/// Descriptor-to-config matching strategies
pub mod matcher;

/// Device-file publication boundary
pub mod registry;

/// Driver lifecycle manager
pub mod driver;

/// Simulated platform bus with the stock device fleet
pub mod bus;

pub use access::{check_access, AccessMode, DevicePermission};
pub use descriptor::{ConfigKey, DeviceDescriptor};
pub use device::{Session, Whence};
pub use driver::{DeviceId, DeviceInfo, DriverState, MAX_DEVICES};
pub use error::{DriverError, DriverResult};

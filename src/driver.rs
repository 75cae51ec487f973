// CLASSIFICATION: COMMUNITY
// Filename: driver.rs v0.6
// Author: Lukas Bower
// Date Modified: 2026-03-09

//! Driver lifecycle manager.
//!
//! Owns the table of live device instances and handles bus arrival
//! and departure events. There is no process-wide singleton: every
//! operation goes through an explicit [`DriverState`], so independent
//! states can coexist under test.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use log::{error, info, warn};

use crate::access::{AccessMode, DevicePermission};
use crate::config::DriverConfig;
use crate::descriptor::DeviceDescriptor;
use crate::device::{DeviceInstance, Session};
use crate::error::{DriverError, DriverResult};
use crate::matcher::resolve;
use crate::registry::DevicePublisher;

/// Numeric identifier assigned to a live device.
pub type DeviceId = u32;

/// Fixed size of the device id range. Arrivals beyond this fail with
/// `CapacityExceeded`.
pub const MAX_DEVICES: usize = 10;

/// Read-only diagnostic echo of one live device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub id: DeviceId,
    pub capacity: usize,
    pub permission: DevicePermission,
    pub serial: String,
    pub open_sessions: usize,
}

#[derive(Debug, Default)]
struct DriverInner {
    devices: HashMap<DeviceId, Arc<DeviceInstance>>,
    total_devices: usize,
}

/// Lifecycle manager for a fleet of pseudo character devices.
pub struct DriverState {
    config: DriverConfig,
    publisher: Arc<dyn DevicePublisher>,
    inner: Mutex<DriverInner>,
}

impl DriverState {
    pub fn new(config: DriverConfig, publisher: Arc<dyn DevicePublisher>) -> Self {
        Self {
            config,
            publisher,
            inner: Mutex::new(DriverInner::default()),
        }
    }

    /// Handle a bus arrival event. On success the device is live,
    /// published as `pcdev-<id>`, and counted; on any failure nothing
    /// of the partially built instance remains reachable.
    pub fn on_arrival(&self, descriptor: DeviceDescriptor) -> DriverResult<DeviceId> {
        match self.probe(descriptor) {
            Ok(id) => {
                info!("probe successful, device live as pcdev-{id}");
                Ok(id)
            }
            Err(err) => {
                error!("device probe failed: {err}");
                Err(err)
            }
        }
    }

    fn probe(&self, descriptor: DeviceDescriptor) -> DriverResult<DeviceId> {
        if descriptor.capacity == 0 {
            return Err(DriverError::InvalidArgument("device capacity must be positive"));
        }
        let binding = resolve(&descriptor, &self.config)?;

        let mut inner = self.inner.lock().map_err(|_| DriverError::LockPoisoned)?;
        let id = (0..MAX_DEVICES as DeviceId)
            .find(|candidate| !inner.devices.contains_key(candidate))
            .ok_or(DriverError::CapacityExceeded)?;

        // The instance is owned locally until publication succeeds;
        // an error below drops it and releases the id with it.
        let instance = DeviceInstance::new(id, &descriptor, binding.config)?;
        let node = format!("pcdev-{id}");
        self.publisher.publish(id, &node)?;

        info!(
            "device serial={} size={} perm={:?} bound as {node}",
            descriptor.serial, descriptor.capacity, descriptor.permission
        );
        inner.devices.insert(id, instance);
        inner.total_devices += 1;
        Ok(id)
    }

    /// Handle a bus departure event. Unknown ids are ignored, so a
    /// duplicate departure is safe.
    pub fn on_departure(&self, id: DeviceId) {
        let mut inner = match self.inner.lock() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        };
        match inner.devices.remove(&id) {
            Some(_) => {
                self.publisher.unpublish(id, &format!("pcdev-{id}"));
                inner.total_devices -= 1;
                info!("device pcdev-{id} removed");
            }
            None => warn!("departure for unknown device id {id}, ignoring"),
        }
    }

    /// Open a session on a live device.
    pub fn open(&self, id: DeviceId, mode: AccessMode) -> DriverResult<Session> {
        let inner = self.inner.lock().map_err(|_| DriverError::LockPoisoned)?;
        let instance = inner.devices.get(&id).ok_or(DriverError::NotFound(id))?;
        Arc::clone(instance).open(mode)
    }

    /// Close a session. Equivalent to dropping it.
    pub fn release(&self, session: Session) {
        session.release();
    }

    /// Number of live devices. Diagnostic, best effort.
    pub fn device_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .total_devices
    }

    /// Ids of all live devices, ascending. Diagnostic.
    pub fn device_ids(&self) -> Vec<DeviceId> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let mut ids: Vec<_> = inner.devices.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Static attribute echo for one live device.
    pub fn device_info(&self, id: DeviceId) -> DriverResult<DeviceInfo> {
        let inner = self.inner.lock().map_err(|_| DriverError::LockPoisoned)?;
        let instance = inner.devices.get(&id).ok_or(DriverError::NotFound(id))?;
        Ok(DeviceInfo {
            id,
            capacity: instance.capacity(),
            permission: instance.permission(),
            serial: instance.serial().to_string(),
            open_sessions: instance.open_sessions(),
        })
    }
}

// CLASSIFICATION: COMMUNITY
// Filename: registry.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-03-02

//! Device-file publication boundary.
//!
//! The driver core does not own user-visible device nodes; it asks an
//! external registry to create and destroy them. [`MemoryPublisher`]
//! is the in-process stand-in used by tests and the demo.

use std::collections::HashMap;
use std::sync::Mutex;

use log::info;

use crate::driver::DeviceId;
use crate::error::{DriverError, DriverResult};

/// Creates and destroys user-visible device files on behalf of the
/// driver core.
pub trait DevicePublisher: Send + Sync {
    /// Make a device node named `name` visible for device `id`.
    fn publish(&self, id: DeviceId, name: &str) -> DriverResult<()>;
    /// Remove the device node for `id`. Must tolerate ids that were
    /// never published.
    fn unpublish(&self, id: DeviceId, name: &str);
}

/// In-memory publisher recording the nodes it was asked to create.
#[derive(Debug, Default)]
pub struct MemoryPublisher {
    nodes: Mutex<HashMap<DeviceId, String>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names currently published, sorted by device id.
    pub fn published(&self) -> Vec<(DeviceId, String)> {
        let nodes = self.nodes.lock().unwrap_or_else(|e| e.into_inner());
        let mut out: Vec<_> = nodes.iter().map(|(id, n)| (*id, n.clone())).collect();
        out.sort_by_key(|(id, _)| *id);
        out
    }

    pub fn is_published(&self, id: DeviceId) -> bool {
        self.nodes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(&id)
    }
}

impl DevicePublisher for MemoryPublisher {
    fn publish(&self, id: DeviceId, name: &str) -> DriverResult<()> {
        self.nodes
            .lock()
            .map_err(|_| DriverError::LockPoisoned)?
            .insert(id, name.to_string());
        info!("published device node {name}");
        Ok(())
    }

    fn unpublish(&self, id: DeviceId, name: &str) {
        self.nodes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&id);
        info!("unpublished device node {name}");
    }
}

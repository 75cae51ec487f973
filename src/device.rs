// CLASSIFICATION: COMMUNITY
// Filename: device.rs v0.5
// Author: Lukas Bower
// Date Modified: 2026-03-07

//! Buffer-backed device instances and open sessions.
//!
//! An instance owns a fixed-size zeroed buffer; each open session
//! carries its own cursor, so concurrent sessions never race on
//! position. Byte transfers against the same buffer region from
//! different sessions are serialized by a per-device mutex, but
//! overlapping writes still land last-writer-wins with no atomicity
//! across ranges.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Weak};

use log::{debug, info};

use crate::access::{check_access, AccessMode, DevicePermission};
use crate::config::ConfigEntry;
use crate::descriptor::DeviceDescriptor;
use crate::driver::DeviceId;
use crate::error::{DriverError, DriverResult};

/// Seek reference point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whence {
    Start,
    Current,
    End,
}

impl Whence {
    /// Decode a raw whence discriminant as received at the client
    /// boundary. Unknown values are rejected.
    pub fn from_raw(raw: i32) -> DriverResult<Self> {
        match raw {
            0 => Ok(Whence::Start),
            1 => Ok(Whence::Current),
            2 => Ok(Whence::End),
            _ => Err(DriverError::InvalidArgument("unrecognized whence")),
        }
    }
}

/// A live, buffer-backed device.
///
/// Owned by the driver's instance table; sessions hold weak
/// references so a departed device cannot be kept alive by a
/// straggling open handle.
#[derive(Debug)]
pub struct DeviceInstance {
    id: DeviceId,
    capacity: usize,
    permission: DevicePermission,
    serial: String,
    config: Option<ConfigEntry>,
    buffer: Mutex<Box<[u8]>>,
    open_sessions: AtomicUsize,
}

impl DeviceInstance {
    /// Allocate a zeroed buffer of the descriptor's capacity and wrap
    /// it in a new instance. Buffer length never changes afterwards.
    pub(crate) fn new(
        id: DeviceId,
        descriptor: &DeviceDescriptor,
        config: Option<ConfigEntry>,
    ) -> DriverResult<Arc<Self>> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(descriptor.capacity)
            .map_err(|_| DriverError::AllocationFailure(descriptor.capacity))?;
        buf.resize(descriptor.capacity, 0u8);
        Ok(Arc::new(Self {
            id,
            capacity: descriptor.capacity,
            permission: descriptor.permission,
            serial: descriptor.serial.clone(),
            config,
            buffer: Mutex::new(buf.into_boxed_slice()),
            open_sessions: AtomicUsize::new(0),
        }))
    }

    pub fn id(&self) -> DeviceId {
        self.id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn permission(&self) -> DevicePermission {
        self.permission
    }

    pub fn serial(&self) -> &str {
        &self.serial
    }

    pub fn config(&self) -> Option<ConfigEntry> {
        self.config
    }

    /// Number of sessions currently open on this instance.
    pub fn open_sessions(&self) -> usize {
        self.open_sessions.load(Ordering::SeqCst)
    }

    /// Gate the requested mode against the device permission and hand
    /// out a fresh session at cursor zero. Nothing changes on denial.
    pub(crate) fn open(self: Arc<Self>, mode: AccessMode) -> DriverResult<Session> {
        check_access(self.permission, mode)?;
        self.open_sessions.fetch_add(1, Ordering::SeqCst);
        info!("pcdev-{}: open successful", self.id);
        Ok(Session {
            device_id: self.id,
            device: Arc::downgrade(&self),
            cursor: 0,
            mode,
        })
    }
}

/// One open handle on a device instance.
#[derive(Debug)]
pub struct Session {
    device: Weak<DeviceInstance>,
    device_id: DeviceId,
    cursor: usize,
    mode: AccessMode,
}

impl Session {
    fn instance(&self) -> DriverResult<Arc<DeviceInstance>> {
        self.device
            .upgrade()
            .ok_or(DriverError::NotFound(self.device_id))
    }

    pub fn device_id(&self) -> DeviceId {
        self.device_id
    }

    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    /// Current cursor position.
    pub fn position(&self) -> u64 {
        self.cursor as u64
    }

    /// Copy up to `out.len()` bytes from the device into `out`,
    /// starting at the cursor. The count is clamped to the bytes
    /// remaining before end-of-buffer; a short or zero count is a
    /// normal result, never an error.
    pub fn read(&mut self, out: &mut [u8]) -> DriverResult<usize> {
        if !self.mode.contains(AccessMode::READ) {
            return Err(DriverError::PermissionDenied);
        }
        let dev = self.instance()?;
        let buffer = dev.buffer.lock().map_err(|_| DriverError::LockPoisoned)?;
        let available = dev.capacity.saturating_sub(self.cursor);
        let count = out.len().min(available);
        out[..count].copy_from_slice(&buffer[self.cursor..self.cursor + count]);
        self.cursor += count;
        debug!("pcdev-{}: read {} bytes, cursor={}", dev.id, count, self.cursor);
        Ok(count)
    }

    /// Copy `src` into the device at the cursor, clamped to the
    /// remaining capacity. Returns the count actually written, which
    /// is zero once the device is full.
    pub fn write(&mut self, src: &[u8]) -> DriverResult<usize> {
        if !self.mode.contains(AccessMode::WRITE) {
            return Err(DriverError::PermissionDenied);
        }
        let dev = self.instance()?;
        let mut buffer = dev.buffer.lock().map_err(|_| DriverError::LockPoisoned)?;
        let available = dev.capacity.saturating_sub(self.cursor);
        let count = src.len().min(available);
        buffer[self.cursor..self.cursor + count].copy_from_slice(&src[..count]);
        self.cursor += count;
        debug!("pcdev-{}: wrote {} bytes, cursor={}", dev.id, count, self.cursor);
        Ok(count)
    }

    /// Move the cursor. The target must land inside `[0, capacity]`
    /// or the cursor is left untouched and `InvalidArgument` comes
    /// back.
    ///
    /// `End` is resolved against the current cursor, not against
    /// end-of-buffer; callers wanting end-of-buffer positioning should
    /// use `seek(capacity, Start)`.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> DriverResult<u64> {
        let dev = self.instance()?;
        let base = match whence {
            Whence::Start => 0i64,
            Whence::Current | Whence::End => self.cursor as i64,
        };
        let candidate = base
            .checked_add(offset)
            .ok_or(DriverError::InvalidArgument("seek offset overflows"))?;
        if candidate < 0 || candidate > dev.capacity as i64 {
            return Err(DriverError::InvalidArgument("seek target outside device bounds"));
        }
        self.cursor = candidate as usize;
        Ok(self.cursor as u64)
    }

    /// Close the session. Buffer contents are left as written; only
    /// the instance's open-session count changes.
    pub fn release(self) {}
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(dev) = self.device.upgrade() {
            dev.open_sessions.fetch_sub(1, Ordering::SeqCst);
            info!("pcdev-{}: release successful", dev.id);
        }
    }
}

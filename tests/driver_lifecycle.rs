// CLASSIFICATION: COMMUNITY
// Filename: driver_lifecycle.rs v0.2
// Author: Cohesix Codex
// Date Modified: 2026-03-09

use std::sync::Arc;

use pcdev::bus;
use pcdev::config::DriverConfig;
use pcdev::registry::MemoryPublisher;
use pcdev::{AccessMode, DeviceDescriptor, DevicePermission, DriverState, MAX_DEVICES};

fn descriptor(name: &str, capacity: usize) -> DeviceDescriptor {
    DeviceDescriptor {
        name: name.into(),
        capacity,
        permission: DevicePermission::ReadWrite,
        serial: format!("SER-{name}"),
        config_key: None,
    }
}

#[test]
fn stock_bus_comes_up_published() {
    let publisher = Arc::new(MemoryPublisher::new());
    let state = DriverState::new(DriverConfig::default(), publisher.clone());
    let ids = bus::register_all(&state).unwrap();

    assert_eq!(ids, vec![0, 1, 2, 3]);
    assert_eq!(state.device_count(), 4);
    let nodes: Vec<String> = publisher.published().into_iter().map(|(_, n)| n).collect();
    assert_eq!(nodes, vec!["pcdev-0", "pcdev-1", "pcdev-2", "pcdev-3"]);

    let info = state.device_info(ids[1]).unwrap();
    assert_eq!(info.capacity, 1024);
    assert_eq!(info.serial, "PCDEVABC2222");
}

#[test]
fn zero_capacity_arrival_leaves_count_unchanged() {
    let state = DriverState::new(DriverConfig::default(), Arc::new(MemoryPublisher::new()));
    state.on_arrival(descriptor("dev-ok", 64)).unwrap();
    assert!(state.on_arrival(descriptor("dev-bad", 0)).is_err());
    assert_eq!(state.device_count(), 1);
}

#[test]
fn departure_for_never_issued_id_is_a_noop() {
    let state = DriverState::new(DriverConfig::default(), Arc::new(MemoryPublisher::new()));
    state.on_arrival(descriptor("dev", 64)).unwrap();
    state.on_departure(99);
    assert_eq!(state.device_count(), 1);
}

#[test]
fn repeated_departure_is_idempotent() {
    let publisher = Arc::new(MemoryPublisher::new());
    let state = DriverState::new(DriverConfig::default(), publisher.clone());
    let id = state.on_arrival(descriptor("dev", 64)).unwrap();

    state.on_departure(id);
    assert_eq!(state.device_count(), 0);
    assert!(!publisher.is_published(id));

    state.on_departure(id);
    assert_eq!(state.device_count(), 0);
}

#[test]
fn arrivals_beyond_the_id_range_are_rejected() {
    let state = DriverState::new(DriverConfig::default(), Arc::new(MemoryPublisher::new()));
    for i in 0..MAX_DEVICES {
        state.on_arrival(descriptor(&format!("dev-{i}"), 16)).unwrap();
    }
    assert!(state.on_arrival(descriptor("one-too-many", 16)).is_err());
    assert_eq!(state.device_count(), MAX_DEVICES);
}

#[test]
fn open_session_count_is_reported_per_device() {
    let state = DriverState::new(DriverConfig::default(), Arc::new(MemoryPublisher::new()));
    let id = state.on_arrival(descriptor("dev", 64)).unwrap();

    let a = state.open(id, AccessMode::READ).unwrap();
    let b = state.open(id, AccessMode::WRITE).unwrap();
    assert_eq!(state.device_info(id).unwrap().open_sessions, 2);

    state.release(a);
    drop(b);
    assert_eq!(state.device_info(id).unwrap().open_sessions, 0);
}

#[test]
fn one_bad_device_never_blocks_the_rest() {
    let state = DriverState::new(DriverConfig::default(), Arc::new(MemoryPublisher::new()));
    assert!(state.on_arrival(descriptor("bad", 0)).is_err());
    let id = state.on_arrival(descriptor("good", 256)).unwrap();
    let mut session = state.open(id, AccessMode::READ | AccessMode::WRITE).unwrap();
    assert_eq!(session.write(b"still working").unwrap(), 13);
}

// CLASSIFICATION: COMMUNITY
// Filename: pcdev_demo.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-03-09
use std::sync::Arc;

use pcdev::bus;
use pcdev::config::DriverConfig;
use pcdev::registry::MemoryPublisher;
use pcdev::{AccessMode, DriverResult, DriverState, Whence};

fn main() -> DriverResult<()> {
    env_logger::init();

    let publisher = Arc::new(MemoryPublisher::new());
    let state = DriverState::new(DriverConfig::default(), publisher.clone());

    let ids = bus::register_all(&state)?;
    println!("[bus] {} devices live", state.device_count());
    for (id, node) in publisher.published() {
        let info = state.device_info(id)?;
        println!(
            "[bus] {node}: serial={} size={} perm={:?}",
            info.serial, info.capacity, info.permission
        );
    }

    // Exercise the first read-write device end to end.
    let mut session = state.open(ids[0], AccessMode::READ | AccessMode::WRITE)?;
    let written = session.write(b"hello from the pseudo char bus")?;
    println!("[io] wrote {written} bytes");
    session.seek(0, Whence::Start)?;
    let mut out = vec![0u8; written];
    let read = session.read(&mut out)?;
    println!("[io] read {read} bytes: {}", String::from_utf8_lossy(&out));
    state.release(session);

    for id in state.device_ids() {
        state.on_departure(id);
    }
    println!("[bus] {} devices live after teardown", state.device_count());
    Ok(())
}

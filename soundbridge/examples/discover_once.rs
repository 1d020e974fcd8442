//! Run one discovery cycle against the real volume tool and print the result.
//!
//! Expects `svcl.exe` under `public/` (see `BridgeConfig::default()`), so
//! this only does something useful on a Windows machine with the tool
//! present.

use std::sync::Arc;

use soundbridge::{
    AccessoryHost, AccessoryId, BridgeConfig, RegisteredAccessory, SoundBridge,
};

struct PrintingHost;

impl AccessoryHost for PrintingHost {
    fn register(&self, accessory: &RegisteredAccessory) {
        println!("register:   {} ({})", accessory.display_name, accessory.id);
    }

    fn update(&self, accessory: &RegisteredAccessory) {
        println!("update:     {} ({})", accessory.display_name, accessory.id);
    }

    fn unregister(&self, id: &AccessoryId) {
        println!("unregister: {}", id);
    }

    fn notify_active(&self, id: &AccessoryId, is_active: bool) {
        println!("notify:     {} active={}", id, is_active);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    soundbridge::logging::init_logging_from_env()?;

    let bridge = SoundBridge::new(BridgeConfig::default(), Arc::new(PrintingHost))?;
    let summary = bridge.discover_devices()?;

    println!(
        "cycle: {} created, {} updated, {} retired",
        summary.created, summary.updated, summary.retired
    );

    for accessory in bridge.accessories() {
        println!(
            "{} - active: {}, volume: {:?}",
            accessory.display_name(),
            accessory.is_active(),
            accessory.volume()
        );
    }

    Ok(())
}

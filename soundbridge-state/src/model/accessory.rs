//! Registered accessory type

use serde::{Deserialize, Serialize};
use soundbridge_discovery::DeviceRecord;

use super::AccessoryId;

/// A long-lived accessory entry backed by a discovered device
///
/// Created the first time an item ID is sighted, refreshed with the latest
/// device snapshot on every cycle the item ID persists, and retired when the
/// item ID disappears from an enumeration. Owned exclusively by the registry;
/// the boundary layer only ever holds references for dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredAccessory {
    /// Stable accessory identity, derived from the device item ID
    pub id: AccessoryId,
    /// Name shown to the host, fixed at first sighting
    pub display_name: String,
    /// Snapshot from the most recent enumeration cycle
    pub device: DeviceRecord,
    /// Whether this accessory is the currently selected output
    pub is_active: bool,
}

impl RegisteredAccessory {
    /// Build a fresh entry for a device sighted for the first time.
    ///
    /// The active flag is seeded from the device's default marker; the
    /// reconciliation engine normalizes it afterwards so at most one entry
    /// ends up active.
    pub fn from_device(device: DeviceRecord) -> Self {
        Self {
            id: AccessoryId::from_item_id(&device.item_id),
            display_name: device.name.clone(),
            is_active: device.is_default,
            device,
        }
    }

    /// Replace the device snapshot, keeping identity, name, and active flag.
    pub fn update_device(&mut self, device: DeviceRecord) {
        self.device = device;
    }

    /// The device item ID this accessory is bound to
    pub fn item_id(&self) -> &str {
        &self.device.item_id
    }

    /// Manufacturer/model string for host accessory information
    pub fn model(&self) -> &str {
        &self.device.device_name
    }

    /// Serial number string for host accessory information
    pub fn serial_number(&self) -> &str {
        &self.device.item_id
    }
}

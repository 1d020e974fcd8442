//! Speaker accessory handle
//!
//! One handle per registered device, exposing the three controllable
//! properties (active, volume, mute) the host binding wires into its
//! characteristic model.

use std::sync::{Arc, RwLock};

use soundbridge_control::{ControlError, DeviceControl};
use soundbridge_state::{activate, AccessoryId, Registry};

use crate::host::AccessoryHost;

/// Static accessory information for the host's information service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessoryInformation {
    pub manufacturer: String,
    pub model: String,
    pub serial_number: String,
}

/// Handle for one registered output device
///
/// Cheap to clone; all handles share the bridge's registry and control
/// client. Reads of `active` come straight from the registry (no process
/// spawn), volume and mute reads re-query the external tool, and every write
/// is dispatched fire-and-forget.
#[derive(Clone)]
pub struct SpeakerAccessory {
    id: AccessoryId,
    item_id: String,
    display_name: String,
    registry: Arc<RwLock<Registry>>,
    control: Arc<dyn DeviceControl>,
    host: Arc<dyn AccessoryHost>,
}

impl SpeakerAccessory {
    pub(crate) fn new(
        id: AccessoryId,
        item_id: String,
        display_name: String,
        registry: Arc<RwLock<Registry>>,
        control: Arc<dyn DeviceControl>,
        host: Arc<dyn AccessoryHost>,
    ) -> Self {
        Self {
            id,
            item_id,
            display_name,
            registry,
            control,
            host,
        }
    }

    /// Accessory identity
    pub fn id(&self) -> &AccessoryId {
        &self.id
    }

    /// Name shown to the host
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The device item ID this handle controls
    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    /// Manufacturer/model/serial for the host's information service.
    ///
    /// Returns `None` if the accessory has been retired since this handle was
    /// created.
    pub fn information(&self) -> Option<AccessoryInformation> {
        let registry = self.registry.read().ok()?;
        let entry = registry.get(&self.id)?;
        Some(AccessoryInformation {
            manufacturer: entry.model().to_string(),
            model: entry.model().to_string(),
            serial_number: entry.serial_number().to_string(),
        })
    }

    /// Whether this accessory is the currently selected output.
    ///
    /// Answered purely from the registry; a stale handle reads as inactive.
    pub fn is_active(&self) -> bool {
        self.registry
            .read()
            .ok()
            .and_then(|registry| registry.get(&self.id).map(|entry| entry.is_active))
            .unwrap_or(false)
    }

    /// Set the active property.
    ///
    /// `true` makes this device the system default: the switch commands are
    /// dispatched first, then the registry's active flags are re-seated, then
    /// the host is notified about every accessory whose state actually
    /// changed. `false` only mutes the device; it deliberately does not clear
    /// the active flag, mirroring the tool's semantics where muting and
    /// deactivation are distinct.
    pub fn set_active(&self, active: bool) {
        if !active {
            self.control.mute(&self.item_id);
            return;
        }

        self.control.set_default(&self.item_id);
        self.control.unmute(&self.item_id);

        let changed = {
            let mut registry = self.registry.write().unwrap();
            match activate(&mut registry, &self.id) {
                Ok(changed) => changed,
                Err(e) => {
                    // Stale handle after a retire raced with the user; log
                    // and carry on.
                    tracing::warn!(accessory = %self.id, error = %e, "activation skipped");
                    Vec::new()
                }
            }
        };

        for id in &changed {
            self.host.notify_active(id, *id == self.id);
        }
    }

    /// Query the device volume, 0-100. Blocks on the external tool.
    pub fn volume(&self) -> Result<u8, ControlError> {
        self.control.volume(&self.item_id)
    }

    /// Set the device volume, clamped to 0-100. Fire-and-forget.
    pub fn set_volume(&self, percent: u8) {
        self.control.set_volume(&self.item_id, percent.min(100));
    }

    /// Query the device mute state. Blocks on the external tool.
    pub fn is_muted(&self) -> Result<bool, ControlError> {
        self.control.is_muted(&self.item_id)
    }

    /// Mute or unmute the device. Fire-and-forget.
    pub fn set_muted(&self, muted: bool) {
        if muted {
            self.control.mute(&self.item_id);
        } else {
            self.control.unmute(&self.item_id);
        }
    }
}

//! SoundBridge - main entry point
//!
//! Owns the registry and runs discovery cycles: enumerate, reconcile, apply
//! the resulting actions through the host, swap in the new registry
//! generation. Single-writer: only cycles and the coordinator (via accessory
//! handles) ever mutate the registry; the swap is atomic so property reads
//! during a cycle observe either the old or the new generation, never a
//! partial one.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use soundbridge_control::{DeviceControl, VolumeToolClient};
use soundbridge_discovery::DeviceRecord;
use soundbridge_state::{reconcile, AccessoryId, Reconciliation, Registry, RegistryAction};

use crate::accessory::SpeakerAccessory;
use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::host::AccessoryHost;

/// Counts of one completed discovery cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleSummary {
    pub created: usize,
    pub updated: usize,
    pub retired: usize,
}

/// Main bridge object
///
/// Holds the registry, the control client, and the host binding, and hands
/// out [`SpeakerAccessory`] handles for every registered device.
pub struct SoundBridge {
    config: BridgeConfig,
    registry: Arc<RwLock<Registry>>,
    control: Arc<dyn DeviceControl>,
    host: Arc<dyn AccessoryHost>,
    accessories: RwLock<HashMap<AccessoryId, SpeakerAccessory>>,
}

impl SoundBridge {
    /// Create a bridge driving the volume tool named in `config`.
    pub fn new(config: BridgeConfig, host: Arc<dyn AccessoryHost>) -> Result<Self, BridgeError> {
        let control = Arc::new(VolumeToolClient::new(config.tool_path.clone()));
        Self::with_control(config, control, host)
    }

    /// Create a bridge with an injected control client.
    ///
    /// Use this when the control seam is provided by something other than the
    /// stock tool client (tests, alternative tools).
    pub fn with_control(
        config: BridgeConfig,
        control: Arc<dyn DeviceControl>,
        host: Arc<dyn AccessoryHost>,
    ) -> Result<Self, BridgeError> {
        config.validate()?;

        Ok(Self {
            config,
            registry: Arc::new(RwLock::new(Registry::new())),
            control,
            host,
            accessories: RwLock::new(HashMap::new()),
        })
    }

    /// Run one discovery cycle, logging instead of returning failures.
    ///
    /// Enumeration and reconciliation errors abort the cycle and leave the
    /// previous registry generation in place; discovery is retried on the
    /// next trigger. This never panics and never tears down accessories on a
    /// failed cycle.
    pub fn run_discovery_cycle(&self) {
        match self.discover_devices() {
            Ok(summary) => {
                tracing::debug!(
                    created = summary.created,
                    updated = summary.updated,
                    retired = summary.retired,
                    "discovery cycle complete"
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "discovery cycle failed, keeping previous registry");
            }
        }
    }

    /// Run one discovery cycle: enumerate speakers and reconcile.
    pub fn discover_devices(&self) -> Result<CycleSummary, BridgeError> {
        let devices = soundbridge_discovery::get_speakers(&self.config.enumeration_command())?;
        self.apply_discovered_devices(devices)
    }

    /// Reconcile an already-enumerated device list against the registry.
    ///
    /// This is the cycle's core, split out so device lists from other sources
    /// can be applied directly. The new registry generation is swapped in
    /// before host callbacks run, so everything the host observes during
    /// apply is post-cycle state.
    pub fn apply_discovered_devices(
        &self,
        devices: Vec<DeviceRecord>,
    ) -> Result<CycleSummary, BridgeError> {
        let previous = self.registry.read().unwrap().clone();
        let Reconciliation { registry: next, actions } = reconcile(&previous, &devices)?;

        *self.registry.write().unwrap() = next.clone();

        let mut summary = CycleSummary::default();
        let mut accessories = self.accessories.write().unwrap();

        for action in &actions {
            match action {
                RegistryAction::Create(id) => {
                    let Some(entry) = next.get(id) else { continue };
                    tracing::info!(name = %entry.display_name, "adding new accessory");

                    let handle = SpeakerAccessory::new(
                        id.clone(),
                        entry.item_id().to_string(),
                        entry.display_name.clone(),
                        Arc::clone(&self.registry),
                        Arc::clone(&self.control),
                        Arc::clone(&self.host),
                    );
                    accessories.insert(id.clone(), handle);
                    self.host.register(entry);
                    summary.created += 1;
                }
                RegistryAction::Update(id) => {
                    let Some(entry) = next.get(id) else { continue };
                    self.host.update(entry);
                    summary.updated += 1;
                }
                RegistryAction::Retire(id) => {
                    tracing::info!(accessory = %id, "retiring accessory");
                    accessories.remove(id);
                    self.host.unregister(id);
                    summary.retired += 1;
                }
            }
        }

        // Double-check against drift: any handle whose accessory did not
        // survive the cycle is retired even if no action named it.
        accessories.retain(|id, _| {
            let keep = next.contains(id);
            if !keep {
                tracing::warn!(accessory = %id, "retiring accessory missed by the action list");
                self.host.unregister(id);
                summary.retired += 1;
            }
            keep
        });

        Ok(summary)
    }

    /// Get an accessory handle by id
    pub fn accessory(&self, id: &AccessoryId) -> Option<SpeakerAccessory> {
        self.accessories.read().ok()?.get(id).cloned()
    }

    /// Get an accessory handle by display name
    pub fn accessory_by_name(&self, name: &str) -> Option<SpeakerAccessory> {
        self.accessories
            .read()
            .ok()?
            .values()
            .find(|a| a.display_name() == name)
            .cloned()
    }

    /// All accessory handles
    pub fn accessories(&self) -> Vec<SpeakerAccessory> {
        self.accessories
            .read()
            .map(|a| a.values().cloned().collect())
            .unwrap_or_default()
    }

    /// The currently active accessory, if any
    pub fn active_accessory(&self) -> Option<SpeakerAccessory> {
        let active_id = self.registry.read().ok()?.active_id()?;
        self.accessory(&active_id)
    }

    /// Snapshot of the current registry generation
    pub fn registry_snapshot(&self) -> Registry {
        self.registry
            .read()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// The bridge configuration
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }
}

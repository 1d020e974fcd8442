//! SoundBridge - audio outputs as smart-home accessories
//!
//! Bridges the dynamic set of audio output devices reported by the
//! SoundVolumeView command-line tool into a stable set of addressable
//! accessories inside a home-automation registry, and keeps a single "active"
//! selection consistent across device switches.
//!
//! # Architecture
//!
//! ```text
//! volume tool ─→ soundbridge-discovery ─→ reconcile (soundbridge-state)
//!                                              │ actions
//!                                              ▼
//!                          SoundBridge ─→ AccessoryHost (register/update/…)
//!                               │
//!                 SpeakerAccessory handles ─→ soundbridge-control
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use soundbridge::{BridgeConfig, SoundBridge};
//!
//! let host = Arc::new(MyHostBinding::new());
//! let bridge = SoundBridge::new(BridgeConfig::default(), host)?;
//!
//! // One enumerate-diff-apply pass; call again whenever the host wants a
//! // refresh.
//! bridge.run_discovery_cycle();
//!
//! if let Some(speakers) = bridge.accessory_by_name("Speakers") {
//!     speakers.set_active(true);
//! }
//! ```
//!
//! The host binding implements [`AccessoryHost`] and maps each accessory's
//! active/volume/mute properties onto its own characteristic model.

mod accessory;
mod bridge;
mod config;
mod error;
mod host;
pub mod logging;

pub use accessory::{AccessoryInformation, SpeakerAccessory};
pub use bridge::{CycleSummary, SoundBridge};
pub use config::BridgeConfig;
pub use error::BridgeError;
pub use host::AccessoryHost;

pub use soundbridge_control::{ControlError, DeviceControl, VolumeToolClient};
pub use soundbridge_discovery::{
    DeviceKind, DeviceRecord, EnumerationError, StreamDirection, VolumeToolCommand,
};
pub use soundbridge_state::{AccessoryId, RegisteredAccessory, Registry, StateError};

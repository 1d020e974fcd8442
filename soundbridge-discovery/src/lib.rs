//! Audio output device enumeration
//!
//! This crate provides a simple API for enumerating the audio devices known to
//! the Windows sound subsystem by driving the SoundVolumeView command-line
//! tool. The tool dumps its device table as a JSON array to a file; this crate
//! invokes it, reads the dump back, and exposes the records as typed values.
//!
//! # Quick Start
//!
//! ```no_run
//! use soundbridge_discovery::{get_speakers, VolumeToolCommand};
//!
//! let command = VolumeToolCommand::new("public/svcl.exe", "public/sound-items.json");
//! let speakers = get_speakers(&command)?;
//! for speaker in speakers {
//!     println!("Found {} (default: {})", speaker.name, speaker.is_default);
//! }
//! # Ok::<(), soundbridge_discovery::EnumerationError>(())
//! ```
//!
//! # Iterator-based Enumeration
//!
//! For more control, use the iterator API:
//!
//! ```no_run
//! use soundbridge_discovery::{EnumerationIterator, DeviceEvent, VolumeToolCommand};
//!
//! let command = VolumeToolCommand::new("public/svcl.exe", "public/sound-items.json");
//! for event in EnumerationIterator::new(&command)?.speakers_only() {
//!     match event {
//!         DeviceEvent::Found(device) => println!("Found: {}", device.name),
//!     }
//! }
//! # Ok::<(), soundbridge_discovery::EnumerationError>(())
//! ```

mod error;
mod enumerator;
pub mod record;
mod tool;

pub use enumerator::EnumerationIterator;
pub use error::{EnumerationError, Result};
pub use tool::VolumeToolCommand;

use serde::{Deserialize, Serialize};

/// A single device record from one enumeration cycle.
///
/// Immutable snapshot of what the volume tool reported for one endpoint. The
/// `item_id` is the stable identity used to match records across cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Opaque stable identifier, unique within one enumeration cycle
    pub item_id: String,
    /// Friendly name of the endpoint (e.g. "Speakers")
    pub name: String,
    /// Name of the physical device the endpoint belongs to
    pub device_name: String,
    /// What kind of sound item this record describes
    pub kind: DeviceKind,
    /// Whether the endpoint plays or captures audio
    pub direction: StreamDirection,
    /// Whether the tool marked this endpoint as the system default
    pub is_default: bool,
    /// Volume at enumeration time, 0-100
    pub volume_percent: u8,
    /// Mute state at enumeration time
    pub is_muted: bool,
}

impl DeviceRecord {
    /// A speaker is a render-direction hardware device.
    pub fn is_speaker(&self) -> bool {
        self.kind == DeviceKind::Device && self.direction == StreamDirection::Render
    }
}

/// Kind of sound item reported by the tool.
///
/// The tool emits more `Type` values than we care about; anything we don't
/// recognize parses to `Other` instead of failing the whole enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceKind {
    /// A hardware audio endpoint
    Device,
    /// A per-application audio session
    Application,
    /// A subunit of a device (e.g. a capture line)
    Subunit,
    /// Any type string this crate does not recognize
    Other,
}

/// Direction of the audio stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamDirection {
    /// Playback endpoint
    Render,
    /// Recording endpoint
    Capture,
    /// Any direction string this crate does not recognize
    Other,
}

/// Events emitted during device enumeration.
#[derive(Debug, Clone)]
pub enum DeviceEvent {
    /// A device record was read from the tool's output
    Found(DeviceRecord),
}

/// Enumerate all devices the tool reports.
///
/// Invokes the tool, reads its JSON dump, and collects every record into a
/// Vec. For streaming processing use [`EnumerationIterator`] instead.
pub fn get(command: &VolumeToolCommand) -> Result<Vec<DeviceRecord>> {
    EnumerationIterator::new(command).map(|iter| {
        iter.map(|event| match event {
            DeviceEvent::Found(device) => device,
        })
        .collect()
    })
}

/// Enumerate only speaker devices (hardware render endpoints).
///
/// This is the subset the accessory bridge registers; everything else the
/// tool reports (capture devices, per-application sessions) is skipped.
pub fn get_speakers(command: &VolumeToolCommand) -> Result<Vec<DeviceRecord>> {
    EnumerationIterator::new(command).map(|iter| {
        iter.speakers_only()
            .map(|event| match event {
                DeviceEvent::Found(device) => device,
            })
            .collect()
    })
}

//! Per-device control commands for audio endpoints
//!
//! This crate issues commands (mute, unmute, set volume, set default) to
//! individual audio devices by invoking the SoundVolumeView command-line tool
//! with the device's item ID. Mutating commands are fire-and-forget: the tool
//! produces no structured response, so success is assumed unless the
//! invocation itself fails, which is logged and swallowed. Volume and mute
//! queries block on the tool and parse its stdout.

mod client;
mod error;

pub use client::VolumeToolClient;
pub use error::ControlError;

/// Command interface to a single controllable audio device.
///
/// The seam between the accessory layer and the external tool. Mutating
/// methods dispatch without confirmation and never fail from the caller's
/// perspective; query methods block and can fail.
pub trait DeviceControl: Send + Sync {
    /// Make the device the system default output.
    fn set_default(&self, item_id: &str);

    /// Mute the device.
    fn mute(&self, item_id: &str);

    /// Unmute the device.
    fn unmute(&self, item_id: &str);

    /// Set the device volume, 0-100.
    fn set_volume(&self, item_id: &str, percent: u8);

    /// Query the current device volume, 0-100. Blocks on the tool.
    fn volume(&self, item_id: &str) -> Result<u8, ControlError>;

    /// Query the current mute state. Blocks on the tool.
    fn is_muted(&self, item_id: &str) -> Result<bool, ControlError>;
}

//! Tool-backed implementation of [`DeviceControl`].

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::ControlError;
use crate::DeviceControl;

/// Control client that drives devices through the volume tool.
///
/// Each command is one tool invocation addressed by the device's item ID.
/// Mutating commands block only for process exit; the device-side effect is
/// never confirmed.
#[derive(Debug, Clone)]
pub struct VolumeToolClient {
    exe_path: PathBuf,
}

impl VolumeToolClient {
    /// Create a client for the tool at the given path.
    pub fn new(exe_path: impl Into<PathBuf>) -> Self {
        Self {
            exe_path: exe_path.into(),
        }
    }

    /// Path of the tool executable.
    pub fn exe_path(&self) -> &Path {
        &self.exe_path
    }

    /// Dispatch a mutating command. Failures are logged, never returned.
    fn dispatch(&self, args: &[&str]) {
        match Command::new(&self.exe_path).args(args).status() {
            Ok(status) if status.success() => {}
            Ok(status) => {
                tracing::warn!(?args, %status, "volume tool command failed");
            }
            Err(e) => {
                tracing::warn!(?args, error = %e, "failed to run volume tool");
            }
        }
    }

    /// Run a stdout query and return the trimmed output.
    fn query(&self, args: &[&str]) -> Result<String, ControlError> {
        let output = Command::new(&self.exe_path)
            .args(args)
            .output()
            .map_err(|e| ControlError::Spawn(e.to_string()))?;

        if !output.status.success() {
            return Err(ControlError::ExitStatus(output.status.to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl DeviceControl for VolumeToolClient {
    fn set_default(&self, item_id: &str) {
        self.dispatch(&["/SetDefault", item_id]);
    }

    fn mute(&self, item_id: &str) {
        self.dispatch(&["/Mute", item_id]);
    }

    fn unmute(&self, item_id: &str) {
        self.dispatch(&["/Unmute", item_id]);
    }

    fn set_volume(&self, item_id: &str, percent: u8) {
        let percent = percent.min(100).to_string();
        self.dispatch(&["/SetVolume", item_id, &percent]);
    }

    fn volume(&self, item_id: &str) -> Result<u8, ControlError> {
        let raw = self.query(&["/Stdout", "/GetPercent", item_id])?;
        parse_percent(&raw)
    }

    fn is_muted(&self, item_id: &str) -> Result<bool, ControlError> {
        let raw = self.query(&["/Stdout", "/GetMute", item_id])?;
        parse_mute_flag(&raw)
    }
}

/// Parse the tool's percent output, e.g. `"73.0"` or `"73.0%"`.
fn parse_percent(raw: &str) -> Result<u8, ControlError> {
    let trimmed = raw.trim().trim_end_matches('%');
    let value: f32 = trimmed
        .parse()
        .map_err(|_| ControlError::Parse(format!("not a percent value: {:?}", raw)))?;
    Ok(value.round().clamp(0.0, 100.0) as u8)
}

/// Parse the tool's mute flag output, e.g. `"Yes"`, `"No"`, `"1"`, `"0"`.
fn parse_mute_flag(raw: &str) -> Result<bool, ControlError> {
    match raw.trim() {
        "Yes" | "yes" | "1" | "True" | "true" => Ok(true),
        "No" | "no" | "0" | "False" | "false" => Ok(false),
        other => Err(ControlError::Parse(format!(
            "not a mute flag: {:?}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("73.0", 73)]
    #[case("73.5", 74)]
    #[case("73.0%", 73)]
    #[case("0", 0)]
    #[case("100.0", 100)]
    #[case("250.0", 100)]
    fn test_parse_percent(#[case] raw: &str, #[case] expected: u8) {
        assert_eq!(parse_percent(raw).unwrap(), expected);
    }

    #[test]
    fn test_parse_percent_rejects_garbage() {
        assert!(matches!(parse_percent("loud"), Err(ControlError::Parse(_))));
    }

    #[rstest]
    #[case("Yes", true)]
    #[case("No", false)]
    #[case("1", true)]
    #[case("0", false)]
    fn test_parse_mute_flag(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(parse_mute_flag(raw).unwrap(), expected);
    }

    #[test]
    fn test_parse_mute_flag_rejects_garbage() {
        assert!(matches!(
            parse_mute_flag("maybe"),
            Err(ControlError::Parse(_))
        ));
    }

    #[test]
    fn test_dispatch_with_missing_tool_does_not_panic() {
        let client = VolumeToolClient::new("/nonexistent/svcl.exe");
        // Fire-and-forget contract: invocation failure is logged, not returned.
        client.mute("item-1");
        client.unmute("item-1");
        client.set_default("item-1");
        client.set_volume("item-1", 50);
    }

    #[test]
    fn test_query_with_missing_tool_is_spawn_error() {
        let client = VolumeToolClient::new("/nonexistent/svcl.exe");
        assert!(matches!(client.volume("item-1"), Err(ControlError::Spawn(_))));
        assert!(matches!(
            client.is_muted("item-1"),
            Err(ControlError::Spawn(_))
        ));
    }

    #[test]
    fn test_set_volume_clamps_percent() {
        // Clamp happens before dispatch; just exercise the path.
        let client = VolumeToolClient::new("/nonexistent/svcl.exe");
        client.set_volume("item-1", 255);
    }
}

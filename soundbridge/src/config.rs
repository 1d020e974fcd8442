//! Configuration for the bridge
//!
//! Paths to the external volume tool and the file it writes enumeration
//! output to. Defaults match the layout the tool is shipped with: a `public`
//! directory next to the bridge.

use std::path::PathBuf;

use soundbridge_discovery::VolumeToolCommand;

use crate::error::BridgeError;

/// Configuration for a [`SoundBridge`](crate::SoundBridge)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Path of the volume tool executable
    /// Default: `public/svcl.exe`
    pub tool_path: PathBuf,

    /// Path the tool writes the enumerated device list to
    /// Default: `public/sound-items.json`
    pub device_list_path: PathBuf,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            tool_path: PathBuf::from("public/svcl.exe"),
            device_list_path: PathBuf::from("public/sound-items.json"),
        }
    }
}

impl BridgeConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tool_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tool_path = path.into();
        self
    }

    pub fn with_device_list_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.device_list_path = path.into();
        self
    }

    /// Validate the configuration and return any issues
    pub fn validate(&self) -> Result<(), BridgeError> {
        if self.tool_path.as_os_str().is_empty() {
            return Err(BridgeError::Configuration(
                "tool path must not be empty".to_string(),
            ));
        }

        if self.device_list_path.as_os_str().is_empty() {
            return Err(BridgeError::Configuration(
                "device list path must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// The enumeration command for these paths
    pub fn enumeration_command(&self) -> VolumeToolCommand {
        VolumeToolCommand::new(&self.tool_path, &self.device_list_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BridgeConfig::default();
        assert_eq!(config.tool_path, PathBuf::from("public/svcl.exe"));
        assert_eq!(
            config.device_list_path,
            PathBuf::from("public/sound-items.json")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = BridgeConfig::new()
            .with_tool_path("tools/svcl.exe")
            .with_device_list_path("tools/devices.json");

        assert_eq!(config.tool_path, PathBuf::from("tools/svcl.exe"));
        assert_eq!(config.device_list_path, PathBuf::from("tools/devices.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_paths_fail_validation() {
        let config = BridgeConfig::new().with_tool_path("");
        assert!(config.validate().is_err());

        let config = BridgeConfig::new().with_device_list_path("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_enumeration_command_uses_configured_paths() {
        let config = BridgeConfig::new()
            .with_tool_path("tools/svcl.exe")
            .with_device_list_path("tools/devices.json");

        let command = config.enumeration_command();
        assert_eq!(command.exe_path(), PathBuf::from("tools/svcl.exe"));
        assert_eq!(command.output_path(), PathBuf::from("tools/devices.json"));
    }
}

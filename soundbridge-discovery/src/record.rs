//! Parsing of the volume tool's JSON dump.
//!
//! The tool writes one JSON array of string-valued columns per enumeration.
//! This module deserializes the raw rows and converts them into the public
//! [`DeviceRecord`] type.

use serde::Deserialize;

use crate::error::{EnumerationError, Result};
use crate::{DeviceKind, DeviceRecord, StreamDirection};

/// Raw device row as emitted by the tool.
///
/// Every column is a string; numeric and boolean columns are converted during
/// [`RawDeviceRecord::to_record`]. Columns other than `Item ID` are optional
/// because older tool versions omit some of them.
#[derive(Debug, Deserialize)]
pub struct RawDeviceRecord {
    #[serde(rename = "Item ID")]
    pub item_id: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Device Name", default)]
    pub device_name: String,
    #[serde(rename = "Type", default)]
    pub kind: String,
    #[serde(rename = "Direction", default)]
    pub direction: String,
    /// Empty string = not default; any non-empty marker = default
    #[serde(rename = "Default", default)]
    pub default_marker: String,
    #[serde(rename = "Volume Percent", default)]
    pub volume_percent: Option<String>,
    #[serde(rename = "Muted", default)]
    pub muted: Option<String>,
}

impl RawDeviceRecord {
    /// Convert the raw row to the public record type.
    pub fn to_record(&self) -> DeviceRecord {
        DeviceRecord {
            item_id: self.item_id.clone(),
            name: self.name.clone(),
            device_name: self.device_name.clone(),
            kind: parse_kind(&self.kind),
            direction: parse_direction(&self.direction),
            is_default: !self.default_marker.is_empty(),
            volume_percent: self
                .volume_percent
                .as_deref()
                .and_then(parse_percent)
                .unwrap_or(100),
            is_muted: self
                .muted
                .as_deref()
                .map(is_affirmative)
                .unwrap_or(false),
        }
    }
}

fn parse_kind(raw: &str) -> DeviceKind {
    match raw {
        "Device" => DeviceKind::Device,
        "Application" => DeviceKind::Application,
        "Subunit" => DeviceKind::Subunit,
        _ => DeviceKind::Other,
    }
}

fn parse_direction(raw: &str) -> StreamDirection {
    match raw {
        "Render" => StreamDirection::Render,
        "Capture" => StreamDirection::Capture,
        _ => StreamDirection::Other,
    }
}

/// Parse a percent column like `"25.0"` or `"25.0%"`, clamped to 0-100.
pub(crate) fn parse_percent(raw: &str) -> Option<u8> {
    let trimmed = raw.trim().trim_end_matches('%');
    let value: f32 = trimmed.parse().ok()?;
    Some(value.round().clamp(0.0, 100.0) as u8)
}

fn is_affirmative(raw: &str) -> bool {
    matches!(raw.trim(), "Yes" | "yes" | "1" | "True" | "true")
}

/// Parse a full device list dump, stripping a leading UTF-8 BOM if present.
pub fn parse_device_list(text: &str) -> Result<Vec<DeviceRecord>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let raw: Vec<RawDeviceRecord> = serde_json::from_str(text)
        .map_err(|e| EnumerationError::Parse(format!("invalid device list JSON: {}", e)))?;

    Ok(raw.iter().map(RawDeviceRecord::to_record).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SPEAKER_ROW: &str = r#"{
        "Name": "Speakers",
        "Type": "Device",
        "Direction": "Render",
        "Device Name": "Realtek High Definition Audio",
        "Default": "Render",
        "Volume Percent": "25.0",
        "Muted": "No",
        "Item ID": "{0.0.0.00000000}.{a1b2c3d4}"
    }"#;

    #[test]
    fn test_parse_speaker_row() {
        let devices = parse_device_list(&format!("[{}]", SPEAKER_ROW)).unwrap();
        assert_eq!(devices.len(), 1);

        let device = &devices[0];
        assert_eq!(device.item_id, "{0.0.0.00000000}.{a1b2c3d4}");
        assert_eq!(device.name, "Speakers");
        assert_eq!(device.device_name, "Realtek High Definition Audio");
        assert_eq!(device.kind, DeviceKind::Device);
        assert_eq!(device.direction, StreamDirection::Render);
        assert!(device.is_default);
        assert_eq!(device.volume_percent, 25);
        assert!(!device.is_muted);
        assert!(device.is_speaker());
    }

    #[test]
    fn test_parse_strips_bom() {
        let text = format!("\u{feff}[{}]", SPEAKER_ROW);
        let devices = parse_device_list(&text).unwrap();
        assert_eq!(devices.len(), 1);
    }

    #[test]
    fn test_empty_default_marker_is_not_default() {
        let text = r#"[{"Item ID": "id-1", "Type": "Device", "Direction": "Render", "Default": ""}]"#;
        let devices = parse_device_list(text).unwrap();
        assert!(!devices[0].is_default);
    }

    #[test]
    fn test_missing_optional_columns_use_defaults() {
        let text = r#"[{"Item ID": "id-1"}]"#;
        let devices = parse_device_list(text).unwrap();

        let device = &devices[0];
        assert_eq!(device.volume_percent, 100);
        assert!(!device.is_muted);
        assert_eq!(device.kind, DeviceKind::Other);
        assert_eq!(device.direction, StreamDirection::Other);
        assert!(!device.is_speaker());
    }

    #[test]
    fn test_capture_device_is_not_speaker() {
        let text = r#"[{"Item ID": "mic-1", "Type": "Device", "Direction": "Capture"}]"#;
        let devices = parse_device_list(text).unwrap();
        assert!(!devices[0].is_speaker());
    }

    #[test]
    fn test_application_session_is_not_speaker() {
        let text = r#"[{"Item ID": "app-1", "Type": "Application", "Direction": "Render"}]"#;
        let devices = parse_device_list(text).unwrap();
        assert!(!devices[0].is_speaker());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = parse_device_list("not json").unwrap_err();
        assert!(matches!(err, EnumerationError::Parse(_)));
    }

    #[rstest]
    #[case("25.0", Some(25))]
    #[case("25.6", Some(26))]
    #[case("73.0%", Some(73))]
    #[case("0.0", Some(0))]
    #[case("100.0", Some(100))]
    #[case("150.0", Some(100))]
    #[case("garbage", None)]
    fn test_parse_percent(#[case] raw: &str, #[case] expected: Option<u8>) {
        assert_eq!(parse_percent(raw), expected);
    }

    #[rstest]
    #[case("Yes", true)]
    #[case("No", false)]
    #[case("1", true)]
    #[case("0", false)]
    #[case("", false)]
    fn test_muted_column(#[case] raw: &str, #[case] expected: bool) {
        let text = format!(r#"[{{"Item ID": "id-1", "Muted": "{}"}}]"#, raw);
        let devices = parse_device_list(&text).unwrap();
        assert_eq!(devices[0].is_muted, expected);
    }
}

//! Invocation of the external volume tool.
//!
//! The tool writes its device table to a file when called with
//! `/SaveFileEncoding 3 /sjson <path>`; encoding 3 is UTF-8 with a BOM, which
//! the parser strips before handing the text to serde.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{EnumerationError, Result};

/// Paths needed to run one enumeration: the tool executable and the file it
/// writes the device list to.
#[derive(Debug, Clone)]
pub struct VolumeToolCommand {
    exe_path: PathBuf,
    output_path: PathBuf,
}

impl VolumeToolCommand {
    /// Create a command for the given tool executable and output file.
    pub fn new(exe_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            exe_path: exe_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Path of the tool executable.
    pub fn exe_path(&self) -> &Path {
        &self.exe_path
    }

    /// Path the tool writes the device list to.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Ask the tool to dump the current device table to the output file.
    ///
    /// Blocks until the tool exits. No structured response is produced; the
    /// result is the file at `output_path`.
    pub fn save_device_list(&self) -> Result<()> {
        tracing::debug!(exe = %self.exe_path.display(), "invoking volume tool for enumeration");

        let status = Command::new(&self.exe_path)
            .arg("/SaveFileEncoding")
            .arg("3")
            .arg("/sjson")
            .arg(&self.output_path)
            .status()
            .map_err(|e| {
                EnumerationError::ToolInvocation(format!(
                    "failed to run {}: {}",
                    self.exe_path.display(),
                    e
                ))
            })?;

        if !status.success() {
            return Err(EnumerationError::ToolInvocation(format!(
                "{} exited with status {}",
                self.exe_path.display(),
                status
            )));
        }

        Ok(())
    }

    /// Read the device list file written by [`save_device_list`].
    ///
    /// [`save_device_list`]: VolumeToolCommand::save_device_list
    pub fn read_device_list(&self) -> Result<String> {
        std::fs::read_to_string(&self.output_path).map_err(|e| {
            EnumerationError::Io(format!(
                "failed to read {}: {}",
                self.output_path.display(),
                e
            ))
        })
    }
}

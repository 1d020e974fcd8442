//! Error types for control command queries.

use thiserror::Error;

/// Errors that can occur while querying device state through the tool.
///
/// Fire-and-forget commands never surface these; they are logged inside the
/// client instead.
#[derive(Debug, Error)]
pub enum ControlError {
    /// The tool could not be spawned
    #[error("failed to run volume tool: {0}")]
    Spawn(String),

    /// The tool exited with a failure status
    #[error("volume tool exited with status {0}")]
    ExitStatus(String),

    /// The tool's stdout was not in the expected format
    #[error("unexpected tool output: {0}")]
    Parse(String),
}

//! Error types for device enumeration.

use std::fmt;

/// Error type for enumeration operations.
///
/// Represents the failure modes of one enumeration cycle: invoking the
/// external tool, reading its output file, and parsing the JSON dump. Any of
/// these aborts the cycle; the caller keeps its previous view of the world.
#[derive(Debug)]
pub enum EnumerationError {
    /// The tool could not be spawned or exited with a failure status
    ToolInvocation(String),
    /// The tool's output file could not be read
    Io(String),
    /// The output file did not contain a valid device list
    Parse(String),
}

impl fmt::Display for EnumerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumerationError::ToolInvocation(msg) => write!(f, "Tool invocation failed: {}", msg),
            EnumerationError::Io(msg) => write!(f, "I/O error: {}", msg),
            EnumerationError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for EnumerationError {}

/// Convenience Result type alias for enumeration operations.
pub type Result<T> = std::result::Result<T, EnumerationError>;

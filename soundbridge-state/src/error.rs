//! Error types for soundbridge-state

use thiserror::Error;

use crate::model::AccessoryId;

/// Result type for state operations
pub type Result<T> = std::result::Result<T, StateError>;

/// Errors that can occur during reconciliation and coordination
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// The same item ID appeared more than once in one enumeration cycle.
    /// Fatal to that cycle only; the previous registry must be retained.
    #[error("duplicate device identity in enumeration: {item_id}")]
    DuplicateIdentity { item_id: String },

    /// An operation referenced an accessory id that is not in the registry,
    /// typically because a retire raced with a user action. Non-fatal.
    #[error("unknown accessory: {0}")]
    UnknownAccessory(AccessoryId),
}

//! Accessory identity type

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Namespace for deriving accessory UUIDs from device item IDs. Fixed so that
/// the same item ID always maps to the same accessory across restarts.
const ITEM_ID_NAMESPACE: Uuid = Uuid::from_u128(0x1d43_c9a2_77f1_4f5e_9d2b_3a84_c06e_5b17);

/// Unique identifier for a registered accessory
///
/// Derived deterministically from the device's opaque item ID, so a device
/// keeps its accessory identity across enumeration cycles and process
/// restarts. Derivation is treated as injective; two distinct item IDs
/// mapping to the same accessory id is an unrecoverable invariant violation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccessoryId(Uuid);

impl AccessoryId {
    /// Resolve a device item ID to its accessory id.
    ///
    /// Deterministic and pure: the same item ID always yields the same id.
    pub fn from_item_id(item_id: &str) -> Self {
        Self(Uuid::new_v5(&ITEM_ID_NAMESPACE, item_id.as_bytes()))
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for AccessoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_is_deterministic() {
        let a = AccessoryId::from_item_id("{0.0.0.00000000}.{a1b2}");
        let b = AccessoryId::from_item_id("{0.0.0.00000000}.{a1b2}");
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_item_ids_resolve_differently() {
        let a = AccessoryId::from_item_id("item-a");
        let b = AccessoryId::from_item_id("item-b");
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_is_uuid_format() {
        let id = AccessoryId::from_item_id("item-a");
        let rendered = format!("{}", id);
        assert_eq!(rendered.len(), 36);
        assert_eq!(rendered, id.as_uuid().to_string());
    }
}

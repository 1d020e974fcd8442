//! The accessory registry
//!
//! Authoritative mapping from accessory identity to accessory state. One
//! generation of the registry corresponds to one completed reconciliation
//! cycle; the boundary layer swaps whole generations rather than mutating in
//! place, so readers always observe a consistent cycle.

use std::collections::HashMap;

use crate::model::{AccessoryId, RegisteredAccessory};

/// Mapping from accessory id to registered accessory
///
/// Invariants: keys correspond 1:1 with the item IDs seen in the most recent
/// completed reconciliation cycle, and at most one entry is active at a time.
/// Both are maintained by the reconciliation engine and the coordinator, the
/// only writers.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: HashMap<AccessoryId, RegisteredAccessory>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered accessories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether an accessory is registered
    pub fn contains(&self, id: &AccessoryId) -> bool {
        self.entries.contains_key(id)
    }

    /// Get an accessory by id
    pub fn get(&self, id: &AccessoryId) -> Option<&RegisteredAccessory> {
        self.entries.get(id)
    }

    /// All registered accessory ids
    pub fn ids(&self) -> Vec<AccessoryId> {
        self.entries.keys().cloned().collect()
    }

    /// Iterate over all registered accessories
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredAccessory> {
        self.entries.values()
    }

    /// The currently active accessory, if any
    ///
    /// Zero active entries is legal (before the first cycle, or when no
    /// device reports itself default); more than one never survives a
    /// completed reconcile or activate.
    pub fn active_id(&self) -> Option<AccessoryId> {
        self.entries
            .values()
            .find(|entry| entry.is_active)
            .map(|entry| entry.id.clone())
    }

    /// Number of active entries. Used by the coordinator's invariant checks.
    pub(crate) fn active_count(&self) -> usize {
        self.entries.values().filter(|entry| entry.is_active).count()
    }

    pub(crate) fn insert(&mut self, accessory: RegisteredAccessory) {
        self.entries.insert(accessory.id.clone(), accessory);
    }

    pub(crate) fn entries_mut(&mut self) -> impl Iterator<Item = &mut RegisteredAccessory> {
        self.entries.values_mut()
    }
}

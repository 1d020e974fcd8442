//! Reconciliation engine
//!
//! Diffs one enumeration cycle against the previous registry generation and
//! produces the next generation plus the instructions the boundary layer
//! needs to mirror the diff into the host. Pure: the previous registry is
//! never touched, so a failed cycle leaves the world exactly as it was.

use std::collections::HashSet;

use soundbridge_discovery::DeviceRecord;

use crate::error::{Result, StateError};
use crate::model::{AccessoryId, RegisteredAccessory};
use crate::registry::Registry;

/// One instruction for the boundary layer, produced by [`reconcile`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryAction {
    /// Register a newly sighted accessory with the host
    Create(AccessoryId),
    /// Refresh an accessory that persisted across cycles
    Update(AccessoryId),
    /// Unregister an accessory whose device disappeared
    Retire(AccessoryId),
}

impl RegistryAction {
    /// The accessory this action applies to
    pub fn id(&self) -> &AccessoryId {
        match self {
            RegistryAction::Create(id) => id,
            RegistryAction::Update(id) => id,
            RegistryAction::Retire(id) => id,
        }
    }
}

/// Result of one reconciliation cycle
#[derive(Debug, Clone)]
pub struct Reconciliation {
    /// The next registry generation; the caller swaps it in
    pub registry: Registry,
    /// Instructions in application order: creates, then updates, then retires
    pub actions: Vec<RegistryAction>,
}

/// Diff an enumeration cycle against the previous registry.
///
/// Only speaker devices participate; everything else in `devices` is
/// ignored. Creates and updates come out in discovery order; retires are
/// ordered by accessory id so a cycle's action list is fully deterministic.
///
/// The active flag is carried over for matched entries and seeded from the
/// default marker for created ones. If any enumerated speaker carries the
/// default marker, the flags are re-seated so exactly that speaker is active:
/// the tool is the source of truth for externally made switches. When several
/// speakers claim the marker (the tool should never do this), the first in
/// discovery order wins.
///
/// # Errors
///
/// [`StateError::DuplicateIdentity`] if an item ID appears twice in the cycle
/// (or two distinct item IDs resolve to the same accessory id). The cycle is
/// aborted with no partial result; the previous registry is still valid.
pub fn reconcile(previous: &Registry, devices: &[DeviceRecord]) -> Result<Reconciliation> {
    let mut next = Registry::new();
    let mut creates = Vec::new();
    let mut updates = Vec::new();
    let mut seen_item_ids = HashSet::new();
    let mut default_id: Option<AccessoryId> = None;

    for device in devices.iter().filter(|d| d.is_speaker()) {
        if !seen_item_ids.insert(device.item_id.clone()) {
            return Err(StateError::DuplicateIdentity {
                item_id: device.item_id.clone(),
            });
        }

        let id = AccessoryId::from_item_id(&device.item_id);
        if next.contains(&id) {
            return Err(StateError::DuplicateIdentity {
                item_id: device.item_id.clone(),
            });
        }

        if device.is_default && default_id.is_none() {
            default_id = Some(id.clone());
        }

        match previous.get(&id) {
            Some(existing) => {
                let mut entry = existing.clone();
                entry.update_device(device.clone());
                next.insert(entry);
                updates.push(RegistryAction::Update(id));
            }
            None => {
                next.insert(RegisteredAccessory::from_device(device.clone()));
                creates.push(RegistryAction::Create(id));
            }
        }
    }

    if let Some(default_id) = default_id {
        for entry in next.entries_mut() {
            entry.is_active = entry.id == default_id;
        }
    }

    let mut retired: Vec<AccessoryId> = previous
        .ids()
        .into_iter()
        .filter(|id| !next.contains(id))
        .collect();
    retired.sort();

    tracing::debug!(
        created = creates.len(),
        updated = updates.len(),
        retired = retired.len(),
        "reconciliation cycle computed"
    );

    let mut actions = creates;
    actions.extend(updates);
    actions.extend(retired.into_iter().map(RegistryAction::Retire));

    Ok(Reconciliation {
        registry: next,
        actions,
    })
}

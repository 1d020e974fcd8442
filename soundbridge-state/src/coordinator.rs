//! Active-selection coordination
//!
//! Exactly one accessory may be the selected output at a time. All switches
//! funnel through [`activate`], the single writer of the active flags; there
//! is no separate "current default" variable to drift out of sync.

use crate::error::{Result, StateError};
use crate::model::AccessoryId;
use crate::registry::Registry;

/// Make `target` the sole active accessory.
///
/// Deactivation of the other entries is pure bookkeeping; their devices
/// already reflect non-default status externally, so no commands are issued
/// for them. Returns the ids whose active flag actually changed, so the
/// boundary layer can notify the host about genuinely changed accessories
/// only. The changed set is sorted by id.
///
/// If `target` is already the sole active entry this short-circuits and
/// returns an empty set, leaving the registry untouched; activation is driven
/// from host property writes, and the short-circuit keeps repeated writes
/// from fanning out redundant work.
///
/// # Errors
///
/// [`StateError::UnknownAccessory`] if `target` is not registered (a retire
/// raced with the user action). The registry is left unchanged; callers
/// should log and carry on rather than treat this as fatal.
pub fn activate(registry: &mut Registry, target: &AccessoryId) -> Result<Vec<AccessoryId>> {
    if !registry.contains(target) {
        return Err(StateError::UnknownAccessory(target.clone()));
    }

    if registry.active_id().as_ref() == Some(target) && registry.active_count() == 1 {
        return Ok(Vec::new());
    }

    let mut changed = Vec::new();
    for entry in registry.entries_mut() {
        let should_be_active = entry.id == *target;
        if entry.is_active != should_be_active {
            entry.is_active = should_be_active;
            changed.push(entry.id.clone());
        }
    }
    changed.sort();

    debug_assert_eq!(registry.active_count(), 1);
    tracing::debug!(%target, changed = changed.len(), "active selection switched");

    Ok(changed)
}

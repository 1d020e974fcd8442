//! Host registry boundary

use soundbridge_state::{AccessoryId, RegisteredAccessory};

/// Boundary to the home-automation host's accessory registry.
///
/// Implemented once per target host binding. The bridge calls these as it
/// applies reconciliation actions and active-selection changes; the binding
/// maps them onto the host's own accessory and characteristic model. All
/// methods are notifications from the bridge's point of view; a binding that
/// fails internally must handle that itself, the bridge does not retry.
pub trait AccessoryHost: Send + Sync {
    /// A newly sighted device was registered.
    fn register(&self, accessory: &RegisteredAccessory);

    /// A registered device persisted through a cycle; its snapshot changed.
    fn update(&self, accessory: &RegisteredAccessory);

    /// A registered device disappeared and was retired.
    fn unregister(&self, id: &AccessoryId);

    /// An accessory's active state changed; push it to the host so remote
    /// views stay current. Only called for genuinely changed accessories.
    fn notify_active(&self, id: &AccessoryId, is_active: bool);
}

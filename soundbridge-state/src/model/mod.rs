//! Core data types for accessory state

mod accessory;
mod accessory_id;

pub use accessory::RegisteredAccessory;
pub use accessory_id::AccessoryId;

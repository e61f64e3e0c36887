//! Player edits: hotbar inventory, block profiles, placement targeting and
//! the place/break operations against the spatial index.
#![forbid(unsafe_code)]

pub mod inventory;
pub mod items;
pub mod placement;
pub mod target;

pub use inventory::{HOTBAR_SLOTS, Inventory, InventorySnapshot, Slot};
pub use items::{BlockProfile, ItemCatalog};
pub use placement::{
    EditWorld, PlacementOutcome, PlacementParams, PlacementRejection, break_at, place,
};
pub use target::{look_direction, placement_target};

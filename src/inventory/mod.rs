// Inventory module
//
// This module provides the player's carried items:
// - Ordered, weight-capped item storage
// - The reasons a pickup can be turned away

pub mod inventory;
pub mod rejection;

// Re-export main types
pub use inventory::Inventory;
pub use rejection::PickupRejection;

// Item system module
//
// This module provides the item side of the player model:
// - Item values and the fluent builder used to create them
// - On-use behaviour tags carried by items
// - Item registry for catalog lookups

pub mod definition;
pub mod properties;
pub mod registry;

// Re-export main types for convenient access
pub use definition::{Item, ItemBuilder};
pub use properties::OnUseEffect;
pub use registry::{ItemRegistry, RegistryError};

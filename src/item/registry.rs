use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use super::definition::Item;

/// Errors that can occur while building an item catalog
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Item {0} already registered")]
    DuplicateId(i32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Catalog of known items, keyed by id
///
/// The player never creates items; hosts look them up here and hand copies
/// to `Player::pick_up_item` or `Player::use_item`.
#[derive(Debug, Clone, Default)]
pub struct ItemRegistry {
    items: BTreeMap<i32, Item>,
}

impl ItemRegistry {
    /// Creates a new empty registry
    pub fn new() -> Self {
        ItemRegistry {
            items: BTreeMap::new(),
        }
    }

    /// Creates a registry with the base items pre-registered
    pub fn create_default() -> Self {
        let mut registry = Self::new();
        for item in base_items() {
            // Base ids are distinct
            registry.items.insert(item.id(), item);
        }
        registry
    }

    /// Builds a registry from a JSON array of items
    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for item in items {
            registry.register(item)?;
        }
        Ok(registry)
    }

    /// Loads a registry from a JSON catalog file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let registry = Self::from_json_str(&content)?;
        info!(path = %path.display(), items = registry.len(), "loaded item catalog");
        Ok(registry)
    }

    /// Registers a new item
    ///
    /// Returns error if an item with this id already exists.
    pub fn register(&mut self, item: Item) -> Result<(), RegistryError> {
        if self.items.contains_key(&item.id()) {
            return Err(RegistryError::DuplicateId(item.id()));
        }
        self.items.insert(item.id(), item);
        Ok(())
    }

    /// Gets an item by id
    pub fn get(&self, id: i32) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Finds the first item with the given name
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        self.items.values().find(|item| item.name() == name)
    }

    /// Returns true if an item with this id exists
    pub fn exists(&self, id: i32) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns all items ordered by id
    pub fn all_items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }
}

/// Built-in items available without a catalog file
fn base_items() -> Vec<Item> {
    vec![
        Item::new(1, "Health Potion", 50, 0, 1, false, false),
        Item::new(2, "Elixir", 600, 0, 1, false, true),
        Item::new(3, "Chainmail Vest", 0, 40, 120, false, false),
        Item::new(4, "Ring of Glimmer", 0, 5, 1, false, true),
        Item::new(5, "Crown of the Old King", 0, 10, 8, true, true),
        Item::new(6, "Stink Bomb", 0, 0, 2, false, false),
    ]
}

use crate::item::Item;
use super::rejection::PickupRejection;

/// Ordered, weight-capped item storage
///
/// Items keep the order they were stored in. There is no removal: an
/// inventory only grows. The weight cap is enforced by `rejection_for`,
/// which the player consults before calling `store`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    /// Stored items, oldest first
    items: Vec<Item>,

    /// Maximum total weight in kilograms
    capacity: i32,
}

impl Inventory {
    /// Creates a new empty inventory with the specified weight capacity
    pub fn new(capacity: i32) -> Self {
        Inventory {
            items: Vec::new(),
            capacity,
        }
    }

    /// Maximum total weight in kilograms
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Returns the stored items, oldest first
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the inventory has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the weights of all stored items, saturated to the `i32` range
    pub fn total_weight(&self) -> i32 {
        saturate(self.wide_weight())
    }

    /// Sum of the armour bonuses of all stored items, saturated to the `i32` range
    pub fn total_armour(&self) -> i32 {
        saturate(self.items.iter().map(|item| i64::from(item.armour())).sum())
    }

    /// Weight that can still be added before hitting capacity
    pub fn remaining_capacity(&self) -> i32 {
        saturate(i64::from(self.capacity) - self.wide_weight())
    }

    /// Exact carried weight; i64 cannot overflow for any realistic item count
    fn wide_weight(&self) -> i64 {
        self.items.iter().map(|item| i64::from(item.weight())).sum()
    }

    /// Returns true if any stored item has this id
    pub fn contains_id(&self, id: i32) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    /// Returns true if this exact item (all fields equal) is stored
    pub fn contains(&self, item: &Item) -> bool {
        self.items.contains(item)
    }

    /// Checks the pickup gates in order: weight first, then uniqueness
    ///
    /// Returns `None` when the item may be picked up.
    pub fn rejection_for(&self, item: &Item) -> Option<PickupRejection> {
        if self.wide_weight() + i64::from(item.weight()) > i64::from(self.capacity) {
            return Some(PickupRejection::TooHeavy {
                carried: self.total_weight(),
                item_weight: item.weight(),
                capacity: self.capacity,
            });
        }

        if item.is_unique() && self.contains_id(item.id()) {
            return Some(PickupRejection::DuplicateUnique { id: item.id() });
        }

        None
    }

    /// Appends an item without checking the gates
    ///
    /// Only the player stores items, after `rejection_for` passed.
    pub(crate) fn store(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Returns an iterator over the stored items
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}

/// Clamps a wide sum back into the `i32` range
fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i32, weight: i32, armour: i32) -> Item {
        Item::builder()
            .with_id(id)
            .with_weight(weight)
            .with_armour(armour)
            .build()
    }

    #[test]
    fn test_new_is_empty() {
        let inventory = Inventory::new(1000);
        assert!(inventory.is_empty());
        assert_eq!(inventory.total_weight(), 0);
        assert_eq!(inventory.total_armour(), 0);
        assert_eq!(inventory.remaining_capacity(), 1000);
    }

    #[test]
    fn test_totals_follow_stored_items() {
        let mut inventory = Inventory::new(1000);
        inventory.store(item(1, 100, 10));
        inventory.store(item(2, 50, 25));

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.total_weight(), 150);
        assert_eq!(inventory.total_armour(), 35);
        assert_eq!(inventory.remaining_capacity(), 850);
    }

    #[test]
    fn test_store_keeps_order() {
        let mut inventory = Inventory::new(1000);
        inventory.store(item(3, 1, 0));
        inventory.store(item(1, 1, 0));
        inventory.store(item(2, 1, 0));

        let ids: Vec<i32> = inventory.iter().map(Item::id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_exact_capacity_fits() {
        let mut inventory = Inventory::new(1000);
        inventory.store(item(1, 600, 0));
        assert_eq!(inventory.rejection_for(&item(2, 400, 0)), None);
    }

    #[test]
    fn test_over_capacity_is_rejected() {
        let mut inventory = Inventory::new(1000);
        inventory.store(item(1, 600, 0));
        assert_eq!(
            inventory.rejection_for(&item(2, 401, 0)),
            Some(PickupRejection::TooHeavy {
                carried: 600,
                item_weight: 401,
                capacity: 1000,
            })
        );
    }

    #[test]
    fn test_duplicate_unique_is_rejected() {
        let mut inventory = Inventory::new(1000);
        inventory.store(item(100, 1, 0));

        let unique = Item::builder().with_id(100).unique(true).build();
        assert_eq!(
            inventory.rejection_for(&unique),
            Some(PickupRejection::DuplicateUnique { id: 100 })
        );
    }

    #[test]
    fn test_duplicate_non_unique_is_allowed() {
        let mut inventory = Inventory::new(1000);
        inventory.store(item(100, 1, 0));
        assert_eq!(inventory.rejection_for(&item(100, 1, 0)), None);
    }

    #[test]
    fn test_weight_gate_is_checked_first() {
        let mut inventory = Inventory::new(10);
        inventory.store(item(7, 5, 0));

        let heavy_duplicate = Item::builder()
            .with_id(7)
            .with_weight(20)
            .unique(true)
            .build();
        assert!(matches!(
            inventory.rejection_for(&heavy_duplicate),
            Some(PickupRejection::TooHeavy { .. })
        ));
    }

    #[test]
    fn test_huge_item_after_small_one_is_too_heavy() {
        let mut inventory = Inventory::new(1000);
        inventory.store(item(1, 1, 0));

        assert_eq!(
            inventory.rejection_for(&item(2, i32::MAX, 0)),
            Some(PickupRejection::TooHeavy {
                carried: 1,
                item_weight: i32::MAX,
                capacity: 1000,
            })
        );
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let mut inventory = Inventory::new(i32::MAX);
        inventory.store(item(1, i32::MAX, i32::MAX));
        inventory.store(item(2, i32::MAX, i32::MAX));

        assert_eq!(inventory.total_weight(), i32::MAX);
        assert_eq!(inventory.total_armour(), i32::MAX);
        assert_eq!(inventory.remaining_capacity(), i32::MIN);
    }

    #[test]
    fn test_negative_weights_offset_in_gate() {
        let mut inventory = Inventory::new(10);
        inventory.store(item(1, i32::MIN, 0));
        inventory.store(item(2, i32::MAX, 0));

        // Carried weight is exactly -1
        assert_eq!(inventory.total_weight(), -1);
        assert_eq!(inventory.rejection_for(&item(3, 11, 0)), None);
        assert!(inventory.rejection_for(&item(4, 12, 0)).is_some());
    }

    #[test]
    fn test_contains() {
        let mut inventory = Inventory::new(1000);
        let stored = item(1, 2, 3);
        inventory.store(stored.clone());

        assert!(inventory.contains(&stored));
        assert!(inventory.contains_id(1));
        assert!(!inventory.contains(&item(1, 2, 4)));
        assert!(!inventory.contains_id(2));
    }
}

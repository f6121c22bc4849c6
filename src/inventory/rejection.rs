use std::fmt;

/// Why a pickup was turned away
///
/// These are ordinary game outcomes, not failures: the item simply stays
/// where it was and nothing about the player changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupRejection {
    /// The item would push the carried weight over capacity
    TooHeavy {
        carried: i32,
        item_weight: i32,
        capacity: i32,
    },

    /// A unique item with this id is already carried
    DuplicateUnique { id: i32 },
}

impl fmt::Display for PickupRejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PickupRejection::TooHeavy {
                carried,
                item_weight,
                capacity,
            } => {
                write!(
                    f,
                    "Too heavy (carrying {}, item {}, capacity {})",
                    carried, item_weight, capacity
                )
            }
            PickupRejection::DuplicateUnique { id } => {
                write!(f, "Unique item {} is already carried", id)
            }
        }
    }
}

//! Armour-based damage resolution
//!
//! This module holds the pure part of the damage rule, separate from the
//! player's state so it can be tested on its own:
//! - Damage strictly below the armour value is parried completely
//! - Anything else gets through, reduced by the armour value
//!
//! # Rust Learning Notes
//!
//! This module demonstrates:
//! - **Enums with data**: `DamageOutcome::Wounded { damage_dealt }`
//! - **Pure functions**: `resolve_damage` has no side effects, the player
//!   applies the outcome and fires the matching effect cue

use crate::effects::EffectCue;

/// What happened when a hit landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Armour absorbed the whole hit
    Parried,
    /// The hit got through armour
    Wounded {
        /// Health lost after armour reduction
        damage_dealt: i32,
    },
}

impl DamageOutcome {
    /// Health lost as a result of this outcome
    pub fn damage_dealt(&self) -> i32 {
        match self {
            DamageOutcome::Parried => 0,
            DamageOutcome::Wounded { damage_dealt } => *damage_dealt,
        }
    }

    /// Checks if the hit was parried
    pub fn is_parried(&self) -> bool {
        matches!(self, DamageOutcome::Parried)
    }

    /// The cosmetic cue that goes with this outcome
    pub fn cue(&self) -> EffectCue {
        match self {
            DamageOutcome::Parried => EffectCue::Parry,
            DamageOutcome::Wounded { .. } => EffectCue::LotsOfGore,
        }
    }
}

/// Resolves an incoming hit against an armour value
///
/// # Formula
///
/// - `amount < armour`: parried, no damage
/// - otherwise: `amount - armour` gets through, saturating at `i32::MAX`
///
/// Equal damage and armour is NOT a parry; it wounds for zero.
///
/// # Example
///
/// ```
/// use rpg_player::combat::{resolve_damage, DamageOutcome};
///
/// assert_eq!(resolve_damage(100, 50), DamageOutcome::Wounded { damage_dealt: 50 });
/// assert_eq!(resolve_damage(100, 2000), DamageOutcome::Parried);
/// ```
pub fn resolve_damage(amount: i32, armour: i32) -> DamageOutcome {
    if amount < armour {
        DamageOutcome::Parried
    } else {
        DamageOutcome::Wounded {
            damage_dealt: amount.saturating_sub(armour),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_armour_takes_full_damage() {
        assert_eq!(
            resolve_damage(100, 0),
            DamageOutcome::Wounded { damage_dealt: 100 }
        );
    }

    #[test]
    fn test_armour_reduces_damage() {
        let outcome = resolve_damage(100, 50);
        assert_eq!(outcome.damage_dealt(), 50);
        assert!(!outcome.is_parried());
        assert_eq!(outcome.cue(), EffectCue::LotsOfGore);
    }

    #[test]
    fn test_more_armour_than_damage_parries() {
        let outcome = resolve_damage(100, 2000);
        assert!(outcome.is_parried());
        assert_eq!(outcome.damage_dealt(), 0);
        assert_eq!(outcome.cue(), EffectCue::Parry);
    }

    #[test]
    fn test_equal_damage_and_armour_is_not_a_parry() {
        let outcome = resolve_damage(40, 40);
        assert_eq!(outcome, DamageOutcome::Wounded { damage_dealt: 0 });
        assert_eq!(outcome.cue(), EffectCue::LotsOfGore);
    }

    #[test]
    fn test_negative_armour_increases_damage() {
        assert_eq!(resolve_damage(10, -5).damage_dealt(), 15);
    }

    #[test]
    fn test_extreme_damage_saturates() {
        assert_eq!(resolve_damage(i32::MAX, -1).damage_dealt(), i32::MAX);
    }
}

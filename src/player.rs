//! The player entity
//!
//! `Player` owns the health, armour and inventory of one character and
//! enforces the rules that tie them together:
//! - Healing items are consumed on pickup and never stored
//! - Everything else is stored, and armour is recomputed from the inventory
//! - Pickups that would exceed the carrying capacity, or duplicate a unique
//!   item, are turned away without any change
//! - Incoming damage is reduced by armour, or parried outright when armour
//!   is higher than the hit
//!
//! The player talks to the outside world through two collaborators given at
//! construction: an `EffectSink` for cosmetic cues and a `ProximitySource`
//! for finding enemies.
//!
//! # Rust Learning Notes
//!
//! - **Generic collaborators**: `Player<S, P>` is generic over its sink and
//!   proximity source, so tests plug in recording doubles and hosts plug in
//!   real systems without any dynamic dispatch.
//! - **Exclusive borrows**: all mutating operations take `&mut self`, so at
//!   most one mutation can be in flight per player.

use serde::Serialize;
use tracing::debug;

use crate::combat::{resolve_damage, DamageOutcome};
use crate::config::PlayerConfig;
use crate::effects::{EffectSink, ItemEffectPolicy};
use crate::inventory::{Inventory, PickupRejection};
use crate::item::{Item, OnUseEffect};
use crate::proximity::{Enemy, ProximitySource};
use crate::stats::Health;

/// Result of a pickup attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupOutcome {
    /// A healing item was consumed on the spot
    Consumed {
        /// Change in current health
        healed: i32,
    },
    /// The item went into the inventory
    Stored {
        /// Armour after the item was added
        armour: i32,
    },
    /// The item was turned away and nothing changed
    Rejected(PickupRejection),
}

impl PickupOutcome {
    /// Returns true if the item was consumed or stored
    pub fn is_accepted(&self) -> bool {
        !matches!(self, PickupOutcome::Rejected(_))
    }

    /// Returns why the item was turned away, if it was
    pub fn rejection(&self) -> Option<PickupRejection> {
        match self {
            PickupOutcome::Rejected(rejection) => Some(*rejection),
            _ => None,
        }
    }
}

/// Snapshot of a player's numbers
///
/// This is what a proximity source sees of the player, and what hosts log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PlayerStatus {
    pub health: i32,
    pub max_health: i32,
    pub armour: i32,
    pub carried_weight: i32,
    pub carrying_capacity: i32,
}

/// A player character
pub struct Player<S, P> {
    health: Health,

    /// Always equal to the inventory's total armour
    armour: i32,

    inventory: Inventory,
    item_effects: ItemEffectPolicy,
    stink_bomb_damage: i32,

    effects: S,
    proximity: P,
}

impl<S: EffectSink, P: ProximitySource> Player<S, P> {
    /// Creates a player with the default rules
    ///
    /// The player starts with zero health, zero max health, zero armour and
    /// an empty inventory that can carry 1000 kg.
    pub fn new(effects: S, proximity: P) -> Self {
        Self::with_config(&PlayerConfig::default(), effects, proximity)
    }

    /// Creates a player with tuned rules
    pub fn with_config(config: &PlayerConfig, effects: S, proximity: P) -> Self {
        Player {
            health: Health::with_current(config.starting_health, config.max_health),
            armour: 0,
            inventory: Inventory::new(config.carrying_capacity),
            item_effects: ItemEffectPolicy::new(config.green_swirly_heal_threshold),
            stink_bomb_damage: config.stink_bomb_damage,
            effects,
            proximity,
        }
    }

    /// Current health, which may be negative or above max
    pub fn health(&self) -> i32 {
        self.health.current()
    }

    /// Overwrites current health without clamping
    pub fn set_health(&mut self, health: i32) {
        self.health.set_current(health);
    }

    /// Ceiling that healing pickups cap health at
    pub fn max_health(&self) -> i32 {
        self.health.max()
    }

    /// Overwrites max health; current health is not touched
    pub fn set_max_health(&mut self, max_health: i32) {
        self.health.set_max(max_health);
    }

    /// Total armour of the stored items
    pub fn armour(&self) -> i32 {
        self.armour
    }

    /// Read-only view of the carried items
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// How much the player can carry in kilograms
    pub fn carrying_capacity(&self) -> i32 {
        self.inventory.capacity()
    }

    /// Weight of everything in the inventory
    pub fn carried_weight(&self) -> i32 {
        self.inventory.total_weight()
    }

    /// Weight that can still be picked up
    pub fn remaining_capacity(&self) -> i32 {
        self.inventory.remaining_capacity()
    }

    /// Snapshot of the player's current numbers
    pub fn status(&self) -> PlayerStatus {
        PlayerStatus {
            health: self.health(),
            max_health: self.max_health(),
            armour: self.armour,
            carried_weight: self.carried_weight(),
            carrying_capacity: self.carrying_capacity(),
        }
    }

    /// The sink that receives cosmetic cues
    pub fn effect_sink(&self) -> &S {
        &self.effects
    }

    /// Mutable access to the effect sink, e.g. to clear a recording
    pub fn effect_sink_mut(&mut self) -> &mut S {
        &mut self.effects
    }

    /// The source consulted for nearby enemies
    pub fn proximity_source(&self) -> &P {
        &self.proximity
    }

    /// Tries to pick up an item, returning true if it was accepted
    ///
    /// See `try_pick_up` for the rules.
    pub fn pick_up_item(&mut self, item: Item) -> bool {
        self.try_pick_up(item).is_accepted()
    }

    /// Tries to pick up an item
    ///
    /// # Rules
    ///
    /// 1. Rejected if it would push the carried weight over capacity
    /// 2. Rejected if it is unique and an item with its id is carried
    /// 3. Healing items are consumed: health goes up, capped at max health
    /// 4. Other items are stored and armour is recomputed
    ///
    /// Accepted items then play their pickup effect, if any. Rejected items
    /// change nothing and play nothing.
    pub fn try_pick_up(&mut self, item: Item) -> PickupOutcome {
        if let Some(rejection) = self.inventory.rejection_for(&item) {
            debug!(item = item.id(), %rejection, "pickup rejected");
            return PickupOutcome::Rejected(rejection);
        }

        let outcome = if item.heals() {
            // Don't store items that give health, just consume them
            let healed = self.health.heal(item.heal());
            debug!(item = item.id(), healed, health = self.health(), "item consumed");
            PickupOutcome::Consumed { healed }
        } else {
            self.inventory.store(item.clone());
            self.recalculate_stats();
            debug!(item = item.id(), armour = self.armour, "item stored");
            PickupOutcome::Stored {
                armour: self.armour,
            }
        };

        self.item_effects.play_for_item(&item, &mut self.effects);
        outcome
    }

    /// Applies an incoming hit
    ///
    /// Hits strictly below the armour value are parried; everything else
    /// costs `amount - armour` health. Health is not floored at zero.
    pub fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        let outcome = resolve_damage(amount, self.armour);
        self.health.take_damage(outcome.damage_dealt());
        debug!(
            amount,
            armour = self.armour,
            dealt = outcome.damage_dealt(),
            health = self.health(),
            "damage taken"
        );
        self.effects.play_effect(outcome.cue());
        outcome
    }

    /// Uses an item
    ///
    /// Items tagged as stink bombs damage every enemy near the player, in
    /// the order the proximity source returns them. Other items do nothing.
    /// Returns how many enemies were hit.
    pub fn use_item(&self, item: &Item) -> usize {
        match item.on_use() {
            Some(OnUseEffect::StinkBomb) => {
                let enemies = self.proximity.enemies_near(&self.status());
                for enemy in &enemies {
                    enemy.take_damage(self.stink_bomb_damage);
                }
                debug!(
                    item = item.id(),
                    enemies = enemies.len(),
                    damage = self.stink_bomb_damage,
                    "stink bomb used"
                );
                enemies.len()
            }
            None => {
                debug!(item = item.id(), "item has no use");
                0
            }
        }
    }

    fn recalculate_stats(&mut self) {
        self.armour = self.inventory.total_armour();
    }
}

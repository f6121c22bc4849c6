//! Player inventory, combat and item-effect rules for an RPG
//!
//! The crate is a pure decision layer: it owns a player's numbers and decides
//! what happens on pickup, damage and item use. Rendering and enemy lookup
//! stay outside, behind the `EffectSink` and `ProximitySource` traits.
//!
//! ```
//! use rpg_player::effects::RecordingSink;
//! use rpg_player::item::Item;
//! use rpg_player::player::Player;
//! use rpg_player::proximity::NoEnemies;
//!
//! let mut player = Player::new(RecordingSink::new(), NoEnemies);
//! player.set_health(200);
//!
//! assert!(player.pick_up_item(Item::builder().with_armour(50).build()));
//! player.take_damage(100);
//!
//! assert_eq!(player.health(), 150);
//! assert_eq!(player.effect_sink().names(), vec!["lots_of_gore"]);
//! ```

pub mod combat;
pub mod config;
pub mod effects;
pub mod inventory;
pub mod item;
pub mod player;
pub mod proximity;
pub mod stats;

pub use config::{ConfigError, PlayerConfig};
pub use effects::{EffectCue, EffectSink, ItemEffectPolicy};
pub use item::{Item, ItemBuilder, ItemRegistry, OnUseEffect};
pub use player::{PickupOutcome, Player, PlayerStatus};
pub use proximity::{Enemy, ProximitySource};

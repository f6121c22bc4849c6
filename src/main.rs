//! Scripted demo session
//!
//! Loads a player config and an item catalog, then walks a player through a
//! few pickups, some hits and a stink bomb, logging everything with tracing.
//!
//! Usage: `rpg_player [player_config.json] [items.json]`
//! Set `RUST_LOG` to change the log filter (default `rpg_player=debug`).

use std::path::Path;
use std::rc::Rc;

use rpg_player::effects::TracingSink;
use rpg_player::proximity::{FixedEnemies, TrainingDummy};
use rpg_player::{Item, ItemRegistry, Player, PlayerConfig};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "assets/config/player.json";
const DEFAULT_CATALOG_PATH: &str = "assets/items.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rpg_player=debug")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let catalog_path = args.next().unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string());

    let config = load_config(&config_path)?;
    let registry = load_catalog(&catalog_path)?;

    let goblin = TrainingDummy::shared("goblin");
    let rat = TrainingDummy::shared("rat");
    let enemies = FixedEnemies::new(vec![Rc::clone(&goblin), Rc::clone(&rat)]);

    let mut player = Player::with_config(&config, TracingSink, enemies);
    tracing::info!(status = ?player.status(), "player ready");

    for name in [
        "Chainmail Vest",
        "Ring of Glimmer",
        "Crown of the Old King",
        "Crown of the Old King",
        "Health Potion",
        "Elixir",
    ] {
        let Some(item) = lookup(&registry, name) else {
            continue;
        };
        let outcome = player.try_pick_up(item);
        tracing::info!(item = name, ?outcome, "pickup");
    }

    for hit in [10, 45, 120] {
        let outcome = player.take_damage(hit);
        tracing::info!(hit, ?outcome, health = player.health(), "hit");
    }

    if let Some(bomb) = lookup(&registry, "Stink Bomb") {
        let hit = player.use_item(&bomb);
        tracing::info!(enemies = hit, "stink bomb thrown");
    }

    for enemy in [&goblin, &rat] {
        tracing::info!(enemy = enemy.name(), damage = enemy.total_damage(), "enemy report");
    }

    println!("{}", serde_json::to_string_pretty(&player.status())?);
    Ok(())
}

/// Loads the config file, or falls back to the default rules if it is missing
fn load_config(path: &str) -> Result<PlayerConfig, Box<dyn std::error::Error>> {
    if !Path::new(path).exists() {
        tracing::warn!(path, "config not found, using defaults");
        return Ok(PlayerConfig::default());
    }
    Ok(PlayerConfig::load_from_file(path)?)
}

/// Loads the catalog file, or falls back to the built-in items if it is missing
fn load_catalog(path: &str) -> Result<ItemRegistry, Box<dyn std::error::Error>> {
    if !Path::new(path).exists() {
        tracing::warn!(path, "catalog not found, using built-in items");
        return Ok(ItemRegistry::create_default());
    }
    Ok(ItemRegistry::load_from_file(path)?)
}

fn lookup(registry: &ItemRegistry, name: &str) -> Option<Item> {
    let item = registry.find_by_name(name).cloned();
    if item.is_none() {
        tracing::warn!(item = name, "item not in catalog");
    }
    item
}

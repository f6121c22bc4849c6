use serde::Deserialize;

/// Name that marks an item as a stink bomb when no explicit tag is given
pub const STINK_BOMB_NAME: &str = "Stink Bomb";

/// Behaviour that runs when an item is used
///
/// Items without a tag do nothing when used. New on-use behaviours are new
/// variants here, matched in `Player::use_item`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnUseEffect {
    /// Damages every enemy near the player
    StinkBomb,
}

impl OnUseEffect {
    /// Infers the tag from an item name
    ///
    /// Only the exact name "Stink Bomb" maps to a behaviour.
    pub fn from_item_name(name: &str) -> Option<Self> {
        if name == STINK_BOMB_NAME {
            Some(OnUseEffect::StinkBomb)
        } else {
            None
        }
    }
}

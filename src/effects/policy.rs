use tracing::debug;

use super::cue::EffectCue;
use super::sink::EffectSink;
use crate::item::Item;

/// Heal amount above which a pickup gets the green swirly
pub const DEFAULT_GREEN_SWIRLY_THRESHOLD: i32 = 500;

/// Decides which cosmetic effect a picked-up item triggers
///
/// The rules form a priority chain where the first match wins:
///
/// 1. heal above the threshold: green swirly
/// 2. any other heal: nothing
/// 3. rare and unique: blue swirly
/// 4. rare: cool swirly particles
/// 5. anything else: nothing
///
/// Healing items never get the rare or unique effects, even when flagged as
/// such; the heal rules end the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemEffectPolicy {
    green_swirly_threshold: i32,
}

impl ItemEffectPolicy {
    /// Creates a policy with a custom big-heal threshold
    pub fn new(green_swirly_threshold: i32) -> Self {
        ItemEffectPolicy {
            green_swirly_threshold,
        }
    }

    /// Heal amount that must be exceeded for the green swirly
    pub fn green_swirly_threshold(&self) -> i32 {
        self.green_swirly_threshold
    }

    /// Picks the cue for an item without playing it
    pub fn effect_for(&self, item: &Item) -> Option<EffectCue> {
        if item.heal() > self.green_swirly_threshold {
            Some(EffectCue::GreenSwirly)
        } else if item.heal() > 0 {
            None
        } else if item.is_rare() && item.is_unique() {
            Some(EffectCue::BlueSwirly)
        } else if item.is_rare() {
            Some(EffectCue::CoolSwirlyParticles)
        } else {
            None
        }
    }

    /// Plays the item's cue on the sink, if it has one
    ///
    /// The sink is called at most once. Returns the cue that was played.
    pub fn play_for_item<S: EffectSink + ?Sized>(
        &self,
        item: &Item,
        sink: &mut S,
    ) -> Option<EffectCue> {
        let cue = self.effect_for(item);
        if let Some(cue) = cue {
            debug!(item = item.id(), effect = cue.name(), "item effect");
            sink.play_effect(cue);
        }
        cue
    }
}

impl Default for ItemEffectPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_GREEN_SWIRLY_THRESHOLD)
    }
}

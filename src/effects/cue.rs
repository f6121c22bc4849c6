use std::fmt;

/// A named cosmetic trigger
///
/// Cues carry no state back to the player; the sink decides what to draw.
/// `name()` is the identifier the rendering side knows the effect by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectCue {
    /// Big heal picked up
    GreenSwirly,
    /// Rare and unique item picked up
    BlueSwirly,
    /// Rare item picked up
    CoolSwirlyParticles,
    /// Armour absorbed a hit
    Parry,
    /// A hit got through armour
    LotsOfGore,
}

impl EffectCue {
    /// Identifier the effect is known by, e.g. `lots_of_gore`
    pub fn name(&self) -> &'static str {
        match self {
            EffectCue::GreenSwirly => "green_swirly",
            EffectCue::BlueSwirly => "blue_swirly",
            EffectCue::CoolSwirlyParticles => "cool_swirly_particles",
            EffectCue::Parry => "parry",
            EffectCue::LotsOfGore => "lots_of_gore",
        }
    }
}

impl fmt::Display for EffectCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

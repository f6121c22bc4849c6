use tracing::info;

use super::cue::EffectCue;

/// Receives effect cues from the player
///
/// This is the rendering side seen from the player: fire-and-forget, nothing
/// comes back. Failures are the sink's own business.
pub trait EffectSink {
    fn play_effect(&mut self, cue: EffectCue);
}

impl<S: EffectSink + ?Sized> EffectSink for &mut S {
    fn play_effect(&mut self, cue: EffectCue) {
        (**self).play_effect(cue);
    }
}

impl<S: EffectSink + ?Sized> EffectSink for Box<S> {
    fn play_effect(&mut self, cue: EffectCue) {
        (**self).play_effect(cue);
    }
}

/// Sink that remembers every cue in the order it was played
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    played: Vec<EffectCue>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every cue played so far, oldest first
    pub fn cues(&self) -> &[EffectCue] {
        &self.played
    }

    /// Cue names played so far, oldest first
    pub fn names(&self) -> Vec<&'static str> {
        self.played.iter().map(EffectCue::name).collect()
    }

    /// Returns true if the cue was played at least once
    pub fn played(&self, cue: EffectCue) -> bool {
        self.played.contains(&cue)
    }

    /// How many times this cue was played
    pub fn count(&self, cue: EffectCue) -> usize {
        self.played.iter().filter(|played| **played == cue).count()
    }

    /// Forgets every recorded cue
    pub fn clear(&mut self) {
        self.played.clear();
    }
}

impl EffectSink for RecordingSink {
    fn play_effect(&mut self, cue: EffectCue) {
        self.played.push(cue);
    }
}

/// Sink that writes each cue to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EffectSink for TracingSink {
    fn play_effect(&mut self, cue: EffectCue) {
        info!(target: "rpg_player::effects", effect = cue.name(), "playing effect");
    }
}

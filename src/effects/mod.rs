// Effect module
//
// This module covers the cosmetic side of the player model:
// - Named effect cues sent to the rendering side
// - The sink capability that receives them, plus ready-made sinks
// - The item effect policy that picks a cue for a picked-up item

pub mod cue;
pub mod policy;
pub mod sink;

// Re-export main types
pub use cue::EffectCue;
pub use policy::{ItemEffectPolicy, DEFAULT_GREEN_SWIRLY_THRESHOLD};
pub use sink::{EffectSink, RecordingSink, TracingSink};

//! Audio cues emitted by the core
//!
//! The core never plays sound. It queues named cues with a suggested tone
//! and the host maps them to whatever audio backend it has (or drops them).

use serde::Serialize;

pub const CREATE_FREQUENCY: f32 = 440.0;
pub const FORCE_FREQUENCY: f32 = 220.0;
pub const BOUNCE_FREQUENCY: f32 = 330.0;
/// Collision tone = base + |impulse| × scale
pub const COLLISION_BASE_FREQUENCY: f32 = 200.0;
pub const COLLISION_FREQUENCY_SCALE: f32 = 100.0;
/// Impacts at or below this impulse stay silent
pub const COLLISION_CUE_THRESHOLD: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CueKind {
    Create,
    Force,
    Bounce,
    Collision,
}

impl CueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CueKind::Create => "create",
            CueKind::Force => "force",
            CueKind::Bounce => "bounce",
            CueKind::Collision => "collision",
        }
    }

    /// Suggested playback length in seconds
    pub fn duration(self) -> f32 {
        match self {
            CueKind::Collision => 0.2,
            _ => 0.1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AudioCue {
    pub kind: CueKind,
    pub frequency: f32,
}

impl AudioCue {
    pub fn create() -> Self {
        Self { kind: CueKind::Create, frequency: CREATE_FREQUENCY }
    }

    pub fn force() -> Self {
        Self { kind: CueKind::Force, frequency: FORCE_FREQUENCY }
    }

    pub fn bounce() -> Self {
        Self { kind: CueKind::Bounce, frequency: BOUNCE_FREQUENCY }
    }

    /// Cue for an impact, or `None` when it is too soft to hear
    pub fn collision(impulse: f32) -> Option<Self> {
        let impact = impulse.abs();
        if impact > COLLISION_CUE_THRESHOLD {
            Some(Self {
                kind: CueKind::Collision,
                frequency: COLLISION_BASE_FREQUENCY + impact * COLLISION_FREQUENCY_SCALE,
            })
        } else {
            None
        }
    }
}
